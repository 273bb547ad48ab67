//! Chart assembly and lifecycle
//!
//! Turns a [`crate::data::Series`] into a render-ready [`ChartArtifact`]
//! and keeps exactly one artifact alive per rendering target.

mod artifact;
mod lifecycle;
mod palette;
mod policy;
mod spec_builder;

pub use artifact::*;
pub use lifecycle::*;
pub use palette::*;
pub use policy::*;
pub use spec_builder::*;
