//! sheetchart - spreadsheet rows to chart descriptors
//!
//! Pipeline:
//! - `data`: ingestion, value coercion, row ordering and series extraction
//! - `chart`: palettes, per-kind policies, descriptor assembly and the
//!   one-chart-per-target lifecycle
//! - `session`: the interactive upload / select / generate flow
//!
//! Ambient pieces live in `settings`, `perf` and `telemetry`.

pub mod chart;
pub mod constants;
pub mod data;
pub mod perf;
pub mod session;
pub mod settings;
pub mod telemetry;
pub mod types;

pub use chart::{
    ChartArtifact, ChartLifecycleManager, ChartRenderer, ChartSpecBuilder, PaletteGenerator,
    PaletteMode, TargetId,
};
pub use data::{ChartError, ChartResult, Series, TabularDataSet, build_series};
pub use session::ChartSession;
pub use settings::Settings;
pub use types::{AxisSelection, ChartKind, RawValue};
