//! Data ingestion and series extraction
//!
//! This module turns the ingestion service's output into an immutable
//! dataset and extracts sorted label/value series from it.
//!
//! ## Error Handling
//!
//! All data operations return `ChartResult<T>` which uses the `ChartError` type.
//! Common errors include:
//! - `Schema`: Duplicate headers or rows whose keys differ from the headers
//! - `AxisNotSelected`: An axis was left unset
//! - `UnknownColumn`: An axis names a column the dataset lacks
//!
//! Non-numeric Y cells are not errors; they read as `0`.

pub mod coercion;
mod comparator;
mod dataset;
mod error;
mod ingest;
mod series;

pub use comparator::*;
pub use dataset::*;
pub use error::*;
pub use ingest::*;
pub use series::*;
