//! Error types for chart pipeline operations
//!
//! Provides unified error handling for ingestion, series building, chart
//! assembly and artifact lifecycle. Every variant is returned to the caller;
//! none of them leave a half-built chart behind.

use crate::types::{Axis, ChartKind};
use thiserror::Error;

/// Ways an ingested dataset can be malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two headers share the same name
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A header is blank
    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },

    /// A row's keys differ from the header list
    #[error("row {row} does not match the columns (missing: {missing:?}, unexpected: {unexpected:?})")]
    RowKeyMismatch {
        row: usize,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

/// Errors that can occur while turning a dataset into a bound chart
#[derive(Error, Debug)]
pub enum ChartError {
    /// Malformed dataset; nothing was ingested
    #[error("Invalid dataset: {0}")]
    Schema(#[from] SchemaError),

    /// One or both axes were not chosen before generating
    #[error("Please select both X and Y axes ({axis} axis is not set)")]
    AxisNotSelected { axis: Axis },

    /// An axis names a column the dataset does not have
    #[error("Unknown column for {axis} axis: {column}")]
    UnknownColumn { axis: Axis, column: String },

    /// The policy table has no entry for this kind
    #[error("Unsupported chart kind: {0}")]
    UnsupportedChartKind(ChartKind),

    /// Lifecycle operation on a target that was never registered
    #[error("Invalid rendering target: {0}")]
    InvalidTarget(String),

    /// Generate was requested before any upload
    #[error("No dataset has been uploaded")]
    NoDataset,

    /// The ingestion payload could not be decoded
    #[error("Ingestion payload error: {0}")]
    Ingest(#[from] serde_json::Error),
}

/// Result type alias for chart pipeline operations
pub type ChartResult<T> = Result<T, ChartError>;
