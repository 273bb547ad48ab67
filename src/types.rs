//! Core types for the chart pipeline.
//!
//! This module defines the fundamental data structures shared by ingestion,
//! series building and chart assembly: raw cell values, columns, rows,
//! axis selections and the closed set of chart kinds.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Cell Values
// ============================================================================

/// A single raw cell value as delivered by the ingestion service.
///
/// Cells are either numbers, text, or blank. Interpretation (numeric or not)
/// happens in [`crate::data::coercion`] and nowhere else.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// Labels keep their original type on the wire: numbers stay numbers,
/// text stays text, blanks become `null`.
impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Number(n) => serializer.serialize_f64(*n),
            RawValue::Text(s) => serializer.serialize_str(s),
            RawValue::Empty => serializer.serialize_none(),
        }
    }
}

// ============================================================================
// Dataset Structure
// ============================================================================

/// Column metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DataColumn {
    /// Column name/header, unique within a dataset
    pub name: String,
}

impl DataColumn {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// A row of cells, positionally aligned with the dataset's columns.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRow {
    pub cells: Vec<RawValue>,
}

impl DataRow {
    pub fn new(cells: Vec<RawValue>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, column: usize) -> &RawValue {
        static EMPTY: RawValue = RawValue::Empty;
        self.cells.get(column).unwrap_or(&EMPTY)
    }
}

// ============================================================================
// Chart Selection
// ============================================================================

/// The user's choice of label (X) and magnitude (Y) columns.
///
/// An empty string means the axis has not been chosen yet. Both axes may
/// name the same column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x_column: String,
    pub y_column: String,
}

impl AxisSelection {
    pub fn new(x_column: impl Into<String>, y_column: impl Into<String>) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.x_column.is_empty() && !self.y_column.is_empty()
    }
}

/// Which axis a selection error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
    PolarArea,
    Radar,
}

impl ChartKind {
    /// Identifier understood by the rendering collaborator
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::PolarArea => "polarArea",
            ChartKind::Radar => "radar",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Bar,
            ChartKind::Line,
            ChartKind::Pie,
            ChartKind::Doughnut,
            ChartKind::PolarArea,
            ChartKind::Radar,
        ]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown chart kind: {}", s))
    }
}
