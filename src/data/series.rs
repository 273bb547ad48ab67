//! Series extraction
//!
//! Sorts a copy of the dataset's rows by the X column and pulls out parallel
//! label/value pairs. Every row yields exactly one point; nothing is grouped,
//! dropped or inserted.

use crate::data::coercion::to_number;
use crate::data::comparator::RowComparator;
use crate::data::dataset::TabularDataSet;
use crate::data::error::{ChartError, ChartResult};
use crate::types::{Axis, AxisSelection, RawValue};

/// A single (label, value) pair
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    /// X cell in its original type
    pub label: RawValue,
    /// Y cell coerced to a magnitude
    pub value: f64,
}

/// Ordered points ready for chart assembly
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<RawValue> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Resolve an axis to a column index, rejecting unset or unknown names.
fn resolve_axis(dataset: &TabularDataSet, axis: Axis, name: &str) -> ChartResult<usize> {
    if name.is_empty() {
        return Err(ChartError::AxisNotSelected { axis });
    }
    dataset
        .column_index(name)
        .ok_or_else(|| ChartError::UnknownColumn {
            axis,
            column: name.to_string(),
        })
}

/// Build the series for `selection`, sorted ascending by the X column.
pub fn build_series(dataset: &TabularDataSet, selection: &AxisSelection) -> ChartResult<Series> {
    // Both axes are checked for "unset" before either is looked up
    if selection.x_column.is_empty() {
        return Err(ChartError::AxisNotSelected { axis: Axis::X });
    }
    if selection.y_column.is_empty() {
        return Err(ChartError::AxisNotSelected { axis: Axis::Y });
    }
    let x = resolve_axis(dataset, Axis::X, &selection.x_column)?;
    let y = resolve_axis(dataset, Axis::Y, &selection.y_column)?;

    let comparator = RowComparator::new(x);
    let mut rows: Vec<_> = dataset.rows().iter().collect();
    comparator.sort_rows(&mut rows);

    let points = rows
        .into_iter()
        .map(|row| SeriesPoint {
            label: row.cell(x).clone(),
            value: to_number(row.cell(y)),
        })
        .collect();

    Ok(Series { points })
}
