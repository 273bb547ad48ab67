//! Validated, immutable tabular data
//!
//! A [`TabularDataSet`] is built once per upload from the ingestion
//! service's headers and row mappings. Validation is all-or-nothing: either
//! every row matches the header list or no dataset is produced.

use crate::data::error::SchemaError;
use crate::types::{DataColumn, DataRow, RawValue};
use std::collections::{BTreeMap, HashMap};

/// One ingested row, keyed by column name
pub type RecordMap = BTreeMap<String, RawValue>;

/// Uploaded rows and columns after validation.
///
/// Row order is ingestion order. There are no mutating methods; a new upload
/// means a new dataset.
#[derive(Clone, Debug)]
pub struct TabularDataSet {
    columns: Vec<DataColumn>,
    rows: Vec<DataRow>,
    index: HashMap<String, usize>,
}

impl TabularDataSet {
    /// Validate headers and rows and build the dataset.
    pub fn ingest(columns: Vec<String>, rows: Vec<RecordMap>) -> Result<Self, SchemaError> {
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if name.is_empty() {
                return Err(SchemaError::EmptyColumnName { index: i });
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }

        let mut data_rows = Vec::with_capacity(rows.len());
        for (row_idx, mut record) in rows.into_iter().enumerate() {
            let missing: Vec<String> = columns
                .iter()
                .filter(|name| !record.contains_key(*name))
                .cloned()
                .collect();
            let unexpected: Vec<String> = record
                .keys()
                .filter(|key| !index.contains_key(*key))
                .cloned()
                .collect();
            if !missing.is_empty() || !unexpected.is_empty() {
                return Err(SchemaError::RowKeyMismatch {
                    row: row_idx,
                    missing,
                    unexpected,
                });
            }

            let cells = columns
                .iter()
                .map(|name| record.remove(name).unwrap_or_default())
                .collect();
            data_rows.push(DataRow::new(cells));
        }

        tracing::debug!(
            "Ingested dataset with {} rows x {} cols",
            data_rows.len(),
            columns.len()
        );

        Ok(Self {
            columns: columns.iter().map(|name| DataColumn::new(name)).collect(),
            rows: data_rows,
            index,
        })
    }

    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Position of a column, if the dataset has it
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Raw value of `column` in row `row`, if both exist
    pub fn value(&self, row: usize, column: &str) -> Option<&RawValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r.cell(col))
    }

    /// First `limit` rows in ingestion order, for the data preview table.
    pub fn preview(&self, limit: usize) -> DataPreview<'_> {
        let shown = limit.min(self.rows.len());
        DataPreview {
            columns: &self.columns,
            rows: &self.rows[..shown],
            total_rows: self.rows.len(),
        }
    }
}

/// A truncated view over the head of a dataset
#[derive(Clone, Copy, Debug)]
pub struct DataPreview<'a> {
    pub columns: &'a [DataColumn],
    pub rows: &'a [DataRow],
    pub total_rows: usize,
}

impl DataPreview<'_> {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }

    /// "Showing N of M rows" when rows were cut off
    pub fn summary(&self) -> Option<String> {
        self.is_truncated()
            .then(|| format!("Showing {} of {} rows", self.rows.len(), self.total_rows))
    }
}
