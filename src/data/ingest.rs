//! Ingestion payload decoding
//!
//! The upload service answers with `{ "headers": [...], "data": [{...}] }`.
//! This module turns that JSON into the inputs of
//! [`TabularDataSet::ingest`], mapping JSON values onto raw cells.

use crate::data::dataset::{RecordMap, TabularDataSet};
use crate::data::error::ChartResult;
use crate::types::RawValue;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Response body of the ingestion service
#[derive(Clone, Debug, Deserialize)]
pub struct IngestPayload {
    pub headers: Vec<String>,
    /// The service calls the row list `data`; `rows` is accepted too
    #[serde(alias = "rows")]
    pub data: Vec<Map<String, Value>>,
}

impl IngestPayload {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a validated dataset.
    pub fn into_dataset(self) -> ChartResult<TabularDataSet> {
        let rows = self
            .data
            .into_iter()
            .map(|obj| {
                obj.into_iter()
                    .map(|(key, value)| (key, json_value_to_cell(value)))
                    .collect::<RecordMap>()
            })
            .collect();
        Ok(TabularDataSet::ingest(self.headers, rows)?)
    }
}

/// Parse an ingestion response straight into a dataset
pub fn parse_ingest_json(json: &str) -> ChartResult<TabularDataSet> {
    IngestPayload::from_json(json)?.into_dataset()
}

/// Convert a JSON value into a raw cell
fn json_value_to_cell(value: Value) -> RawValue {
    match value {
        Value::Null => RawValue::Empty,
        Value::Number(n) => n
            .as_f64()
            .map(RawValue::Number)
            .unwrap_or_else(|| RawValue::Text(n.to_string())),
        Value::String(s) => RawValue::Text(s),
        Value::Bool(b) => RawValue::Text(b.to_string()),
        other => RawValue::Text(other.to_string()),
    }
}
