//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDataBuilder` - Builder pattern for creating datasets row by row
//! - `Recorder` - A renderer that logs every create/destroy call
//! - Common fixtures like `city_population()`

use sheetchart::chart::{ChartArtifact, ChartRenderer, TargetId};
use sheetchart::data::{RecordMap, TabularDataSet};
use sheetchart::types::RawValue;

// ============================================================================
// TestDataBuilder - Builder pattern for creating test datasets
// ============================================================================

/// Builder for creating test datasets.
///
/// # Example
/// ```ignore
/// let dataset = TestDataBuilder::new(&["city", "pop"])
///     .row(vec!["NY".into(), 10.0.into()])
///     .row(vec!["LA".into(), 8.0.into()])
///     .build();
/// ```
pub struct TestDataBuilder {
    headers: Vec<String>,
    rows: Vec<RecordMap>,
}

impl TestDataBuilder {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row; cells line up with the headers.
    pub fn row(mut self, cells: Vec<RawValue>) -> Self {
        assert_eq!(cells.len(), self.headers.len(), "row width must match headers");
        let record = self.headers.iter().cloned().zip(cells).collect();
        self.rows.push(record);
        self
    }

    pub fn build(self) -> TabularDataSet {
        TabularDataSet::ingest(self.headers, self.rows).expect("valid test dataset")
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// `city`/`pop` with NY before LA
pub fn city_population() -> TabularDataSet {
    TestDataBuilder::new(&["city", "pop"])
        .row(vec!["NY".into(), 10.0.into()])
        .row(vec!["LA".into(), 8.0.into()])
        .build()
}

/// Ingestion payload JSON for `city_population()`
pub const CITY_PAYLOAD: &str = r#"{
    "headers": ["city", "pop"],
    "data": [
        {"city": "NY", "pop": 10},
        {"city": "LA", "pop": 8}
    ]
}"#;

// ============================================================================
// Recorder - renderer double
// ============================================================================

/// Records renderer calls as `create <target> <title> #<handle>` and
/// `destroy <target> #<handle>`.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
    next: u32,
}

impl Recorder {
    pub fn creates(&self) -> usize {
        self.events.iter().filter(|e| e.starts_with("create")).count()
    }

    pub fn destroys(&self) -> usize {
        self.events.iter().filter(|e| e.starts_with("destroy")).count()
    }
}

impl ChartRenderer for Recorder {
    type Handle = u32;

    fn create(&mut self, target: &TargetId, artifact: &ChartArtifact) -> u32 {
        self.next += 1;
        self.events
            .push(format!("create {} {} #{}", target, artifact.title, self.next));
        self.next
    }

    fn destroy(&mut self, target: &TargetId, handle: u32) {
        self.events.push(format!("destroy {} #{}", target, handle));
    }
}
