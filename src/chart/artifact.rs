//! Render-ready chart descriptors
//!
//! A [`ChartArtifact`] is everything the rendering collaborator needs to draw
//! a chart. It serializes to the collaborator's JSON shape:
//!
//! ```json
//! {
//!   "kind": "bar",
//!   "title": "pop by city",
//!   "labels": ["LA", "NY"],
//!   "datasets": [{ "label": "pop", "data": [8.0, 10.0], ... }],
//!   "options": { "responsive": true, "scales": { "y": { "beginAtZero": true } }, ... }
//! }
//! ```

use crate::chart::palette::Rgba;
use crate::types::{ChartKind, RawValue};
use serde::Serialize;
use uuid::Uuid;

/// A color applied to the whole series, or one per point
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Scalar(Rgba),
    PerPoint(Vec<Rgba>),
}

impl ColorSpec {
    pub fn len(&self) -> usize {
        match self {
            ColorSpec::Scalar(_) => 1,
            ColorSpec::PerPoint(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, ColorSpec::Scalar(_))
    }
}

/// One plotted series
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    pub border_color: ColorSpec,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScale {
    pub begin_at_zero: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub y: AxisScale,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TitlePlugin {
    pub display: bool,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendPlugin {
    pub position: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    pub title: TitlePlugin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendPlugin>,
}

/// Renderer hints
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
}

impl ChartOptions {
    /// Whether the Y axis is forced to start at zero
    pub fn begin_at_zero(&self) -> Option<bool> {
        self.scales.as_ref().map(|s| s.y.begin_at_zero)
    }
}

/// The fully assembled chart descriptor
#[derive(Clone, Debug, Serialize)]
pub struct ChartArtifact {
    /// Identity of this build; two builds of identical charts differ here
    #[serde(skip)]
    pub id: Uuid,
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<RawValue>,
    pub datasets: Vec<ChartDataset>,
    pub options: ChartOptions,
}

impl ChartArtifact {
    /// The single dataset every artifact carries
    pub fn primary_dataset(&self) -> Option<&ChartDataset> {
        self.datasets.first()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
