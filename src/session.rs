//! Interactive chart session - upload, pick axes and kind, generate.
//!
//! A session mirrors one dashboard view: it holds the current dataset, the
//! user's axis and kind choices, and the single chart shown on its canvas.
//! Every action runs to completion before the next one is handled.
//!
//! Generating is all-or-nothing. The series and descriptor are fully built
//! before the lifecycle manager is touched, so any error leaves the
//! previously rendered chart in place.

use crate::chart::{
    ChartArtifact, ChartLifecycleManager, ChartRenderer, ChartSpecBuilder, PaletteGenerator,
    TargetId,
};
use crate::data::{ChartError, ChartResult, DataPreview, TabularDataSet, build_series, parse_ingest_json};
use crate::perf::ScopedTimer;
use crate::settings::Settings;
use crate::types::{AxisSelection, ChartKind};
use rand::RngCore;
use rand::rngs::StdRng;
use uuid::Uuid;

pub struct ChartSession<R: ChartRenderer, G: RngCore = StdRng> {
    settings: Settings,
    dataset: Option<TabularDataSet>,
    selection: AxisSelection,
    kind: ChartKind,
    builder: ChartSpecBuilder<G>,
    charts: ChartLifecycleManager<R>,
    target: TargetId,
}

impl<R: ChartRenderer> ChartSession<R, StdRng> {
    /// Session drawing onto `target` with entropy-seeded random palettes
    pub fn new(renderer: R, target: impl Into<TargetId>, settings: Settings) -> Self {
        Self::with_palettes(renderer, target, settings, PaletteGenerator::from_entropy())
    }
}

impl<R: ChartRenderer, G: RngCore> ChartSession<R, G> {
    pub fn with_palettes(
        renderer: R,
        target: impl Into<TargetId>,
        settings: Settings,
        palettes: PaletteGenerator<G>,
    ) -> Self {
        let target = target.into();
        let mut charts = ChartLifecycleManager::new(renderer);
        charts.register_target(target.clone());

        Self {
            builder: ChartSpecBuilder::from_settings(&settings, palettes),
            settings,
            dataset: None,
            selection: AxisSelection::default(),
            kind: ChartKind::default(),
            charts,
            target,
        }
    }

    // =========================================================================
    // Upload
    // =========================================================================

    /// Replace the dataset. Axis choices that name vanished columns are cleared.
    pub fn load_dataset(&mut self, dataset: TabularDataSet) {
        if !dataset.has_column(&self.selection.x_column) {
            self.selection.x_column.clear();
        }
        if !dataset.has_column(&self.selection.y_column) {
            self.selection.y_column.clear();
        }
        tracing::info!(
            "Loaded dataset with {} rows x {} cols",
            dataset.row_count(),
            dataset.column_count()
        );
        self.dataset = Some(dataset);
    }

    /// Decode an ingestion response and load it. On error the previous
    /// dataset stays loaded.
    pub fn upload_json(&mut self, json: &str) -> ChartResult<()> {
        let dataset = {
            let _timer = ScopedTimer::new("ingest", self.settings.slow_stage_ms);
            parse_ingest_json(json)?
        };
        self.load_dataset(dataset);
        Ok(())
    }

    pub fn dataset(&self) -> Option<&TabularDataSet> {
        self.dataset.as_ref()
    }

    /// Head of the dataset for the preview table
    pub fn preview(&self) -> Option<DataPreview<'_>> {
        self.dataset
            .as_ref()
            .map(|ds| ds.preview(self.settings.preview_rows))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn set_x_axis(&mut self, column: impl Into<String>) {
        self.selection.x_column = column.into();
    }

    pub fn set_y_axis(&mut self, column: impl Into<String>) {
        self.selection.y_column = column.into();
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.kind = kind;
    }

    pub fn selection(&self) -> &AxisSelection {
        &self.selection
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    // =========================================================================
    // Generate
    // =========================================================================

    /// Build a chart from the current choices and show it, replacing the
    /// previous one.
    pub fn generate(&mut self) -> ChartResult<Uuid> {
        let dataset = self.dataset.as_ref().ok_or(ChartError::NoDataset)?;

        let series = {
            let _timer = ScopedTimer::new("build_series", self.settings.slow_stage_ms);
            build_series(dataset, &self.selection)?
        };

        let artifact = {
            let _timer = ScopedTimer::new("build_chart", self.settings.slow_stage_ms);
            self.builder.build(
                &series,
                self.kind,
                (self.selection.x_column.as_str(), self.selection.y_column.as_str()),
            )?
        };

        let _timer = ScopedTimer::new("install", self.settings.slow_stage_ms);
        self.charts.install(&self.target, artifact)
    }

    /// The chart currently on the canvas
    pub fn active_chart(&self) -> Option<&ChartArtifact> {
        self.charts.active(&self.target)
    }

    /// Remove the chart from the canvas (view teardown)
    pub fn teardown(&mut self) -> ChartResult<bool> {
        self.charts.release(&self.target)
    }

    pub fn target(&self) -> &TargetId {
        &self.target
    }

    pub fn charts(&self) -> &ChartLifecycleManager<R> {
        &self.charts
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
