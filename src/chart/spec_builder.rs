//! Chart descriptor assembly
//!
//! Looks up the kind's policy, requests a palette sized for it, and lays out
//! the dataset and options the renderer expects. Axis and emptiness checks
//! have already happened upstream; the only failure here is a kind with no
//! policy entry.

use crate::chart::artifact::{
    AxisScale, ChartArtifact, ChartDataset, ChartOptions, ColorSpec, LegendPlugin, Plugins,
    Scales, TitlePlugin,
};
use crate::chart::palette::{Palette, PaletteGenerator, base_palette_entry};
use crate::chart::policy::{ChartPolicy, ColorMode, PolicyTable};
use crate::constants::{DEFAULT_BORDER_WIDTH, LEGEND_POSITION};
use crate::data::{ChartError, ChartResult, Series};
use crate::settings::Settings;
use crate::types::ChartKind;
use rand::RngCore;
use rand::rngs::StdRng;
use uuid::Uuid;

/// Builds [`ChartArtifact`]s from series according to a [`PolicyTable`].
#[derive(Debug)]
pub struct ChartSpecBuilder<R: RngCore = StdRng> {
    policies: PolicyTable,
    palettes: PaletteGenerator<R>,
    border_width: u32,
    responsive: bool,
}

impl ChartSpecBuilder<StdRng> {
    /// Default policies with an entropy-seeded palette generator
    pub fn new() -> Self {
        Self::with_generator(PolicyTable::default(), PaletteGenerator::from_entropy())
    }
}

impl Default for ChartSpecBuilder<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> ChartSpecBuilder<R> {
    pub fn with_generator(policies: PolicyTable, palettes: PaletteGenerator<R>) -> Self {
        Self {
            policies,
            palettes,
            border_width: DEFAULT_BORDER_WIDTH,
            responsive: true,
        }
    }

    /// Apply palette overrides and descriptor defaults from settings.
    pub fn from_settings(settings: &Settings, palettes: PaletteGenerator<R>) -> Self {
        let policies = PolicyTable::default().with_palette_overrides(&settings.palette_overrides);
        Self {
            policies,
            palettes,
            border_width: settings.border_width,
            responsive: settings.responsive,
        }
    }

    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Assemble the descriptor for `series` drawn as `kind`.
    ///
    /// `axis_labels` is `(x column name, y column name)`.
    pub fn build(
        &mut self,
        series: &Series,
        kind: ChartKind,
        axis_labels: (&str, &str),
    ) -> ChartResult<ChartArtifact> {
        let policy = *self
            .policies
            .get(kind)
            .ok_or(ChartError::UnsupportedChartKind(kind))?;
        let (x_name, y_name) = axis_labels;

        let palette = self
            .palettes
            .generate(policy.palette_size(series.len()), policy.palette);
        let (background_color, border_color) = color_specs(&policy, &palette);

        let title = format!("{} by {}", y_name, x_name);
        let dataset = ChartDataset {
            label: y_name.to_string(),
            data: series.values(),
            background_color,
            border_color,
            border_width: self.border_width,
            fill: policy.fill,
        };

        let options = ChartOptions {
            responsive: self.responsive,
            scales: policy.begin_at_zero.map(|begin_at_zero| Scales {
                y: AxisScale { begin_at_zero },
            }),
            plugins: Plugins {
                title: TitlePlugin {
                    display: true,
                    text: title.clone(),
                },
                legend: (policy.colors == ColorMode::PerPoint).then(|| LegendPlugin {
                    position: LEGEND_POSITION.to_string(),
                }),
            },
        };

        tracing::debug!(
            kind = %kind,
            points = series.len(),
            palette = ?policy.palette,
            "Built chart descriptor"
        );

        Ok(ChartArtifact {
            id: Uuid::new_v4(),
            kind,
            title,
            labels: series.labels(),
            datasets: vec![dataset],
            options,
        })
    }
}

/// Split a palette into background and border specs per the color mode.
fn color_specs(policy: &ChartPolicy, palette: &Palette) -> (ColorSpec, ColorSpec) {
    match policy.colors {
        ColorMode::PerPoint => (
            ColorSpec::PerPoint(palette.iter().map(|e| e.background).collect()),
            ColorSpec::PerPoint(palette.iter().map(|e| e.border).collect()),
        ),
        ColorMode::Scalar => {
            // Scalar policies always request exactly one entry
            let entry = palette
                .first()
                .copied()
                .unwrap_or_else(|| base_palette_entry(0));
            (ColorSpec::Scalar(entry.background), ColorSpec::Scalar(entry.border))
        }
    }
}
