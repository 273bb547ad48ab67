//! Per-kind chart policies
//!
//! Which colors, fill and baseline each chart kind gets is a lookup, not a
//! cascade of conditionals. The default table:
//!
//! | kind      | colors    | fill  | zero baseline | palette       |
//! |-----------|-----------|-------|---------------|---------------|
//! | bar       | scalar    | true  | true          | deterministic |
//! | line      | scalar    | false | true          | deterministic |
//! | radar     | scalar    | true  | false         | deterministic |
//! | pie       | per-point | -     | -             | deterministic |
//! | doughnut  | per-point | -     | -             | deterministic |
//! | polarArea | per-point | -     | -             | randomized    |

use crate::chart::palette::PaletteMode;
use crate::types::ChartKind;
use std::collections::{BTreeMap, HashMap};

/// Whether a series gets one color or one color per data point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Scalar,
    PerPoint,
}

/// Structural rules for one chart kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartPolicy {
    pub colors: ColorMode,
    /// `None` where fill has no meaning for the kind
    pub fill: Option<bool>,
    /// `None` where the kind has no Y scale
    pub begin_at_zero: Option<bool>,
    pub palette: PaletteMode,
}

impl ChartPolicy {
    const fn scalar(fill: bool, begin_at_zero: bool) -> Self {
        Self {
            colors: ColorMode::Scalar,
            fill: Some(fill),
            begin_at_zero: Some(begin_at_zero),
            palette: PaletteMode::Deterministic,
        }
    }

    const fn per_point(palette: PaletteMode) -> Self {
        Self {
            colors: ColorMode::PerPoint,
            fill: None,
            begin_at_zero: None,
            palette,
        }
    }

    /// Number of palette entries needed for a series of `len` points
    pub fn palette_size(&self, len: usize) -> usize {
        match self.colors {
            ColorMode::Scalar => 1,
            ColorMode::PerPoint => len,
        }
    }
}

/// Policies keyed by chart kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyTable {
    entries: BTreeMap<ChartKind, ChartPolicy>,
}

impl Default for PolicyTable {
    fn default() -> Self {
        let entries = BTreeMap::from([
            (ChartKind::Bar, ChartPolicy::scalar(true, true)),
            (ChartKind::Line, ChartPolicy::scalar(false, true)),
            (ChartKind::Radar, ChartPolicy::scalar(true, false)),
            (ChartKind::Pie, ChartPolicy::per_point(PaletteMode::Deterministic)),
            (ChartKind::Doughnut, ChartPolicy::per_point(PaletteMode::Deterministic)),
            (ChartKind::PolarArea, ChartPolicy::per_point(PaletteMode::Randomized)),
        ]);
        Self { entries }
    }
}

impl PolicyTable {
    pub fn get(&self, kind: ChartKind) -> Option<&ChartPolicy> {
        self.entries.get(&kind)
    }

    pub fn remove(&mut self, kind: ChartKind) -> Option<ChartPolicy> {
        self.entries.remove(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.entries.keys().copied()
    }

    /// Replace the palette mode of every listed kind that has an entry.
    pub fn with_palette_overrides(mut self, overrides: &HashMap<ChartKind, PaletteMode>) -> Self {
        for (kind, mode) in overrides {
            match self.entries.get_mut(kind) {
                Some(policy) => policy.palette = *mode,
                None => tracing::warn!("Ignoring palette override for unsupported kind {}", kind),
            }
        }
        self
    }
}
