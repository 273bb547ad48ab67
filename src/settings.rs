//! User settings for the chart pipeline.
//!
//! Settings live in `<config dir>/sheetchart/settings.json`. Every field has
//! a default, so a partial file is fine and a missing or broken file falls
//! back to defaults.

use crate::chart::PaletteMode;
use crate::constants::{DEFAULT_BORDER_WIDTH, DEFAULT_PREVIEW_ROWS, DEFAULT_SLOW_STAGE_MS};
use crate::types::ChartKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Replaces a chart kind's default palette mode
    pub palette_overrides: HashMap<ChartKind, PaletteMode>,
    /// Stroke width of every dataset
    pub border_width: u32,
    /// Passed through to the renderer
    pub responsive: bool,
    /// Rows shown in the data preview
    pub preview_rows: usize,
    /// Pipeline stages slower than this are logged as warnings
    pub slow_stage_ms: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette_overrides: HashMap::new(),
            border_width: DEFAULT_BORDER_WIDTH,
            responsive: true,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            slow_stage_ms: DEFAULT_SLOW_STAGE_MS,
        }
    }
}

/// Default location of the settings file
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sheetchart").join("settings.json"))
}

impl Settings {
    /// Read settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    /// Read settings from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
