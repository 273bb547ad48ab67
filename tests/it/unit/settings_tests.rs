//! Unit tests for settings persistence.

use sheetchart::chart::PaletteMode;
use sheetchart::settings::{Settings, default_settings_path};
use sheetchart::types::ChartKind;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.border_width = 2;
    settings.preview_rows = 25;
    settings
        .palette_overrides
        .insert(ChartKind::PolarArea, PaletteMode::Deterministic);

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(Settings::load_from(&path).is_err());
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_default_path_ends_with_app_dir() {
    // None only on platforms without a config dir
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("sheetchart/settings.json"));
    }
}
