// SPDX-License-Identifier: MPL-2.0
use manga_mood::config::{self, Config, MAX_FADE_MS, MIN_FADE_MS};
use manga_mood::ui::theming::ThemeMode;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn settings_round_trip_through_a_config_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Light;
    cfg.catalog.path = Some(PathBuf::from("/srv/catalog.toml"));
    cfg.motion.reduced_motion = true;
    config::save_with_override(&cfg, base.clone()).expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(base);
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.catalog.path, Some(PathBuf::from("/srv/catalog.toml")));
    assert!(loaded.motion.reduced_motion);
}

#[test]
fn hand_written_settings_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[general]\ntheme_mode = \"system\"\n\n[motion]\nfade_ms = 1\n",
    )
    .expect("Failed to write settings");

    let loaded = config::load_from_path(&path).expect("Failed to load settings");
    assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    assert_eq!(loaded.motion.fade_ms, MIN_FADE_MS);
    assert!(loaded.motion.fade_ms <= MAX_FADE_MS);
}

#[test]
fn broken_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "theme_mode = [").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert!(warning.is_some());
}
