// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[catalog]` - Optional path to a user catalog file
//! - `[motion]` - Transition timings and reduced motion
//!
//! Selections (mood, tags) are never written here; only preferences are.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `MANGA_MOOD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use manga_mood::config;
//! use manga_mood::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme_mode = ThemeMode::Light;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Where the catalog is read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// User catalog file. The bundled catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Presentation timings. These never delay state changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    #[serde(default = "default_mood_advance_delay_ms")]
    pub mood_advance_delay_ms: u32,

    #[serde(default = "default_card_stagger_ms")]
    pub card_stagger_ms: u32,

    #[serde(default = "default_fade_ms")]
    pub fade_ms: u32,

    /// Disables the mood hold and all fades.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mood_advance_delay_ms: DEFAULT_MOOD_ADVANCE_DELAY_MS,
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
            fade_ms: DEFAULT_FADE_MS,
            reduced_motion: false,
        }
    }
}

impl MotionConfig {
    /// Returns a copy with every timing clamped to its bounds.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            mood_advance_delay_ms: self.mood_advance_delay_ms.min(MAX_MOOD_ADVANCE_DELAY_MS),
            card_stagger_ms: self.card_stagger_ms.min(MAX_CARD_STAGGER_MS),
            fade_ms: self.fade_ms.clamp(MIN_FADE_MS, MAX_FADE_MS),
            reduced_motion: self.reduced_motion,
        }
    }

    #[must_use]
    pub fn mood_advance_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.mood_advance_delay_ms))
    }

    #[must_use]
    pub fn card_stagger(&self) -> Duration {
        Duration::from_millis(u64::from(self.card_stagger_ms))
    }

    #[must_use]
    pub fn fade(&self) -> Duration {
        Duration::from_millis(u64::from(self.fade_ms))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub motion: MotionConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_mood_advance_delay_ms() -> u32 {
    DEFAULT_MOOD_ADVANCE_DELAY_MS
}

fn default_card_stagger_ms() -> u32 {
    DEFAULT_CARD_STAGGER_MS
}

fn default_fade_ms() -> u32 {
    DEFAULT_FADE_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "settings loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default settings");
                    return (
                        Config::default(),
                        Some(format!("Settings could not be read, defaults in use ({err})")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path. Motion timings are clamped.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    config.motion = config.motion.clamped();
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            catalog: CatalogConfig {
                path: Some(PathBuf::from("/srv/catalog.toml")),
            },
            motion: MotionConfig {
                mood_advance_delay_ms: 250,
                card_stagger_ms: 50,
                fade_ms: 300,
                reduced_motion: true,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.motion.mood_advance_delay(), Duration::from_millis(400));
        assert_eq!(config.motion.card_stagger(), Duration::from_millis(100));
        assert_eq!(config.motion.fade(), Duration::from_millis(500));
        assert!(!config.motion.reduced_motion);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"LIGHT\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("partial config loads");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.motion, MotionConfig::default());
    }

    #[test]
    fn unknown_theme_mode_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn motion_values_are_clamped_on_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[motion]\nmood_advance_delay_ms = 99999\ncard_stagger_ms = 99999\nfade_ms = 0\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("config loads");
        assert_eq!(loaded.motion.mood_advance_delay_ms, MAX_MOOD_ADVANCE_DELAY_MS);
        assert_eq!(loaded.motion.card_stagger_ms, MAX_CARD_STAGGER_MS);
        assert_eq!(loaded.motion.fade_ms, MIN_FADE_MS);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::System;
        save_with_override(&config, Some(base_dir.clone())).expect("save");

        assert!(base_dir.join(CONFIG_FILE).exists());
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ broken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&Config::default(), &config_path).expect("save");

        let content = fs::read_to_string(&config_path).expect("read");
        assert!(content.contains("[general]"));
        assert!(content.contains("[motion]"));
        assert!(content.contains("theme_mode = \"dark\""));
        assert!(!content.contains("path ="));
    }
}
