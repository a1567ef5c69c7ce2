// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Only preferences are written back. Session state (mood, tags, preview)
//! is never persisted.

use crate::config;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Stores the theme preference, keeping every other setting as found.
///
/// A settings file that exists but cannot be read is left untouched and
/// reported as [`Error::Config`].
///
/// Without an explicit directory this is a no-op under test, so unit tests
/// never touch the user's real settings.
pub fn persist_theme_mode(theme_mode: ThemeMode, config_dir: Option<PathBuf>) -> Result<()> {
    if cfg!(test) && config_dir.is_none() {
        return Ok(());
    }

    let (mut cfg, warning) = config::load_with_override(config_dir.clone());
    if let Some(warning) = warning {
        return Err(Error::Config(warning));
    }
    cfg.general.theme_mode = theme_mode;
    config::save_with_override(&cfg, config_dir)?;
    tracing::debug!(%theme_mode, "theme preference saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn theme_is_saved_alongside_existing_settings() {
        let dir = tempdir().expect("temp dir");
        let mut cfg = config::Config::default();
        cfg.motion.card_stagger_ms = 150;
        config::save_with_override(&cfg, Some(dir.path().to_path_buf())).expect("seed");

        persist_theme_mode(ThemeMode::Light, Some(dir.path().to_path_buf())).expect("persist");

        let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.motion.card_stagger_ms, 150);
    }

    #[test]
    fn unreadable_settings_are_not_overwritten() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        let original = "[catalog]\npath = \"/home/me/my_catalog.toml\"\n\n[motion]\nfade_ms = \"slow\"\n";
        std::fs::write(&path, original).expect("write settings");

        let result = persist_theme_mode(ThemeMode::Light, Some(dir.path().to_path_buf()));

        assert!(matches!(result, Err(Error::Config(_))));
        let after = std::fs::read_to_string(&path).expect("read settings");
        assert_eq!(after, original);
    }
}
