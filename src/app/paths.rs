// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins:
//! 1. a directory given explicitly (`--config-dir`, tests)
//! 2. the `MANGA_MOOD_CONFIG_DIR` environment variable, when non-empty
//! 3. the platform config directory from `dirs`, plus `MangaMood/`
//!
//! Linux resolves to `~/.config/MangaMood/`, macOS to
//! `~/Library/Application Support/MangaMood/`, Windows to
//! `%APPDATA%\MangaMood\`.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "MangaMood";

pub const ENV_CONFIG_DIR: &str = "MANGA_MOOD_CONFIG_DIR";

/// Resolves the config directory. `None` only when the platform has no
/// config directory and nothing else was given.
#[must_use]
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(env_config_dir).or_else(platform_config_dir)
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}
