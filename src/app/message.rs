// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::session::Intent;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A user intent forwarded to the session.
    Session(Intent),
    ToggleTheme,
    Notification(notifications::NotificationMessage),
    /// Periodic tick while something is animating or a toast is visible.
    Tick(Instant),
}

impl From<Intent> for Message {
    fn from(intent: Intent) -> Self {
        Message::Session(intent)
    }
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Catalog file to load instead of the configured or bundled one.
    pub catalog: Option<PathBuf>,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<PathBuf>,
    /// Theme for this run, without touching the saved preference.
    pub theme: Option<ThemeMode>,
}
