// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.

use super::{persistence, Message};
use crate::application::PreviewSync;
use crate::domain::session::{Intent, Rejected, Session};
use crate::ui::motion::Motion;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub motion: &'a mut Motion,
    pub preview: &'a mut PreviewSync,
    pub theme_mode: &'a mut ThemeMode,
    pub config_dir: &'a Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
}

/// Applies an intent, then lets motion and the preview player catch up.
///
/// Rejected intents leave everything as it was.
pub fn handle_intent(ctx: &mut UpdateContext<'_>, intent: Intent, now: Instant) -> Task<Message> {
    let from = ctx.session.screen();
    let name = intent.name();

    match ctx.session.apply(intent) {
        Ok(()) => {
            let to = ctx.session.screen();
            if from != to {
                tracing::debug!(intent = name, %from, %to, "screen changed");
            }
            ctx.motion.observe(from, to, now);
            ctx.preview.sync(ctx.session);
        }
        Err(rejection @ Rejected::NotAvailable { .. }) => {
            tracing::debug!(intent = name, "{rejection}");
        }
        Err(rejection @ Rejected::NotFound(_)) => {
            tracing::warn!(intent = name, "{rejection}");
        }
    }

    Task::none()
}

/// Flips between light and dark and saves the preference.
pub fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    if let Err(err) = persistence::persist_theme_mode(*ctx.theme_mode, ctx.config_dir.clone()) {
        tracing::warn!(error = %err, "could not save theme preference");
        ctx.notifications
            .push(Notification::warning(format!("Theme preference not saved ({err})")));
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.motion.tick(now) {
        tracing::trace!(screen = %ctx.motion.displayed(), "hold released");
    }
    ctx.notifications.tick(now);
    Task::none()
}
