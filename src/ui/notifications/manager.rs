// SPDX-License-Identifier: MPL-2.0
//! Toast bookkeeping.
//!
//! Notifications are kept in arrival order. The oldest `MAX_VISIBLE_TOASTS`
//! are on screen; the rest wait their turn.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::MAX_VISIBLE_TOASTS;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    pending: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast and mirrors it to the log.
    pub fn push(&mut self, notification: Notification) {
        let text = notification.message();
        match notification.severity() {
            Severity::Info => tracing::debug!(text, "toast"),
            Severity::Warning => tracing::warn!(text, "toast"),
            Severity::Error => tracing::error!(text, "toast"),
        }
        self.pending.push(notification);
    }

    /// Removes the toast with `id`, visible or waiting.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|n| n.id() != id);
        self.pending.len() != before
    }

    /// Drops on-screen toasts whose timer ran out. Waiting toasts never expire.
    pub fn tick(&mut self, now: Instant) {
        let shown = self.visible_count();
        let mut index = 0;
        self.pending.retain(|n| {
            let keep = index >= shown || !n.is_expired_at(now);
            index += 1;
            keep
        });
    }

    pub fn handle_message(&mut self, message: &Message) {
        let Message::Dismiss(id) = message;
        self.dismiss(*id);
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter().take(MAX_VISIBLE_TOASTS)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.pending.len().min(MAX_VISIBLE_TOASTS)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len().saturating_sub(MAX_VISIBLE_TOASTS)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.pending.is_empty()
    }
}
