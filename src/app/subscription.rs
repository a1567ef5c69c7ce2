// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::domain::session::Intent;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes `Escape` to closing the preview, unless a widget captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => Some(Message::Session(Intent::ClosePreview)),
            _ => None,
        }
    })
}

/// Ticks only while something on screen changes over time.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating || has_notifications {
        time::every(Duration::from_millis(crate::config::ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
