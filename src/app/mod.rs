// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the discovery [`Session`] and the presentation state that
//! follows it ([`Motion`], the preview player, toasts). Messages from the UI
//! are turned into session intents; everything else reacts to the result.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::PreviewSync;
use crate::config;
use crate::domain::catalog::Catalog;
use crate::domain::session::{Screen, Session};
use crate::error::Error;
use crate::infrastructure::{self, LoggingPreviewPlayer};
use crate::ui::motion::Motion;
use crate::ui::notifications::{self, Notification};
use crate::ui::screens;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const APP_TITLE: &str = "MangaMood";

/// Root Iced application state.
pub struct App {
    session: Session,
    motion: Motion,
    preview: PreviewSync,
    theme_mode: ThemeMode,
    config_dir: Option<PathBuf>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.session.screen())
            .field("displayed", &self.motion.displayed())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the catalog, then starts a fresh session on the
    /// landing screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut notifications = notifications::Manager::new();

        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = config_warning {
            notifications.push(Notification::warning(warning));
        }

        let catalog_path = flags.catalog.or_else(|| config.catalog.path.clone());
        let catalog = match infrastructure::load_with_fallback(catalog_path.as_deref()) {
            Ok((catalog, warning)) => {
                if let Some(warning) = warning {
                    notifications.push(Notification::warning(warning));
                }
                catalog
            }
            Err(err) => {
                let err = Error::from(err);
                tracing::error!(error = %err, "no catalog available");
                notifications.push(Notification::error(err.to_string()));
                Catalog::default()
            }
        };

        let session = Session::new(Arc::new(catalog));
        let motion = Motion::new(&config.motion, session.screen(), Instant::now());

        let app = App {
            session,
            motion,
            preview: PreviewSync::new(Box::new(LoggingPreviewPlayer::new())),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            config_dir: flags.config_dir,
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let snapshot = self.session.snapshot();
        match (self.session.screen(), snapshot.mood()) {
            (Screen::TagSelect | Screen::Results, Some(mood)) => {
                format!("{} {} - {APP_TITLE}", mood.emoji, mood.label)
            }
            _ => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        let snapshot = self.session.snapshot();
        let displayed = self.motion.displayed();
        let elements = screens::staggered_elements(&snapshot, displayed);
        let animating = self.motion.is_animating(elements, Instant::now());

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                animating,
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            motion: &mut self.motion,
            preview: &mut self.preview,
            theme_mode: &mut self.theme_mode,
            config_dir: &self.config_dir,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Session(intent) => update::handle_intent(&mut ctx, intent, Instant::now()),
            Message::ToggleTheme => update::handle_toggle_theme(&mut ctx),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            snapshot: self.session.snapshot(),
            motion: &self.motion,
            now: Instant::now(),
            now_playing: self.preview.player().now_playing(),
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}
