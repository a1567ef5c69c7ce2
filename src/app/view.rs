// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Wraps the displayed screen in the accent-tinted page, adds the theme
//! toggle and overlays toasts.

use super::Message;
use crate::domain::catalog::MediaRef;
use crate::domain::session::Snapshot;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::motion::Motion;
use crate::ui::notifications::{self, Toast};
use crate::ui::screens;
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub snapshot: Snapshot<'a>,
    pub motion: &'a Motion,
    pub now: Instant,
    pub now_playing: Option<&'a MediaRef>,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Label of the theme toggle, naming the theme it switches to.
#[must_use]
pub fn theme_toggle_label(theme_mode: ThemeMode) -> &'static str {
    if theme_mode.is_dark() {
        "☀ Light"
    } else {
        "🌙 Dark"
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let accent = ctx.snapshot.accent_color;
    let colors = ColorScheme::for_theme(&ctx.theme_mode.to_iced());

    let toggle = button(Text::new(theme_toggle_label(ctx.theme_mode)).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .style(button_styles::link);

    let top_bar = Container::new(toggle)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Right);

    let screen = screens::view(screens::ViewContext {
        snapshot: ctx.snapshot,
        motion: ctx.motion,
        now: ctx.now,
        colors,
        now_playing: ctx.now_playing,
    })
    .map(Message::Session);

    let page = Container::new(
        Column::new()
            .push(top_bar)
            .push(Container::new(screen).width(Length::Fill).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::page(accent));

    Stack::new()
        .push(page)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
