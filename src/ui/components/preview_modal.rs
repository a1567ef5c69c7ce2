// SPDX-License-Identifier: MPL-2.0
//! Overlay for the open preview.
//!
//! Clicking the scrim or the close button emits `ClosePreview`; clicks on
//! the panel itself are swallowed.

use crate::domain::catalog::{Catalog, Item, MediaRef};
use crate::domain::session::Intent;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use crate::ui::theming;
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding};

/// Height of the media surface inside the panel.
const MEDIA_HEIGHT: f32 = 280.0;

pub fn view<'a>(item: &'a Item, catalog: &'a Catalog, now_playing: Option<&MediaRef>) -> Element<'a, Intent> {
    let accent = theming::accent_color(item.accent_color);

    let moods = item
        .moods
        .iter()
        .filter_map(|id| catalog.mood(id))
        .map(|mood| mood.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let status = match now_playing {
        Some(media) if *media == item.preview => format!("▶ Playing {media}"),
        _ => format!("■ {}", item.preview),
    };

    let media = Container::new(Text::new(status).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(MEDIA_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::media_frame(accent));

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(item.title.as_str())
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕ Close").size(typography::BODY))
                .on_press(Intent::ClosePreview)
                .style(button_styles::link),
        );

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(
            Text::new(format!("{} · {moods}", item.kind.label()))
                .size(typography::CAPTION)
                .color(accent),
        )
        .push(media)
        .push(Text::new(item.description.as_str()).size(typography::BODY_LG));

    let panel = opaque(
        Container::new(panel)
            .width(Length::Fixed(sizing::PREVIEW_WIDTH))
            .padding(spacing::LG)
            .style(container_styles::modal(accent)),
    );

    let scrim = Container::new(panel)
        .center(Length::Fill)
        .padding(Padding::new(spacing::XL))
        .style(container_styles::scrim);

    opaque(mouse_area(scrim).on_press(Intent::ClosePreview))
}
