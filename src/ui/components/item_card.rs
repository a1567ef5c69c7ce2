// SPDX-License-Identifier: MPL-2.0
//! Result card for one catalog item.
//!
//! Clicking the card toggles its highlight; the preview button opens the
//! preview modal.

use crate::domain::catalog::{Catalog, Item};
use crate::domain::session::Intent;
use crate::ui::components::tag_pill;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container::{self as container_styles, CardLook};
use crate::ui::styles::faded;
use crate::ui::theming;
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{mouse, Color, Element, Length, Padding};

/// Number of moods shown as chips on a card.
const MOOD_CHIPS: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct CardState {
    pub highlighted: bool,
    pub dimmed: bool,
    pub alpha: f32,
}

pub fn view<'a>(item: &'a Item, catalog: &'a Catalog, state: CardState) -> Element<'a, Intent> {
    let accent = theming::accent_color(item.accent_color);
    let alpha = state.alpha;

    let mut badges = Row::new()
        .spacing(spacing::XS)
        .push(badge(item.kind.label().to_uppercase(), accent, alpha));
    for mood_id in item.moods.iter().take(MOOD_CHIPS) {
        let label = catalog
            .mood(mood_id)
            .map_or_else(|| mood_id.to_string(), |mood| format!("{} {}", mood.emoji, mood.label));
        badges = badges.push(badge(label, palette::GRAY_400, alpha));
    }

    let tags = item.tags.iter().fold(Row::new().spacing(spacing::XS), |row, tag| {
        row.push(
            Text::new(tag_pill::label(tag))
                .size(typography::CAPTION)
                .color(faded(accent, alpha)),
        )
    });

    let preview_button = button(Text::new("▶ Preview").size(typography::BODY))
        .padding(Padding::from([spacing::XS, spacing::MD]))
        .on_press(Intent::OpenPreview(item.id.clone()))
        .style(button_styles::preview(faded(accent, alpha)));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(badges)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(item.description.as_str()).size(typography::BODY))
        .push(tags.wrap())
        .push(preview_button);

    let card = Container::new(body)
        .width(Length::Fixed(sizing::ITEM_CARD_WIDTH))
        .padding(spacing::LG)
        .style(container_styles::item_card(CardLook {
            accent,
            highlighted: state.highlighted,
            dimmed: state.dimmed,
            alpha,
        }));

    mouse_area(card)
        .on_press(Intent::SetHighlight(item.id.clone()))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn badge<'a>(label: String, color: Color, alpha: f32) -> Element<'a, Intent> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding(Padding::from([spacing::XXS, spacing::XS]))
        .style(container_styles::badge(color, alpha))
        .into()
}
