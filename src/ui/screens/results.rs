// SPDX-License-Identifier: MPL-2.0
//! Results screen with the item grid and the preview overlay.

use super::ViewContext;
use crate::domain::session::{Intent, Snapshot};
use crate::ui::components::item_card::{self, CardState};
use crate::ui::components::{empty_state, preview_modal, tag_pill};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Padding};

pub const ADJUST_FILTERS: &str = "← Adjust Filters";
pub const START_OVER: &str = "Start Over";

/// "Your <Mood> Picks".
#[must_use]
pub fn heading(snapshot: &Snapshot<'_>) -> String {
    match snapshot.mood() {
        Some(mood) => format!("Your {} Picks", mood.label),
        None => "Your Picks".to_string(),
    }
}

/// "<n> stories found for your mood".
#[must_use]
pub fn summary(snapshot: &Snapshot<'_>) -> String {
    format!("{} stories found for your mood", snapshot.filtered_items.len())
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let snapshot = &ctx.snapshot;
    let catalog = snapshot.catalog;
    let preview_open = snapshot.is_preview_open();

    let chips = snapshot.selected_tags.iter().fold(Row::new().spacing(spacing::XS), |row, tag| {
        row.push(
            Container::new(Text::new(tag_pill::label(tag)).size(typography::CAPTION))
                .padding(Padding::from([spacing::XXS, spacing::SM]))
                .style(container_styles::badge(palette::PRIMARY_500, 1.0)),
        )
    });

    let grid: Element<'a, Intent> = if snapshot.has_matches() {
        snapshot
            .filtered_items
            .iter()
            .copied()
            .enumerate()
            .fold(Row::new().spacing(spacing::LG), |row, (index, item)| {
                let state = CardState {
                    highlighted: snapshot.is_highlighted(&item.id),
                    dimmed: preview_open && !snapshot.is_previewing(&item.id),
                    alpha: ctx.alpha(index),
                };
                row.push(item_card::view(item, catalog, state))
            })
            .wrap()
            .vertical_spacing(spacing::LG)
            .into()
    } else {
        empty_state::view()
    };

    let actions = Row::new()
        .spacing(spacing::LG)
        .push(
            button(Text::new(ADJUST_FILTERS).size(typography::BODY))
                .padding(Padding::from([spacing::XS, spacing::LG]))
                .on_press(Intent::AdjustFilters)
                .style(button_styles::outline),
        )
        .push(
            button(Text::new(START_OVER).size(typography::BODY))
                .padding(Padding::from([spacing::XS, spacing::LG]))
                .on_press(Intent::ResetAll)
                .style(button_styles::primary),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(heading(snapshot)).size(typography::TITLE_LG))
        .push(Text::new(summary(snapshot)).size(typography::BODY_LG))
        .push(chips.wrap())
        .push(grid)
        .push(actions);

    let page = scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill);

    match snapshot.preview() {
        Some(item) => Stack::new()
            .push(page)
            .push(preview_modal::view(item, catalog, ctx.now_playing))
            .into(),
        None => page.into(),
    }
}
