// SPDX-License-Identifier: MPL-2.0
//! Landing screen.

use super::ViewContext;
use crate::domain::session::Intent;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::faded;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding};

pub const APP_TITLE: &str = "MangaMood";
pub const TAGLINE: &str = "Stories that match your state of mind.";
pub const CALL_TO_ACTION: &str = "Choose Your Mood";

/// Title, tagline, button, emoji row.
pub const STAGGERED: usize = 4;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let colors = &ctx.colors;
    let catalog = ctx.snapshot.catalog;

    let emojis = catalog
        .moods()
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, mood| {
            row.push(Text::new(mood.emoji.as_str()).size(typography::TITLE_LG))
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(APP_TITLE)
                .size(typography::HERO)
                .color(faded(colors.brand_primary, ctx.alpha(0))),
        )
        .push(
            Text::new(TAGLINE)
                .size(typography::BODY_LG)
                .color(faded(colors.text_secondary, ctx.alpha(1))),
        )
        .push(
            button(Text::new(CALL_TO_ACTION).size(typography::BODY_LG))
                .padding(Padding::from([spacing::SM, spacing::XL]))
                .on_press(Intent::Start)
                .style(button_styles::primary),
        )
        .push(Container::new(emojis).padding(spacing::MD));

    Container::new(content)
        .center(Length::Fill)
        .padding(spacing::XXL)
        .into()
}
