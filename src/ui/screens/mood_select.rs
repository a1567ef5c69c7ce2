// SPDX-License-Identifier: MPL-2.0
//! Mood selection screen.

use super::ViewContext;
use crate::domain::session::Intent;
use crate::ui::components::mood_card;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub const HEADING: &str = "How are you feeling?";
pub const BACK: &str = "← Back to start";

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let snapshot = &ctx.snapshot;

    let cards = snapshot
        .catalog
        .moods()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::MD), |row, (index, mood)| {
            let selected = snapshot.selected_mood == Some(&mood.id);
            row.push(mood_card::view(mood, selected, ctx.alpha(index)))
        })
        .wrap()
        .vertical_spacing(spacing::MD);

    // Frozen while the chosen card is held on screen.
    let back = button(Text::new(BACK).size(typography::BODY))
        .on_press_maybe((!ctx.is_holding()).then_some(Intent::BackToStart))
        .style(button_styles::link);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(HEADING).size(typography::TITLE_LG))
        .push(cards)
        .push(back);

    Container::new(content)
        .center(Length::Fill)
        .padding(spacing::XXL)
        .into()
}
