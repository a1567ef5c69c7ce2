// SPDX-License-Identifier: MPL-2.0
//! Mood card.

use crate::domain::catalog::Mood;
use crate::domain::session::Intent;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Text};
use iced::{alignment, Element, Length};

pub fn view(mood: &Mood, selected: bool, alpha: f32) -> Element<'_, Intent> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(mood.emoji.as_str()).size(typography::EMOJI))
        .push(Text::new(mood.label.as_str()).size(typography::BODY_LG));

    button(content)
        .width(Length::Fixed(sizing::MOOD_CARD_WIDTH))
        .height(Length::Fixed(sizing::MOOD_CARD_HEIGHT))
        .padding(spacing::MD)
        .on_press(Intent::SelectMood(mood.id.clone()))
        .style(button_styles::mood_card(selected, alpha))
        .into()
}
