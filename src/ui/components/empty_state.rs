// SPDX-License-Identifier: MPL-2.0
//! Shown when the current filters match nothing.

use crate::domain::session::Intent;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length, Padding};

pub const NO_MATCHES: &str = "No matches found. Try different filters!";

pub fn view<'a>() -> Element<'a, Intent> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("🔍").size(typography::EMOJI))
        .push(Text::new(NO_MATCHES).size(typography::BODY_LG))
        .push(
            button(Text::new("← Adjust Filters").size(typography::BODY))
                .padding(Padding::from([spacing::XS, spacing::LG]))
                .on_press(Intent::AdjustFilters)
                .style(button_styles::outline),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
