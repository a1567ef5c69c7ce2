// SPDX-License-Identifier: MPL-2.0
//! Tag refinement screen.

use super::ViewContext;
use crate::domain::session::Intent;
use crate::ui::components::tag_pill;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding};

pub const HEADING: &str = "Refine Your Vibe";
pub const CHANGE_MOOD: &str = "← Change Mood";
pub const SHOW_RESULTS: &str = "Show Recommendations →";

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let snapshot = &ctx.snapshot;

    let subtitle = match snapshot.mood() {
        Some(mood) => format!("Feeling {} {}. Pick any tags that sound good.", mood.emoji, mood.label),
        None => "Pick any tags that sound good.".to_string(),
    };

    let pills = snapshot
        .catalog
        .tags()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, tag)| {
            let selected = snapshot.selected_tags.contains(tag);
            row.push(tag_pill::view(tag, selected, ctx.alpha(index)))
        })
        .wrap()
        .vertical_spacing(spacing::SM);

    let actions = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new(CHANGE_MOOD).size(typography::BODY))
                .on_press(Intent::BackToMood)
                .style(button_styles::link),
        )
        .push(
            button(Text::new(SHOW_RESULTS).size(typography::BODY_LG))
                .padding(Padding::from([spacing::SM, spacing::XL]))
                .on_press(Intent::ProceedToResults)
                .style(button_styles::primary),
        );

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(HEADING).size(typography::TITLE_LG))
        .push(Text::new(subtitle).size(typography::BODY_LG))
        .push(pills)
        .push(actions);

    Container::new(content)
        .center(Length::Fill)
        .padding(spacing::XXL)
        .into()
}
