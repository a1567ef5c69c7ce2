// SPDX-License-Identifier: MPL-2.0
//! `#tag` toggle pill.

use crate::domain::catalog::TagId;
use crate::domain::session::Intent;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Text};
use iced::{Element, Padding};

/// Display form of a tag.
#[must_use]
pub fn label(tag: &TagId) -> String {
    format!("#{tag}")
}

pub fn view(tag: &TagId, selected: bool, alpha: f32) -> Element<'static, Intent> {
    button(Text::new(label(tag)).size(typography::BODY))
        .padding(Padding::from([spacing::XS, spacing::MD]))
        .on_press(Intent::ToggleTag(tag.clone()))
        .style(button_styles::tag_pill(selected, alpha))
        .into()
}
