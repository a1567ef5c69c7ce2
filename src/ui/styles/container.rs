// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::faded;
use crate::domain::catalog::AccentColor;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::{self, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page background, washed with the current accent.
pub fn page(accent: AccentColor) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(theming::tinted_background(
                colors.surface_primary,
                accent,
            ))),
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Visual state of an item card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLook {
    pub accent: Color,
    pub highlighted: bool,
    /// Another item's preview is open.
    pub dimmed: bool,
    /// Fade-in progress.
    pub alpha: f32,
}

/// Item card surface. A highlighted card is tinted and outlined by its accent.
pub fn item_card(look: CardLook) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let alpha = if look.dimmed {
            look.alpha * opacity::DIMMED
        } else {
            look.alpha
        };

        let (background, border_color, card_shadow) = if look.highlighted {
            (
                faded(look.accent, opacity::OVERLAY_SUBTLE),
                look.accent,
                iced::Shadow {
                    color: faded(look.accent, opacity::OVERLAY_MEDIUM),
                    ..shadow::LG
                },
            )
        } else {
            (colors.surface_secondary, colors.surface_tertiary, shadow::SM)
        };

        container::Style {
            background: Some(Background::Color(faded(background, alpha))),
            text_color: Some(faded(colors.text_primary, alpha)),
            border: Border {
                color: faded(border_color, alpha),
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: card_shadow,
            ..Default::default()
        }
    }
}

/// Small rounded label ("MANGA", "#revenge", mood chips).
pub fn badge(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(color, opacity::OVERLAY_SUBTLE * alpha))),
        text_color: Some(faded(color, alpha)),
        border: Border {
            color: faded(color, opacity::OVERLAY_MEDIUM * alpha),
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Dark scrim behind the preview modal.
pub fn scrim(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).overlay_background)),
        ..Default::default()
    }
}

/// Preview modal panel, bordered by the previewed item's accent.
pub fn modal(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(colors.surface_secondary)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

/// Stand-in for the preview clip surface.
pub fn media_frame(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OPAQUE,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: faded(accent, opacity::OVERLAY_MEDIUM),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
