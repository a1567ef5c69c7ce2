// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::faded;
use crate::ui::design_tokens::{border, opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action ("Choose Your Mood", "Show Recommendations").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, shadow) = match status {
        button::Status::Hovered => (colors.brand_primary, shadow::LG),
        button::Status::Pressed => (colors.brand_secondary, shadow::SM),
        button::Status::Active => (colors.brand_secondary, shadow::MD),
        button::Status::Disabled => (faded(colors.brand_secondary, opacity::OVERLAY_MEDIUM), shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Text-only navigation ("← Back to start", "Start Over").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_primary,
        button::Status::Active => colors.text_tertiary,
        button::Status::Disabled => faded(colors.text_tertiary, opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined secondary action ("← Adjust Filters").
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(colors.surface_tertiary)),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Mood card; selected cards carry the brand border. `alpha` fades it in.
pub fn mood_card(selected: bool, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

        let background = if selected {
            faded(colors.brand_secondary, opacity::OVERLAY_SUBTLE)
        } else if hovered {
            colors.surface_tertiary
        } else {
            colors.surface_secondary
        };
        let border_color = if selected || hovered {
            colors.brand_primary
        } else {
            colors.surface_tertiary
        };

        button::Style {
            background: Some(Background::Color(faded(background, alpha))),
            text_color: faded(colors.text_primary, alpha),
            border: Border {
                color: faded(border_color, alpha),
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: if hovered { shadow::MD } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Tag pill, filled with the brand color when selected.
pub fn tag_pill(selected: bool, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered);

        let (background, text_color) = if selected {
            (colors.brand_secondary, WHITE)
        } else if hovered {
            (colors.surface_tertiary, colors.text_primary)
        } else {
            (colors.surface_secondary, colors.text_secondary)
        };

        button::Style {
            background: Some(Background::Color(faded(background, alpha))),
            text_color: faded(text_color, alpha),
            border: Border {
                color: faded(
                    if selected { colors.brand_primary } else { colors.surface_tertiary },
                    alpha,
                ),
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// "▶ Preview" button on a card, tinted with the item's accent.
pub fn preview(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OPAQUE,
            button::Status::Pressed => opacity::OVERLAY_HOVER,
            button::Status::Active | button::Status::Disabled => opacity::OVERLAY_STRONG,
        };

        button::Style {
            background: Some(Background::Color(faded(accent, alpha))),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_mood_card_uses_brand_border() {
        let style = mood_card(true, 1.0)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, ColorScheme::dark().brand_primary);
    }

    #[test]
    fn mood_card_fades_with_alpha() {
        let style = mood_card(false, 0.0)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color.a, 0.0);
    }

    #[test]
    fn selected_tag_pill_has_white_text() {
        let style = tag_pill(true, 1.0)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color, WHITE);
        let style = tag_pill(false, 1.0)(&Theme::Light, button::Status::Active);
        assert_ne!(style.text_color, WHITE);
    }

    #[test]
    fn link_has_no_background() {
        let style = link(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_none());
    }
}
