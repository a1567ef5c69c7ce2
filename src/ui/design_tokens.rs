// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use manga_mood::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (slate)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.008, 0.024, 0.090);
    pub const GRAY_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const GRAY_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const GRAY_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const GRAY_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const GRAY_200: Color = Color::from_rgb(0.886, 0.910, 0.941);
    pub const GRAY_100: Color = Color::from_rgb(0.945, 0.961, 0.976);

    // Brand colors (violet scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.769, 0.710, 0.992);
    pub const PRIMARY_400: Color = Color::from_rgb(0.655, 0.545, 0.980);
    pub const PRIMARY_500: Color = Color::from_rgb(0.545, 0.361, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.486, 0.227, 0.929);
    pub const PRIMARY_700: Color = Color::from_rgb(0.427, 0.157, 0.851);

    // Secondary (pink), used in the title gradient stops
    pub const SECONDARY_500: Color = Color::from_rgb(0.925, 0.282, 0.600);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and cards
    pub const SURFACE: f32 = 0.95;

    /// Cards behind an open preview.
    pub const DIMMED: f32 = 0.4;

    /// Accent wash over the page background.
    pub const ACCENT_TINT: f32 = 0.12;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 40.0;

    pub const MOOD_CARD_WIDTH: f32 = 150.0;
    pub const MOOD_CARD_HEIGHT: f32 = 120.0;

    pub const ITEM_CARD_WIDTH: f32 = 300.0;

    pub const PREVIEW_WIDTH: f32 = 560.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Maximum width of the centered content column.
    pub const CONTENT_MAX_WIDTH: f32 = 1000.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero - Landing title
    pub const HERO: f32 = 56.0;

    /// Large title - Screen headings
    pub const TITLE_LG: f32 = 32.0;

    /// Medium title - Card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Taglines
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, tags
    pub const CAPTION: f32 = 12.0;

    /// Mood card emoji
    pub const EMOJI: f32 = 40.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DIMMED > 0.0 && opacity::DIMMED < 1.0);
    assert!(opacity::ACCENT_TINT > 0.0 && opacity::ACCENT_TINT < opacity::OVERLAY_SUBTLE);

    assert!(typography::HERO > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::PREVIEW_WIDTH < sizing::CONTENT_MAX_WIDTH);
};
