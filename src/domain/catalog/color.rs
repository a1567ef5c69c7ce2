// SPDX-License-Identifier: MPL-2.0
//! Accent color value object.
//!
//! Items carry a display color token written as a CSS-style hex string.
//! The domain keeps it as plain RGB bytes; the UI layer converts it into
//! a toolkit color.

use std::fmt;
use std::str::FromStr;

/// Accent used when no item is highlighted (violet, `#7C3AED`).
pub const DEFAULT_ACCENT: AccentColor = AccentColor::from_rgb(0x7C, 0x3A, 0xED);

/// An sRGB color parsed from `#RRGGBB` or `#RGB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor {
    r: u8,
    g: u8,
    b: u8,
}

impl AccentColor {
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn r(self) -> u8 {
        self.r
    }

    #[must_use]
    pub fn g(self) -> u8 {
        self.g
    }

    #[must_use]
    pub fn b(self) -> u8 {
        self.b
    }

    /// Returns the channels normalized to `0.0..=1.0`.
    #[must_use]
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        DEFAULT_ACCENT
    }
}

/// Error returned when an accent color string is not a valid hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor(pub String);

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid accent color '{}', expected #RRGGBB", self.0)
    }
}

impl FromStr for AccentColor {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #RGB expands each digit: #F80 == #FF8800
                let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self::from_rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color: AccentColor = "#84CC16".parse().expect("valid color");
        assert_eq!((color.r(), color.g(), color.b()), (0x84, 0xCC, 0x16));
    }

    #[test]
    fn parses_lowercase_and_short_form() {
        assert_eq!(
            "#f80".parse::<AccentColor>(),
            Ok(AccentColor::from_rgb(0xFF, 0x88, 0x00))
        );
        assert_eq!(
            "#ef4444".parse::<AccentColor>(),
            Ok(AccentColor::from_rgb(0xEF, 0x44, 0x44))
        );
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["7C3AED", "#7C3AE", "#GGGGGG", "", "#", "#+1+2+3"] {
            assert!(raw.parse::<AccentColor>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn display_round_trips_uppercase() {
        assert_eq!(DEFAULT_ACCENT.to_string(), "#7C3AED");
        assert_eq!(AccentColor::default(), DEFAULT_ACCENT);
    }

    #[test]
    fn unit_rgb_is_normalized() {
        let [r, g, b] = AccentColor::from_rgb(255, 0, 51).to_unit_rgb();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
