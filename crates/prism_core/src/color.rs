//! Color primitive shared by the palette, theme, and style layers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("hex color must be 6 or 8 digits, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// An RGBA color with components in the 0.0..=1.0 range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque color from float components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from float components including alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a 24-bit `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` string (leading `#` optional).
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::BadLength(s.to_owned()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::BadDigit(s.to_owned()))?;
        if digits.len() == 6 {
            Ok(Self::from_hex(value))
        } else {
            Ok(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0))
        }
    }

    /// Same color with a replacement alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Source-over composite of `self` on an opaque `background`.
    pub fn over(self, background: Self) -> Self {
        Self {
            r: self.r * self.a + background.r * (1.0 - self.a),
            g: self.g * self.a + background.g * (1.0 - self.a),
            b: self.b * self.a + background.b * (1.0 - self.a),
            a: 1.0,
        }
    }

    /// `#rrggbb` for opaque colors, `rgba(r,g,b,a)` otherwise.
    pub fn to_hex_string(self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        if self.a < 1.0 {
            format!("rgba({r},{g},{b},{:.2})", self.a)
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}
