//! Color values and parsing.

use core::fmt;

use serde::Serialize;

/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorValue {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
    /// Alpha channel (0-255, 255 = fully opaque).
    pub a: u8,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Red (#ff0000), used for the hit-test highlight.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// An opaque color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    ///
    /// The three-digit form is expanded by replicating digits, not by adding zeros.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: core::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => {
                let short = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => None,
        }
    }

    /// Common named colors, matched ASCII case-insensitively.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" | "aqua" => Self::rgb(0, 255, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "transparent" => Self {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            },
            _ => return None,
        };
        Some(color)
    }

    /// Parse either a hex color or a named color.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else {
            Self::from_named(value)
        }
    }

    /// Convert to hex string notation (#rrggbb, or #rrggbbaa if alpha != 255).
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}
