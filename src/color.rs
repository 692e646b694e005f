//! Hex color parsing and RGB formatting

use crate::error::{PaletteError, Result};

/// An RGB triple, alpha dropped
pub type Rgb = (u8, u8, u8);

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color without its alpha channel
    pub const fn to_rgb(&self) -> Rgb {
        (self.r, self.g, self.b)
    }

    /// Parse from "#RGB", "#RGBA", "#RRGGBB" or "#RRGGBBAA"
    ///
    /// Hex digits are case-insensitive. Short forms expand each digit to a
    /// full byte, so `#f80` is the same color as `#ff8800`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || PaletteError::invalid_color(s);

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        // All ASCII from here, byte slicing is safe
        let long = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let short = |i: usize| {
            u8::from_str_radix(&digits[i..i + 1], 16)
                .map(|nibble| nibble * 17)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => Ok(Color::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Ok(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Ok(Color::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Ok(Color::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => Err(invalid()),
        }
    }
}

/// Convert a hex color string to an RGB triple, ignoring any alpha digits
pub fn hex_to_rgb(s: &str) -> Result<Rgb> {
    Color::from_hex(s).map(|color| color.to_rgb())
}

/// Format an RGB triple as `rgb(R,G,B)`
pub fn format_rgb((r, g, b): Rgb) -> String {
    format!("rgb({},{},{})", r, g, b)
}
