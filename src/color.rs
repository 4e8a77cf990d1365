use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// Opaque RGBA color handed back by the resolver.
///
/// Serializes as a `#RRGGBB` string, or `#RRGGBBAA` when not fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Returned when no boundary covers the queried percentage.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Unpacks a 32-bit `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Color {
            alpha: (argb >> 24) as u8,
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        }
    }

    pub const fn argb(&self) -> u32 {
        ((self.alpha as u32) << 24)
            | ((self.red as u32) << 16)
            | ((self.green as u32) << 8)
            | (self.blue as u32)
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha == 0
    }

    /// Channels scaled to `0.0..=1.0`, in the order cairo's `set_source_rgba` takes them.
    pub fn to_unit_rgba(&self) -> [f64; 4] {
        [
            self.red as f64 / 255.0,
            self.green as f64 / 255.0,
            self.blue as f64 / 255.0,
            self.alpha as f64 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != 255 {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength(hex.len()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packs_alpha_in_high_byte() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.argb(), 0x7812_3456);
        assert_eq!(Color::from_argb(0x7812_3456), color);
        assert_eq!(Color::RED.argb(), 0xffff_0000);
    }

    #[test]
    fn transparent_is_all_zero() {
        assert_eq!(Color::TRANSPARENT.argb(), 0);
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::GREEN.is_transparent());
    }

    #[test]
    fn parses_hex_strings() {
        assert_eq!("#ff0000".parse::<Color>(), Ok(Color::RED));
        assert_eq!("#FF00FF".parse::<Color>(), Ok(Color::MAGENTA));
        assert_eq!("#00000000".parse::<Color>(), Ok(Color::TRANSPARENT));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!("ff0000".parse::<Color>(), Err(ColorParseError::MissingHash));
        assert_eq!(
            "#fff".parse::<Color>(),
            Err(ColorParseError::InvalidLength(3))
        );
        assert!(matches!(
            "#gg0000".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            "#+f0000".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn display_omits_opaque_alpha() {
        assert_eq!(Color::YELLOW.to_string(), "#ffff00");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }
}
