//! Palette colors
//!
//! Particles carry an opaque RGB token; it only matters to the renderer.
//! Serialized as `#rrggbb` strings so settings files stay readable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimError;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self, SimError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(SimError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| SimError::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS-style `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

/// Default palette: seven blues and teals
pub const PALETTE: [Color; 7] = [
    Color::rgb(0x45, 0x7b, 0x9d),
    Color::rgb(0x02, 0x30, 0x47),
    Color::rgb(0x21, 0x9e, 0xbc),
    Color::rgb(0x48, 0x95, 0xef),
    Color::rgb(0x2a, 0x9d, 0x8f),
    Color::rgb(0x00, 0x77, 0xb6),
    Color::rgb(0x26, 0x46, 0x53),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse() {
        assert_eq!(Color::from_hex("#457b9d").unwrap(), PALETTE[0]);
        assert_eq!(Color::from_hex("023047").unwrap(), PALETTE[1]);
        assert_eq!(PALETTE[2].to_hex(), "#219ebc");
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&PALETTE[3]).unwrap();
        assert_eq!(json, "\"#4895ef\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PALETTE[3]);
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
