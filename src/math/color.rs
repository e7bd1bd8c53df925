use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

/// 8-bit sRGB colour, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(value: &str) -> anyhow::Result<Self> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("invalid colour '{}': expected #RRGGBB", value));
        }
        let hex = u32::from_str_radix(digits, 16)
            .with_context(|| format!("invalid colour '{}'", value))?;
        Ok(Self::from_u32(hex))
    }

    /// Parse a colour, falling back to the default walnut on bad input
    pub fn parse_lossy(value: &str) -> Self {
        Self::from_hex(value).unwrap_or_else(|err| {
            log::warn!("{err}; falling back to {}", Rgb::default());
            Rgb::default()
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0..=1
    pub fn to_array(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        PALETTE[0].color
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Named swatch offered by the configurator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgb,
}

/// Fixed finish palette; the first entry is the default
pub const PALETTE: [Swatch; 6] = [
    Swatch { name: "Walnut", color: Rgb::from_u32(0x8B4513) },
    Swatch { name: "Chocolate", color: Rgb::from_u32(0xD2691E) },
    Swatch { name: "Dark walnut", color: Rgb::from_u32(0x654321) },
    Swatch { name: "Goldenrod", color: Rgb::from_u32(0xDAA520) },
    Swatch { name: "Sienna", color: Rgb::from_u32(0xA0522D) },
    Swatch { name: "Peru", color: Rgb::from_u32(0xCD853F) },
];

/// Fixed tint for hardware (handles, hanging bars)
pub const HARDWARE_GRAY: Rgb = Rgb::from_u32(0xC0C0C0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#8B4513").unwrap(), Rgb::new(0x8B, 0x45, 0x13));
        assert_eq!(Rgb::from_hex("d2691e").unwrap(), Rgb::new(0xD2, 0x69, 0x1E));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_lossy_parse_uses_default() {
        assert_eq!(Rgb::parse_lossy("not a colour"), Rgb::default());
        assert_eq!(Rgb::default().to_hex(), "#8B4513");
    }

    #[test]
    fn test_to_array_white_and_black() {
        assert_eq!(Rgb::new(255, 255, 255).to_array(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::new(0, 0, 0).to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgb::from_u32(0xDAA520)).unwrap();
        assert_eq!(json, "\"#DAA520\"");
        let back: Rgb = serde_json::from_str("\"#654321\"").unwrap();
        assert_eq!(back, Rgb::from_u32(0x654321));
        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }

    #[test]
    fn test_palette_colours_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.color, b.color);
            }
        }
    }
}
