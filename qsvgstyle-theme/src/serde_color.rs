//! Custom serialization helpers for vello::peniko::Color
//!
//! Colors are written as `#rrggbb` when opaque and `#rrggbbaa` otherwise.
//! Palette files may also store a raw `0xAARRGGBB` integer.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::error::ThemeError;

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string or an ARGB integer.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match RawColor::deserialize(deserializer)? {
        RawColor::Hex(hex) => parse_hex_color(&hex).map_err(Error::custom),
        RawColor::Argb(value) => from_argb(value).map_err(Error::custom),
    }
}

/// Same as the parent module, for `Option<Color>` fields.
pub mod option {
    use super::*;

    /// Serialize an optional Color; `None` is skipped by the caller.
    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(c) => serializer.serialize_str(&to_hex(*c)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional Color.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize(deserializer).map(Some)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Hex(String),
    Argb(i64),
}

/// Format a color as `#rrggbb` or `#rrggbbaa`.
pub fn to_hex(color: Color) -> String {
    let c = color.to_rgba8();
    if c.a == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
    }
}

/// Parse a hex color string with optional alpha channel.
///
/// - `#rrggbb` - opaque
/// - `#rrggbbaa` - with alpha channel
pub fn parse_hex_color(hex: &str) -> Result<Color, ThemeError> {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(|| ThemeError::InvalidColor(hex.to_string()))
    };
    match digits.len() {
        6 => Ok(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Ok(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => Err(ThemeError::InvalidColor(hex.to_string())),
    }
}

/// Convert a `0xAARRGGBB` integer to a color.
pub fn from_argb(value: i64) -> Result<Color, ThemeError> {
    let v = u32::try_from(value).map_err(|_| ThemeError::InvalidColor(value.to_string()))?;
    let [a, r, g, b] = v.to_be_bytes();
    Ok(Color::from_rgba8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        let c = parse_hex_color("#102030").unwrap().to_rgba8();
        assert_eq!((c.r, c.g, c.b, c.a), (0x10, 0x20, 0x30, 255));

        let c = parse_hex_color("#ff000080").unwrap().to_rgba8();
        assert_eq!((c.r, c.a), (255, 0x80));
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }

    #[test]
    fn argb_integer_puts_alpha_first() {
        let c = from_argb(0x80ff0000).unwrap().to_rgba8();
        assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 0, 0x80));
        assert!(from_argb(-1).is_err());
    }
}
