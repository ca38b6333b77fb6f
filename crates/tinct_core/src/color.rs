//! Color and paint values
//!
//! Colors are stored as 8-bit RGBA so that palette steps compare exactly
//! against their hex definitions. Renderers that need normalized floats use
//! [`Color::to_array`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not `#rgb`, `#rrggbb`, `#rrggbbaa` or `rgb()/rgba()`
    #[error("invalid color syntax: {0:?}")]
    Syntax(String),

    /// A component was outside its allowed range
    #[error("color component out of range in {0:?}")]
    OutOfRange(String),
}

/// RGBA color with 8-bit channels (sRGB)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from an opaque `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Create from a `0xRRGGBBAA` value
    pub const fn from_hex_rgba(hex: u32) -> Self {
        Self::rgba(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Set alpha (0.0 to 1.0) and return the new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: unit_to_u8(alpha),
            ..self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Normalized `[r, g, b, a]` in 0.0..=1.0
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Linear interpolation between two colors, per channel
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::Syntax(s.to_string()));
        }
        if let Some(body) = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body, s);
        }
        Err(ColorParseError::Syntax(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        3 => {
            let expand = |n: u32| ((n & 0xF) * 17) as u8;
            Some(Color::rgb(
                expand(value >> 8),
                expand(value >> 4),
                expand(value),
            ))
        }
        6 => Some(Color::from_hex(value)),
        8 => Some(Color::from_hex_rgba(value)),
        _ => None,
    }
}

/// Parses the inside of `rgb(r, g, b)` / `rgba(r, g, b, a)` where `a` is 0..1
fn parse_functional(body: &str, original: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let syntax = || ColorParseError::Syntax(original.to_string());
    let range = || ColorParseError::OutOfRange(original.to_string());

    if parts.len() != 3 && parts.len() != 4 {
        return Err(syntax());
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let v: f32 = part.parse().map_err(|_| syntax())?;
        if !(0.0..=255.0).contains(&v) {
            return Err(range());
        }
        *slot = v.round() as u8;
    }

    let alpha = match parts.get(3) {
        Some(part) => {
            let a: f32 = part.parse().map_err(|_| syntax())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(range());
            }
            unit_to_u8(a)
        }
        None => 255,
    };

    Ok(Color::rgba(rgb[0], rgb[1], rgb[2], alpha))
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A concrete paint value: either a solid color or `transparent`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Paint {
    #[default]
    Transparent,
    Solid(Color),
}

impl Paint {
    pub const TRANSPARENT: Paint = Paint::Transparent;

    pub fn is_transparent(&self) -> bool {
        matches!(self, Paint::Transparent)
    }

    /// The solid color, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            Paint::Transparent => None,
            Paint::Solid(color) => Some(*color),
        }
    }

    /// Color to hand to a renderer; `transparent` becomes a zero-alpha color
    pub fn to_color(&self) -> Color {
        self.color().unwrap_or(Color::TRANSPARENT)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Transparent => f.write_str("transparent"),
            Paint::Solid(color) => fmt::Display::fmt(color, f),
        }
    }
}

impl FromStr for Paint {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("transparent") {
            Ok(Paint::Transparent)
        } else {
            s.parse().map(Paint::Solid)
        }
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Paint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c, Color::rgb(255, 85, 0));
        assert!(c.is_opaque());

        let a = Color::from_hex_rgba(0xFF000003);
        assert_eq!(a.a, 3);
        assert_eq!(a.to_string(), "#ff000003");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("#e5484d".parse::<Color>(), Ok(Color::from_hex(0xE5484D)));
        assert_eq!("#FFF".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!(
            "rgba(0, 0, 0, 0.25)".parse::<Color>(),
            Ok(Color::rgba(0, 0, 0, 64))
        );
        assert_eq!(
            "rgb(255, 255, 255)".parse::<Color>(),
            Ok(Color::WHITE)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::Syntax(_))
        ));
        assert!(matches!(
            "red".parse::<Color>(),
            Err(ColorParseError::Syntax(_))
        ));
        assert!(matches!(
            "rgba(0, 0, 300, 1)".parse::<Color>(),
            Err(ColorParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_paint_display_and_parse() {
        assert_eq!(Paint::Transparent.to_string(), "transparent");
        assert_eq!("transparent".parse::<Paint>(), Ok(Paint::Transparent));
        assert_eq!(
            "#ffffff".parse::<Paint>(),
            Ok(Paint::Solid(Color::WHITE))
        );
        assert_eq!(Paint::Transparent.to_color(), Color::TRANSPARENT);
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = Color::BLACK;
        let to = Color::WHITE;
        assert_eq!(Color::lerp(&from, &to, 0.0), from);
        assert_eq!(Color::lerp(&from, &to, 1.0), to);
        assert_eq!(Color::lerp(&from, &to, 0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Paint::Solid(Color::from_hex(0xE5484D))).unwrap();
        assert_eq!(json, "\"#e5484d\"");
        let back: Paint = serde_json::from_str("\"transparent\"").unwrap();
        assert_eq!(back, Paint::Transparent);
    }
}
