//! Color scale tokens
//!
//! Every named color carries three 12-step scales: solid steps for light
//! mode, solid steps for dark mode, and a mode-invariant alpha scale.
//! Steps are 1-based to match the design-system documentation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tinct_core::Color;

use crate::error::ThemeError;
use crate::theme::ThemeMode;

/// Number of steps in every scale
pub const SCALE_STEPS: usize = 12;

/// Named palette colors: gray plus the accent colors
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorName {
    Gray,
    Tomato,
    Red,
    Ruby,
    Crimson,
    Pink,
    Plum,
    Purple,
    Violet,
    Iris,
    Indigo,
    Blue,
    Cyan,
    Teal,
    Jade,
    Green,
    Grass,
    Bronze,
    Gold,
    Brown,
    Orange,
    Amber,
    Yellow,
    Lime,
    Mint,
    Sky,
}

impl ColorName {
    /// Every palette color, gray first
    pub const ALL: [ColorName; 26] = [
        ColorName::Gray,
        ColorName::Tomato,
        ColorName::Red,
        ColorName::Ruby,
        ColorName::Crimson,
        ColorName::Pink,
        ColorName::Plum,
        ColorName::Purple,
        ColorName::Violet,
        ColorName::Iris,
        ColorName::Indigo,
        ColorName::Blue,
        ColorName::Cyan,
        ColorName::Teal,
        ColorName::Jade,
        ColorName::Green,
        ColorName::Grass,
        ColorName::Bronze,
        ColorName::Gold,
        ColorName::Brown,
        ColorName::Orange,
        ColorName::Amber,
        ColorName::Yellow,
        ColorName::Lime,
        ColorName::Mint,
        ColorName::Sky,
    ];

    /// Accent colors whose step 9 is too light for white text
    pub const LIGHT_ACCENTS: [ColorName; 5] = [
        ColorName::Sky,
        ColorName::Mint,
        ColorName::Lime,
        ColorName::Yellow,
        ColorName::Amber,
    ];

    /// Accent colors (everything except gray)
    pub fn accents() -> impl Iterator<Item = ColorName> {
        Self::ALL.into_iter().filter(|c| *c != ColorName::Gray)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Tomato => "tomato",
            Self::Red => "red",
            Self::Ruby => "ruby",
            Self::Crimson => "crimson",
            Self::Pink => "pink",
            Self::Plum => "plum",
            Self::Purple => "purple",
            Self::Violet => "violet",
            Self::Iris => "iris",
            Self::Indigo => "indigo",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Teal => "teal",
            Self::Jade => "jade",
            Self::Green => "green",
            Self::Grass => "grass",
            Self::Bronze => "bronze",
            Self::Gold => "gold",
            Self::Brown => "brown",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Mint => "mint",
            Self::Sky => "sky",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ThemeError::UnknownColor(needle.to_string()))
    }
}

impl Serialize for ColorName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 12-step color scale (step 1 lightest/least saturated, 12 darkest)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale([Color; SCALE_STEPS]);

impl Scale {
    pub const fn new(steps: [Color; SCALE_STEPS]) -> Self {
        Self(steps)
    }

    /// Step by 1-based index
    pub fn get(&self, step: usize) -> Option<Color> {
        step.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    /// Step by 1-based index, for the fixed steps used by the resolver.
    pub(crate) fn at(&self, step: usize) -> Color {
        debug_assert!((1..=SCALE_STEPS).contains(&step), "scale step {step}");
        self.0[step - 1]
    }

    pub fn steps(&self) -> &[Color; SCALE_STEPS] {
        &self.0
    }
}

/// Light, dark and alpha scales for one named color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScale {
    pub light: Scale,
    pub dark: Scale,
    /// Alpha scale; shared by both modes
    pub alpha: Scale,
    /// Recommended foreground on a step-9 background
    pub contrast: Option<Color>,
}

impl ColorScale {
    pub const fn new(light: Scale, dark: Scale, alpha: Scale, contrast: Option<Color>) -> Self {
        Self {
            light,
            dark,
            alpha,
            contrast,
        }
    }

    /// Solid scale for a mode
    pub fn for_mode(&self, mode: ThemeMode) -> &Scale {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_name_round_trip() {
        for name in ColorName::ALL {
            assert_eq!(name.as_str().parse::<ColorName>().unwrap(), name);
        }
        assert_eq!("  Red ".parse::<ColorName>().unwrap(), ColorName::Red);
    }

    #[test]
    fn test_unknown_color_name() {
        let err = "chartreuse".parse::<ColorName>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownColor(ref n) if n == "chartreuse"));
    }

    #[test]
    fn test_accents_exclude_gray() {
        assert_eq!(ColorName::accents().count(), 25);
        assert!(ColorName::accents().all(|c| c != ColorName::Gray));
    }

    #[test]
    fn test_scale_indexing_is_one_based() {
        let mut steps = [Color::BLACK; SCALE_STEPS];
        steps[0] = Color::WHITE;
        let scale = Scale::new(steps);
        assert_eq!(scale.get(1), Some(Color::WHITE));
        assert_eq!(scale.get(12), Some(Color::BLACK));
        assert_eq!(scale.get(0), None);
        assert_eq!(scale.get(13), None);
        assert_eq!(scale.at(1), Color::WHITE);
    }
}
