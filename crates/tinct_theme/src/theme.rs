//! Theme definition
//!
//! A [`Theme`] is immutable once built. Share it behind an `Arc` and hand it
//! to whatever needs to resolve colors.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::themes::radix;
use crate::tokens::*;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Complete theme: palette plus layout tokens
#[derive(Clone, Debug)]
pub struct Theme {
    colors: FxHashMap<ColorName, ColorScale>,
    black_alpha: Scale,
    white_alpha: Scale,
    accent_color: ColorName,
    radii: RadiusTokens,
    space: SpaceTokens,
    typography: TypographyTokens,
    scaling: Scaling,
}

impl Theme {
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    pub fn colors(&self) -> &FxHashMap<ColorName, ColorScale> {
        &self.colors
    }

    /// Scales for a named color
    pub fn scale(&self, color: ColorName) -> Result<&ColorScale> {
        self.colors
            .get(&color)
            .ok_or_else(|| ThemeError::UnknownColor(color.to_string()))
    }

    /// Scales for a color given by name, e.g. from a prop string
    pub fn scale_by_name(&self, name: &str) -> Result<&ColorScale> {
        self.scale(name.parse()?)
    }

    pub fn black_alpha(&self) -> &Scale {
        &self.black_alpha
    }

    pub fn white_alpha(&self) -> &Scale {
        &self.white_alpha
    }

    pub fn accent_color(&self) -> ColorName {
        self.accent_color
    }

    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    pub fn space(&self) -> &SpaceTokens {
        &self.space
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn shadows(&self, mode: ThemeMode) -> ShadowTokens {
        ShadowTokens::for_mode(mode)
    }

    pub fn scaling(&self) -> Scaling {
        self.scaling
    }
}

impl Default for Theme {
    /// Full palette, indigo accent, medium radius, 100% scaling
    fn default() -> Self {
        Self {
            colors: radix::palette(),
            black_alpha: radix::BLACK_ALPHA,
            white_alpha: radix::WHITE_ALPHA,
            accent_color: ColorName::Indigo,
            radii: RadiusTokens::default(),
            space: SpaceTokens::default(),
            typography: TypographyTokens::default(),
            scaling: Scaling::default(),
        }
    }
}

/// Builder for [`Theme`]; validation happens in [`ThemeBuilder::build`]
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    colors: FxHashMap<ColorName, ColorScale>,
    accent_color: ColorName,
    radius: RadiusSize,
    scaling: Scaling,
    fonts: Vec<(FontRole, String)>,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self {
            colors: radix::palette(),
            accent_color: ColorName::Indigo,
            radius: RadiusSize::default(),
            scaling: Scaling::default(),
            fonts: Vec::new(),
        }
    }
}

impl ThemeBuilder {
    pub fn accent_color(mut self, color: ColorName) -> Self {
        self.accent_color = color;
        self
    }

    pub fn radius(mut self, radius: RadiusSize) -> Self {
        self.radius = radius;
        self
    }

    pub fn scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// Replace (or add) the scales for one color
    pub fn color(mut self, name: ColorName, scale: ColorScale) -> Self {
        self.colors.insert(name, scale);
        self
    }

    /// Restrict the palette to the given colors
    pub fn only_colors(mut self, names: &[ColorName]) -> Self {
        self.colors.retain(|name, _| names.contains(name));
        self
    }

    pub fn font_family(mut self, role: FontRole, family: impl Into<String>) -> Self {
        self.fonts.push((role, family.into()));
        self
    }

    pub fn build(self) -> Result<Theme> {
        if !self.colors.contains_key(&self.accent_color) {
            return Err(ThemeError::MissingAccent(self.accent_color));
        }

        let mut typography = TypographyTokens::new(self.scaling);
        for (role, family) in self.fonts {
            typography.font_mut(role).family = family;
        }

        Ok(Theme {
            colors: self.colors,
            black_alpha: radix::BLACK_ALPHA,
            white_alpha: radix::WHITE_ALPHA,
            accent_color: self.accent_color,
            radii: RadiusTokens::new(self.radius),
            space: SpaceTokens::new(self.scaling),
            typography,
            scaling: self.scaling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_has_full_palette() {
        let theme = Theme::default();
        assert_eq!(theme.colors().len(), ColorName::ALL.len());
        assert_eq!(theme.accent_color(), ColorName::Indigo);
    }

    #[test]
    fn test_missing_accent_rejected() {
        let err = Theme::builder()
            .only_colors(&[ColorName::Gray, ColorName::Red])
            .accent_color(ColorName::Blue)
            .build()
            .unwrap_err();
        assert!(matches!(err, ThemeError::MissingAccent(ColorName::Blue)));
    }

    #[test]
    fn test_scale_lookup() {
        let theme = Theme::builder()
            .only_colors(&[ColorName::Gray, ColorName::Red])
            .accent_color(ColorName::Red)
            .build()
            .unwrap();
        assert!(theme.scale(ColorName::Red).is_ok());
        assert!(matches!(
            theme.scale(ColorName::Blue),
            Err(ThemeError::UnknownColor(ref n)) if n == "blue"
        ));
        assert!(matches!(
            theme.scale_by_name("mauve"),
            Err(ThemeError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_builder_scales_tokens() {
        let theme = Theme::builder()
            .scaling(Scaling::P110)
            .radius(RadiusSize::Large)
            .font_family(FontRole::Code, "JetBrains Mono")
            .build()
            .unwrap();
        assert!((theme.space().get(1).unwrap() - 4.4).abs() < 1e-4);
        assert!((theme.radii().step(1).unwrap() - 4.5).abs() < 1e-4);
        assert_eq!(theme.typography().code.family, "JetBrains Mono");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert!(ThemeMode::Light.toggle().is_dark());
    }
}
