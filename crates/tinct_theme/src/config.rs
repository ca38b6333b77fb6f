//! Theme configuration file handling
//!
//! A theme can be customized from TOML:
//!
//! ```toml
//! accent_color = "crimson"
//! radius = "large"
//! scaling = "95%"
//! appearance = "dark"
//! colors = ["gray", "crimson", "red"]
//!
//! [fonts]
//! code = "JetBrains Mono"
//!
//! [overrides.crimson]
//! contrast = "#ffffff"
//! light = ["#fffcfd", "#fef7f9", ...]
//! ```
//!
//! Every key is optional. Omitting `appearance` means "follow the device".

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tinct_core::Color;

use crate::error::{Result, ThemeError};
use crate::theme::{Theme, ThemeMode};
use crate::themes::radix;
use crate::tokens::{ColorName, ColorScale, FontRole, RadiusSize, Scale, Scaling, SCALE_STEPS};

/// Top-level theme configuration (theme.toml)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_accent")]
    pub accent_color: ColorName,
    #[serde(default)]
    pub radius: RadiusSize,
    #[serde(default)]
    pub scaling: Scaling,
    /// Forced appearance; `None` follows the device
    #[serde(default)]
    pub appearance: Option<ThemeMode>,
    /// Restrict the palette to these colors; empty keeps all of them
    #[serde(default)]
    pub colors: Vec<ColorName>,
    #[serde(default)]
    pub fonts: FxHashMap<FontRole, String>,
    #[serde(default)]
    pub overrides: FxHashMap<ColorName, ScaleOverride>,
}

fn default_accent() -> ColorName {
    ColorName::Indigo
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent(),
            radius: RadiusSize::default(),
            scaling: Scaling::default(),
            appearance: None,
            colors: Vec::new(),
            fonts: FxHashMap::default(),
            overrides: FxHashMap::default(),
        }
    }
}

/// Replacement steps for one color, as hex strings
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ScaleOverride {
    #[serde(default)]
    pub light: Option<Vec<String>>,
    #[serde(default)]
    pub dark: Option<Vec<String>>,
    #[serde(default)]
    pub alpha: Option<Vec<String>>,
    #[serde(default)]
    pub contrast: Option<String>,
}

impl ThemeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            accent = %config.accent_color,
            "loaded theme config"
        );
        Ok(config)
    }

    /// Forced appearance, if any
    pub fn appearance(&self) -> Option<ThemeMode> {
        self.appearance
    }

    /// Build the theme this config describes. An override for a color left
    /// out of `colors` is rejected with [`ThemeError::UnknownColor`].
    pub fn to_theme(&self) -> Result<Theme> {
        let mut builder = Theme::builder()
            .accent_color(self.accent_color)
            .radius(self.radius)
            .scaling(self.scaling);

        if !self.colors.is_empty() {
            builder = builder.only_colors(&self.colors);
        }

        for (name, scale_override) in &self.overrides {
            if !self.colors.is_empty() && !self.colors.contains(name) {
                return Err(ThemeError::UnknownColor(name.to_string()));
            }
            let scale = scale_override.apply(*name, radix::color_scale(*name))?;
            builder = builder.color(*name, scale);
        }

        for (role, family) in &self.fonts {
            builder = builder.font_family(*role, family.clone());
        }

        builder.build()
    }
}

impl ScaleOverride {
    fn apply(&self, name: ColorName, mut scale: ColorScale) -> Result<ColorScale> {
        if let Some(steps) = &self.light {
            scale.light = parse_scale(&format!("{name}.light"), steps)?;
        }
        if let Some(steps) = &self.dark {
            scale.dark = parse_scale(&format!("{name}.dark"), steps)?;
        }
        if let Some(steps) = &self.alpha {
            scale.alpha = parse_scale(&format!("{name}.alpha"), steps)?;
        }
        if let Some(contrast) = &self.contrast {
            let label = format!("{name}.contrast");
            scale.contrast = Some(parse_color(&label, 1, contrast)?);
        }
        Ok(scale)
    }
}

fn parse_scale(name: &str, steps: &[String]) -> Result<Scale> {
    if steps.len() != SCALE_STEPS {
        return Err(ThemeError::InvalidStep {
            name: name.to_string(),
            len: steps.len(),
        });
    }
    let mut colors = [Color::TRANSPARENT; SCALE_STEPS];
    for (i, (slot, value)) in colors.iter_mut().zip(steps).enumerate() {
        *slot = parse_color(name, i + 1, value)?;
    }
    Ok(Scale::new(colors))
}

fn parse_color(name: &str, step: usize, value: &str) -> Result<Color> {
    value.parse().map_err(|source| ThemeError::InvalidColor {
        name: name.to_string(),
        step,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::FontStyle;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config.accent_color, ColorName::Indigo);
        assert_eq!(config.appearance(), None);
        let theme = config.to_theme().unwrap();
        assert_eq!(theme.colors().len(), ColorName::ALL.len());
    }

    #[test]
    fn test_full_config() {
        let config = ThemeConfig::from_toml_str(
            r##"
            accent_color = "crimson"
            radius = "large"
            scaling = "95%"
            appearance = "dark"
            colors = ["gray", "crimson"]

            [fonts]
            code = "JetBrains Mono"

            [overrides.crimson]
            contrast = "#000000"
            "##,
        )
        .unwrap();

        assert_eq!(config.appearance(), Some(ThemeMode::Dark));
        let theme = config.to_theme().unwrap();
        assert_eq!(theme.accent_color(), ColorName::Crimson);
        assert_eq!(theme.colors().len(), 2);
        assert_eq!(theme.scaling(), Scaling::P95);
        assert_eq!(theme.radii().size(), RadiusSize::Large);
        assert_eq!(theme.typography().code.family, "JetBrains Mono");
        assert_eq!(theme.typography().em.style, FontStyle::Italic);
        assert_eq!(
            theme.scale(ColorName::Crimson).unwrap().contrast,
            Some(Color::BLACK)
        );
    }

    #[test]
    fn test_accent_outside_palette() {
        let config = ThemeConfig::from_toml_str(
            r#"
            accent_color = "blue"
            colors = ["gray", "red"]
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.to_theme(),
            Err(ThemeError::MissingAccent(ColorName::Blue))
        ));
    }

    #[test]
    fn test_override_outside_palette_rejected() {
        let config = ThemeConfig::from_toml_str(
            r##"
            accent_color = "crimson"
            colors = ["gray", "crimson"]

            [overrides.red]
            contrast = "#000000"
            "##,
        )
        .unwrap();
        let err = config.to_theme().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownColor(ref n) if n == "red"));
    }

    #[test]
    fn test_override_scale_length() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [overrides.red]
            light = ["#ffffff", "#000000"]
            "##,
        )
        .unwrap();
        let err = config.to_theme().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidStep { ref name, len: 2 } if name == "red.light"));
    }

    #[test]
    fn test_override_bad_hex() {
        let mut steps = vec!["#ffffff".to_string(); SCALE_STEPS];
        steps[4] = "#zzzzzz".to_string();
        let config = ThemeConfig {
            overrides: [(
                ColorName::Red,
                ScaleOverride {
                    alpha: Some(steps),
                    ..Default::default()
                },
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        let err = config.to_theme().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { step: 5, .. }));
    }

    #[test]
    fn test_unknown_color_name_rejected() {
        let err = ThemeConfig::from_toml_str(r#"accent_color = "mauve""#).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeConfig::load("/nonexistent/tinct/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
