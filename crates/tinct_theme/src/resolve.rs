//! Variant color resolution
//!
//! Maps a (color, mode, variant, contrast) request onto concrete paints by
//! picking fixed steps out of the color's scales. There is no interpolation
//! between steps: every branch is a table lookup.
//!
//! ```rust
//! use tinct_theme::{variant_colors, ColorName, Theme, ThemeMode, Variant};
//!
//! let theme = Theme::default();
//! let colors = variant_colors(&theme, ColorName::Red, ThemeMode::Light, Variant::Solid, false)?;
//! assert_eq!(colors.background.to_string(), "#e5484d");
//! assert_eq!(colors.text.to_string(), "#ffffff");
//! assert!(colors.border.is_transparent());
//! # Ok::<(), tinct_theme::ThemeError>(())
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tinct_animation::Lerp;
use tinct_core::{Color, Paint};

use crate::error::Result;
use crate::theme::{Theme, ThemeMode};
use crate::themes::radix;
use crate::tokens::{ColorName, Scale};

/// Contrast text for the light accents (sky, mint, lime, yellow, amber)
pub const NEAR_BLACK: Color = Color::from_hex(0x0c0a09);

/// Contrast text for every other color
pub const NEAR_WHITE: Color = Color::WHITE;

/// Visual treatment of a component
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Solid,
    Classic,
    Soft,
    Outline,
    Surface,
    Ghost,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Solid,
        Variant::Classic,
        Variant::Soft,
        Variant::Outline,
        Variant::Surface,
        Variant::Ghost,
    ];

    /// Parse a variant name; anything unrecognized resolves as `solid`
    pub fn from_name(name: &str) -> Self {
        let needle = name.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(needle))
            .unwrap_or_else(|| {
                tracing::warn!(variant = needle, "unknown variant, using solid");
                Variant::Solid
            })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Classic => "classic",
            Self::Soft => "soft",
            Self::Outline => "outline",
            Self::Surface => "surface",
            Self::Ghost => "ghost",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background, text and border paints for one variant
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
pub struct VariantColors {
    #[serde(rename = "backgroundColor")]
    pub background: Paint,
    #[serde(rename = "textColor")]
    pub text: Paint,
    #[serde(rename = "borderColor")]
    pub border: Paint,
}

impl VariantColors {
    fn new(background: impl Into<Paint>, text: impl Into<Paint>, border: impl Into<Paint>) -> Self {
        Self {
            background: background.into(),
            text: text.into(),
            border: border.into(),
        }
    }
}

impl Lerp for VariantColors {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            background: Paint::lerp(&from.background, &to.background, t),
            text: Paint::lerp(&from.text, &to.text, t),
            border: Paint::lerp(&from.border, &to.border, t),
        }
    }
}

const CLEAR: Paint = Paint::Transparent;

/// Resolve the paints a component renders with.
///
/// Fails with [`ThemeError::UnknownColor`](crate::ThemeError::UnknownColor)
/// when `color` is not part of the theme's palette.
pub fn variant_colors(
    theme: &Theme,
    color: ColorName,
    mode: ThemeMode,
    variant: Variant,
    high_contrast: bool,
) -> Result<VariantColors> {
    let scales = theme.scale(color)?;
    let scale = scales.for_mode(mode);
    let alpha = &scales.alpha;

    let colors = if high_contrast {
        match variant {
            Variant::Solid | Variant::Classic => VariantColors::new(scale.at(12), scale.at(1), CLEAR),
            Variant::Soft => VariantColors::new(alpha.at(3), scale.at(12), CLEAR),
            Variant::Outline => VariantColors::new(CLEAR, scale.at(11), scale.at(11)),
            Variant::Surface => VariantColors::new(alpha.at(2), scale.at(11), scale.at(11)),
            Variant::Ghost => VariantColors::new(CLEAR, scale.at(11), CLEAR),
        }
    } else {
        match variant {
            Variant::Solid | Variant::Classic => {
                VariantColors::new(scale.at(9), contrast_color(color), CLEAR)
            }
            Variant::Soft => VariantColors::new(alpha.at(3), alpha.at(11), CLEAR),
            Variant::Outline => VariantColors::new(CLEAR, alpha.at(11), alpha.at(8)),
            Variant::Surface => VariantColors::new(alpha.at(2), alpha.at(11), alpha.at(8)),
            Variant::Ghost => VariantColors::new(CLEAR, alpha.at(11), CLEAR),
        }
    };
    Ok(colors)
}

/// True for the accents whose step 9 is too light for white text
pub fn needs_dark_text(color: ColorName) -> bool {
    ColorName::LIGHT_ACCENTS.contains(&color)
}

/// Text color for a solid step-9 background; a fixed set test, not luminance
pub fn contrast_color(color: ColorName) -> Color {
    if needs_dark_text(color) {
        NEAR_BLACK
    } else {
        NEAR_WHITE
    }
}

/// Foreground for a solid background, preferring the scale's own contrast
pub fn recommended_foreground(theme: &Theme, color: ColorName) -> Result<Color> {
    let scales = theme.scale(color)?;
    Ok(scales.contrast.unwrap_or_else(|| contrast_color(color)))
}

/// Text color for a solid accent background
pub fn accent_text_color(theme: &Theme) -> Color {
    contrast_color(theme.accent_color())
}

pub fn color_scale(theme: &Theme, color: ColorName, mode: ThemeMode) -> Result<&Scale> {
    Ok(theme.scale(color)?.for_mode(mode))
}

pub fn color_alpha(theme: &Theme, color: ColorName) -> Result<&Scale> {
    Ok(&theme.scale(color)?.alpha)
}

pub fn accent_scale(theme: &Theme, mode: ThemeMode) -> Result<&Scale> {
    color_scale(theme, theme.accent_color(), mode)
}

pub fn accent_alpha(theme: &Theme) -> Result<&Scale> {
    color_alpha(theme, theme.accent_color())
}

/// Solid and alpha scales of the accent color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentScales<'a> {
    pub solid: &'a Scale,
    pub alpha: &'a Scale,
}

/// Both accent scales at once, solid resolved for `mode`
pub fn extended_accent_scale(theme: &Theme, mode: ThemeMode) -> Result<AccentScales<'_>> {
    let scales = theme.scale(theme.accent_color())?;
    Ok(AccentScales {
        solid: scales.for_mode(mode),
        alpha: &scales.alpha,
    })
}

pub fn gray_alpha(theme: &Theme) -> Result<&Scale> {
    color_alpha(theme, ColorName::Gray)
}

/// Focus ring color (accent step 8)
pub fn focus_color(theme: &Theme, mode: ThemeMode) -> Result<Color> {
    Ok(accent_scale(theme, mode)?.at(8))
}

/// Text selection highlight (accent alpha step 5)
pub fn selection_color(theme: &Theme) -> Result<Color> {
    Ok(accent_alpha(theme)?.at(5))
}

pub fn high_contrast_text_color(theme: &Theme) -> Color {
    theme.black_alpha().at(12)
}

pub fn high_contrast_background(theme: &Theme, color: ColorName, mode: ThemeMode) -> Result<Color> {
    Ok(color_scale(theme, color, mode)?.at(11))
}

/// Background and text for a disabled control
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateColors {
    pub background: Paint,
    pub text: Paint,
}

pub fn disabled_colors(theme: &Theme) -> Result<StateColors> {
    let gray = gray_alpha(theme)?;
    Ok(StateColors {
        background: gray.at(3).into(),
        text: gray.at(8).into(),
    })
}

/// Hover background for an accent-colored control; `None` for surface
pub fn hover_colors(theme: &Theme, mode: ThemeMode, variant: Variant) -> Result<Option<Paint>> {
    interaction_background(theme, mode, variant, [4, 3, 2])
}

/// Pressed background for an accent-colored control; `None` for surface
pub fn active_colors(theme: &Theme, mode: ThemeMode, variant: Variant) -> Result<Option<Paint>> {
    interaction_background(theme, mode, variant, [5, 4, 3])
}

/// Alpha steps are given in soft, ghost, outline order
fn interaction_background(
    theme: &Theme,
    mode: ThemeMode,
    variant: Variant,
    [soft, ghost, outline]: [usize; 3],
) -> Result<Option<Paint>> {
    let alpha = accent_alpha(theme)?;
    let paint = match variant {
        Variant::Solid | Variant::Classic => Some(accent_scale(theme, mode)?.at(10)),
        Variant::Soft => Some(alpha.at(soft)),
        Variant::Ghost => Some(alpha.at(ghost)),
        Variant::Outline => Some(alpha.at(outline)),
        Variant::Surface => None,
    };
    Ok(paint.map(Paint::from))
}

/// Page-level colors for the current mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceColors {
    pub gray: Scale,
    pub background: Color,
    pub surface: Color,
    pub panel: Color,
}

pub fn surface_colors(theme: &Theme, mode: ThemeMode) -> Result<SurfaceColors> {
    let gray = *color_scale(theme, ColorName::Gray, mode)?;
    let (background, surface, panel) = match mode {
        ThemeMode::Light => (
            radix::surface::LIGHT_BACKGROUND,
            radix::surface::LIGHT_SURFACE,
            radix::surface::LIGHT_PANEL,
        ),
        ThemeMode::Dark => (gray.at(1), radix::surface::DARK_SURFACE, gray.at(2)),
    };
    Ok(SurfaceColors {
        gray,
        background,
        surface,
        panel,
    })
}

/// Tooltip bubble colors: inverted gray
pub fn tooltip_colors(theme: &Theme, mode: ThemeMode) -> Result<StateColors> {
    let gray = color_scale(theme, ColorName::Gray, mode)?;
    let background = match mode {
        ThemeMode::Light => gray.at(12),
        ThemeMode::Dark => gray.at(9),
    };
    Ok(StateColors {
        background: background.into(),
        text: gray.at(1).into(),
    })
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
struct CacheKey {
    color: ColorName,
    mode: ThemeMode,
    variant: Variant,
    high_contrast: bool,
}

/// Memoizes [`variant_colors`] for one theme
#[derive(Debug, Default)]
pub struct VariantColorCache {
    entries: FxHashMap<CacheKey, VariantColors>,
}

impl VariantColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve through the cache. Errors are not cached.
    pub fn get(
        &mut self,
        theme: &Theme,
        color: ColorName,
        mode: ThemeMode,
        variant: Variant,
        high_contrast: bool,
    ) -> Result<VariantColors> {
        let key = CacheKey {
            color,
            mode,
            variant,
            high_contrast,
        };
        if let Some(hit) = self.entries.get(&key) {
            return Ok(*hit);
        }
        let colors = variant_colors(theme, color, mode, variant, high_contrast)?;
        self.entries.insert(key, colors);
        Ok(colors)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, e.g. after switching to a different theme
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
