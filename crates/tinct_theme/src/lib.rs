//! Tinct Theme System
//!
//! Radix-style color scales, layout tokens and the variant color resolver.
//!
//! # Overview
//!
//! - **Tokens**: color scales, radii, spacing, typography, shadows
//! - **Palette**: the built-in Radix palette (gray plus 25 accents)
//! - **Resolver**: (color, mode, variant, high contrast) to concrete paints
//! - **Config**: TOML theme customization
//! - **Context**: shared theme plus light/dark state, passed explicitly
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tinct_theme::{ColorName, Theme, ThemeContext, ThemeMode, Variant};
//!
//! let theme = Theme::builder().accent_color(ColorName::Crimson).build()?;
//! let mut ctx = ThemeContext::new(Arc::new(theme), None, ThemeMode::Light);
//!
//! let soft = ctx.variant_colors(ColorName::Crimson, Variant::Soft, false)?;
//! assert!(soft.border.is_transparent());
//!
//! ctx.toggle_mode();
//! assert_eq!(ctx.mode(), ThemeMode::Dark);
//! # Ok::<(), tinct_theme::ThemeError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod resolve;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::{ScaleOverride, ThemeConfig};
pub use context::ThemeContext;
pub use error::{Result, ThemeError};
pub use resolve::{
    accent_alpha, accent_scale, accent_text_color, active_colors, color_alpha, color_scale,
    contrast_color, disabled_colors, extended_accent_scale, focus_color, gray_alpha,
    high_contrast_background, high_contrast_text_color, hover_colors, needs_dark_text,
    recommended_foreground, selection_color, surface_colors, tooltip_colors, variant_colors,
    AccentScales, StateColors, SurfaceColors, Variant, VariantColorCache, VariantColors,
    NEAR_BLACK, NEAR_WHITE,
};
pub use theme::{Theme, ThemeBuilder, ThemeMode};
pub use tokens::*;
