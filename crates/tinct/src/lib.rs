//! Tinct
//!
//! Radix-style theming and anchored overlay placement for mobile UI runtimes.
//!
//! - [`tinct_theme`]: color scales, tokens and the variant color resolver
//! - [`tinct_overlay`]: tooltip and context menu positioning
//! - [`tinct_animation`]: tweens that ease between resolved values
//!
//! ```rust
//! use tinct::prelude::*;
//!
//! let theme = Theme::default();
//! let colors = variant_colors(&theme, ColorName::Red, ThemeMode::Light, Variant::Solid, false)?;
//! assert_eq!(colors.background.to_string(), "#e5484d");
//!
//! let pos = calculate_position(
//!     Rect::new(100.0, 50.0, 40.0, 20.0),
//!     Size::new(120.0, 30.0),
//!     Size::new(400.0, 800.0),
//!     &PlacementOptions::tooltip().side(Side::Bottom),
//! );
//! assert_eq!(pos.top, 78.0);
//! # Ok::<(), tinct::TinctError>(())
//! ```

pub mod error;
pub mod transition;

pub use error::{Result, TinctError};
pub use tinct_animation as animation;
pub use tinct_overlay as overlay;
pub use tinct_theme as theme;

pub mod prelude {
    pub use crate::error::{Result, TinctError};
    pub use crate::transition::{ColorTransition, OverlayTransition};

    // Core types
    pub use tinct_core::{Color, Paint, Point, Rect, Size};

    // Theme
    pub use tinct_theme::{
        variant_colors, ColorName, Theme, ThemeConfig, ThemeContext, ThemeMode, Variant,
        VariantColorCache, VariantColors,
    };

    // Overlay
    pub use tinct_overlay::{
        calculate_context_menu_position, calculate_popover_position, calculate_position,
        checked_position, Align, AnchoredOverlay, PlacementOptions, PositionedContent, Side,
    };

    // Animation
    pub use tinct_animation::{Easing, Lerp, Tween};
}
