//! Tinct Overlay
//!
//! Placement for anchored floating content: tooltips, popovers and context
//! menus.
//!
//! ```rust
//! use tinct_core::{Rect, Size};
//! use tinct_overlay::{calculate_position, Align, PlacementOptions, Side};
//!
//! let options = PlacementOptions::tooltip().side(Side::Bottom).align(Align::Center);
//! let pos = calculate_position(
//!     Rect::new(100.0, 50.0, 40.0, 20.0),
//!     Size::new(120.0, 30.0),
//!     Size::new(400.0, 800.0),
//!     &options,
//! );
//! assert_eq!((pos.top, pos.left, pos.actual_side), (78.0, 60.0, Side::Bottom));
//! ```

pub mod error;
pub mod measure;
pub mod position;
pub mod viewport;

pub use error::{GeometryError, Result};
pub use measure::{AnchoredOverlay, MeasureToken, OverlayPhase};
pub use position::{
    calculate_context_menu_position, calculate_popover_position, calculate_position,
    checked_position, Align, PlacementOptions, PositionedContent, Side,
};
pub use viewport::{ResponsiveBreakpoints, ResponsiveInfo, WindowMetrics};
