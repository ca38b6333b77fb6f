//! Tinct Core
//!
//! Foundational value types shared by every Tinct crate:
//!
//! - **Color / Paint**: exact 8-bit RGBA colors and the `transparent` paint
//! - **Geometry**: points, sizes and rectangles in logical pixels
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{Color, Paint, Rect};
//!
//! let red = Color::from_hex(0xE5484D);
//! assert_eq!(red.to_string(), "#e5484d");
//! assert_eq!(Paint::TRANSPARENT.to_string(), "transparent");
//!
//! let anchor = Rect::new(100.0, 50.0, 40.0, 20.0);
//! assert_eq!(anchor.center().x, 120.0);
//! ```

pub mod color;
pub mod geometry;

pub use color::{Color, ColorParseError, Paint};
pub use geometry::{Point, Rect, Size};
