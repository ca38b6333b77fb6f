//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Color scales (solid light/dark and alpha)
//! - Radii
//! - Spacing
//! - Typography
//! - Shadows

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
