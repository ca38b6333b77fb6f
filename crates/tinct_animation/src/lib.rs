//! Tinct Animation
//!
//! Presentation-side interpolation for values produced by the theme resolver
//! and the overlay positioner. Both of those are pure functions; when their
//! output changes (mode switch, re-measured anchor) a [`Tween`] carries the
//! rendered value from the old result to the new one.
//!
//! - [`Easing`]: standard curves plus CSS-compatible cubic bezier
//! - [`Lerp`]: linear interpolation for colors, paints and numbers
//! - [`Tween`]: time-driven, interruptible interpolation between two values

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::{Lerp, Tween};
