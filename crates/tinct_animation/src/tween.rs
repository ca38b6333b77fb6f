//! Tweens between two resolved values
//!
//! A tween owns its own interpolation state, so concurrent overlays never
//! share anything mutable. Retargeting starts from the currently displayed
//! value, which keeps a transition smooth when the target changes mid-flight.

use tinct_core::{Color, Paint, Point};

use crate::easing::Easing;

/// Linear interpolation between two values of the same type
pub trait Lerp: Sized {
    /// `t` is 0.0 at `from` and 1.0 at `to`
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color::lerp(from, to, t)
    }
}

impl Lerp for Point {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Point::new(<f32 as Lerp>::lerp(&from.x, &to.x, t), <f32 as Lerp>::lerp(&from.y, &to.y, t))
    }
}

impl Lerp for Paint {
    /// `transparent` fades as the other endpoint's color at zero alpha.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *from;
        }
        if t >= 1.0 {
            return *to;
        }
        match (from, to) {
            (Paint::Transparent, Paint::Transparent) => Paint::Transparent,
            (Paint::Solid(a), Paint::Solid(b)) => Paint::Solid(Color::lerp(a, b, t)),
            (Paint::Transparent, Paint::Solid(b)) => {
                Paint::Solid(Color::lerp(&b.with_alpha(0.0), b, t))
            }
            (Paint::Solid(a), Paint::Transparent) => {
                Paint::Solid(Color::lerp(a, &a.with_alpha(0.0), t))
            }
        }
    }
}

/// Time-driven interpolation from one value to another
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// A tween that is already at rest on `value`
    pub fn settled(value: T) -> Self {
        Self::new(value.clone(), value, 0.0, Easing::Linear)
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.easing.apply(self.progress()))
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    /// Advance by `dt_ms` and return the new value
    pub fn tick(&mut self, dt_ms: f32) -> T {
        if !self.is_finished() {
            self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
        }
        self.value()
    }

    /// Start a new transition toward `to` from the value shown right now
    pub fn retarget(&mut self, to: T) {
        let current = self.value();
        tracing::trace!(progress = self.progress(), "tween retargeted");
        self.from = current;
        self.to = to;
        self.elapsed_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(0.0f32, 100.0, 200.0, Easing::Linear);
        assert_eq!(tween.value(), 0.0);
        assert_eq!(tween.tick(100.0), 50.0);
        assert!(!tween.is_finished());
        assert_eq!(tween.tick(500.0), 100.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_is_settled() {
        let tween = Tween::new(Point::ZERO, Point::new(10.0, 10.0), 0.0, Easing::EaseOut);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Point::new(10.0, 10.0));

        let settled = Tween::settled(5.0f32);
        assert_eq!(settled.value(), 5.0);
    }

    #[test]
    fn test_retarget_continues_from_current_value() {
        let mut tween = Tween::new(0.0f32, 100.0, 100.0, Easing::Linear);
        tween.tick(50.0);
        tween.retarget(0.0);
        assert_eq!(tween.value(), 50.0);
        assert_eq!(*tween.target(), 0.0);
        assert_eq!(tween.tick(50.0), 25.0);
    }

    #[test]
    fn test_paint_fades_through_transparent() {
        let red = Color::from_hex(0xE5484D);
        let mid = Paint::lerp(&Paint::Transparent, &Paint::Solid(red), 0.5);
        let color = mid.color().unwrap();
        assert_eq!((color.r, color.g, color.b), (red.r, red.g, red.b));
        assert_eq!(color.a, 128);

        assert_eq!(
            Paint::lerp(&Paint::Solid(red), &Paint::Transparent, 1.0),
            Paint::Transparent
        );
        assert_eq!(
            Paint::lerp(&Paint::Transparent, &Paint::Transparent, 0.3),
            Paint::Transparent
        );
    }
}
