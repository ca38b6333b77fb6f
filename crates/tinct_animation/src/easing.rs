//! Easing curves for overlay and color transitions

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Curve used for overlay enter/exit (`cubic-bezier(0.16, 1, 0.3, 1)`)
    pub const OVERLAY: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

    /// Map linear progress (0.0 to 1.0) through the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => Bezier::new(x1, y1, x2, y2).ease(t),
        }
    }
}

const EPSILON: f64 = 1e-7;

/// One coordinate of a cubic bezier anchored at 0 and 1, in polynomial form
#[derive(Clone, Copy, Debug)]
struct Cubic {
    a: f64,
    b: f64,
    c: f64,
}

impl Cubic {
    fn new(p1: f32, p2: f32) -> Self {
        let (p1, p2) = (f64::from(p1), f64::from(p2));
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn at(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn derivative(&self, t: f64) -> f64 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

/// CSS timing curve: x is time, y is progress
#[derive(Clone, Copy, Debug)]
struct Bezier {
    x: Cubic,
    y: Cubic,
}

impl Bezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Cubic::new(x1, x2),
            y: Cubic::new(y1, y2),
        }
    }

    fn ease(&self, time: f32) -> f32 {
        if time <= 0.0 {
            0.0
        } else if time >= 1.0 {
            1.0
        } else {
            self.y.at(self.param_at(f64::from(time))) as f32
        }
    }

    /// Curve parameter where x reaches `time`. Newton steps first, then
    /// bisection over [0, 1] if the derivative vanishes or Newton stalls.
    fn param_at(&self, time: f64) -> f64 {
        let mut t = time;
        for _ in 0..8 {
            let err = self.x.at(t) - time;
            if err.abs() < EPSILON {
                return t;
            }
            let d = self.x.derivative(t);
            if d.abs() < EPSILON {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = time;
        while hi - lo > EPSILON {
            let x = self.x.at(t);
            if (x - time).abs() < EPSILON {
                break;
            }
            if x < time {
                lo = t;
            } else {
                hi = t;
            }
            t = lo + (hi - lo) / 2.0;
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::OVERLAY,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let bezier = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((bezier.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_symmetric_bezier_crosses_midpoint() {
        let ease_in_out = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
        assert!((ease_in_out.apply(0.5) - 0.5).abs() < 1e-4);
        assert!(ease_in_out.apply(0.25) < 0.25);
        assert!(ease_in_out.apply(0.75) > 0.75);
    }

    #[test]
    fn test_overlay_curve_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = Easing::OVERLAY.apply(i as f32 / 20.0);
            assert!(v >= prev, "step {i}: {v} < {prev}");
            prev = v;
        }
        assert!(Easing::OVERLAY.apply(0.2) > 0.5);
    }

    #[test]
    fn test_ease_out_front_loaded() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }
}
