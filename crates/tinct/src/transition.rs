//! Animated presentation of resolved values
//!
//! The resolver and the positioner are pure; these wrappers feed their
//! outputs into tweens so a change of theme mode or anchor eases in instead
//! of jumping.

use tinct_animation::{Easing, Tween};
use tinct_overlay::PositionedContent;
use tinct_theme::VariantColors;

/// Duration for color and overlay transitions
pub const TRANSITION_MS: f32 = 150.0;

/// Eases a component's paints toward the latest resolved colors
#[derive(Clone, Debug)]
pub struct ColorTransition {
    tween: Tween<VariantColors>,
}

impl ColorTransition {
    pub fn new(initial: VariantColors) -> Self {
        Self {
            tween: Tween::settled(initial),
        }
    }

    /// Feed the colors resolved this frame
    pub fn update(&mut self, target: VariantColors) {
        if *self.tween.target() != target {
            self.tween = Tween::new(self.tween.value(), target, TRANSITION_MS, Easing::EaseOut);
        }
    }

    pub fn tick(&mut self, dt_ms: f32) -> VariantColors {
        self.tween.tick(dt_ms)
    }

    pub fn current(&self) -> VariantColors {
        self.tween.value()
    }

    pub fn is_settled(&self) -> bool {
        self.tween.is_finished()
    }
}

/// Fades an overlay in at its first position, then slides it between positions
#[derive(Clone, Debug)]
pub struct OverlayTransition {
    position: Option<Tween<PositionedContent>>,
    opacity: Tween<f32>,
}

impl Default for OverlayTransition {
    fn default() -> Self {
        Self {
            position: None,
            opacity: Tween::settled(0.0),
        }
    }
}

impl OverlayTransition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the overlay's current position; `None` while hidden or unmeasured
    pub fn update(&mut self, position: Option<PositionedContent>) {
        let Some(target) = position else {
            if *self.opacity.target() != 0.0 {
                self.opacity.retarget(0.0);
            }
            return;
        };
        match self.position.as_mut() {
            Some(tween) => {
                if *tween.target() != target {
                    *tween = Tween::new(tween.value(), target, TRANSITION_MS, Easing::OVERLAY);
                }
                if *self.opacity.target() != 1.0 {
                    self.opacity.retarget(1.0);
                }
            }
            None => {
                self.position = Some(Tween::settled(target));
                self.opacity =
                    Tween::new(self.opacity.value(), 1.0, TRANSITION_MS, Easing::OVERLAY);
            }
        }
    }

    pub fn tick(&mut self, dt_ms: f32) {
        self.opacity.tick(dt_ms);
        if let Some(tween) = self.position.as_mut() {
            tween.tick(dt_ms);
        }
        if self.opacity.is_finished() && *self.opacity.target() == 0.0 {
            self.position = None;
        }
    }

    pub fn position(&self) -> Option<PositionedContent> {
        self.position.as_ref().map(Tween::value)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Nothing left to draw
    pub fn is_hidden(&self) -> bool {
        self.position.is_none()
    }
}
