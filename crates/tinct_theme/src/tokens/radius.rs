//! Radius tokens for theming

use serde::{Deserialize, Serialize};

/// Radius used for pill shapes and slider thumbs
pub const RADIUS_PILL: f32 = 9999.0;

/// Named radius setting for a theme or a single component
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusSize {
    None,
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl RadiusSize {
    /// Multiplier applied to the base radius steps
    pub fn factor(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Small => 0.75,
            Self::Medium => 1.0,
            Self::Large | Self::Full => 1.5,
        }
    }
}

const BASE_STEPS: [f32; 8] = [3.0, 5.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0];

/// Component radius step used for named radii
const COMPONENT_STEP: usize = 3;

/// Radius scale: steps 1-8 scale with the theme factor, step 9 is a pill
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    size: RadiusSize,
    steps: [f32; 9],
}

impl RadiusTokens {
    pub fn new(size: RadiusSize) -> Self {
        let factor = size.factor();
        let mut steps = [RADIUS_PILL; 9];
        for (slot, base) in steps.iter_mut().zip(BASE_STEPS) {
            *slot = base * factor;
        }
        Self { size, steps }
    }

    /// The theme-wide radius setting
    pub fn size(&self) -> RadiusSize {
        self.size
    }

    /// Step by 1-based index (1-9)
    pub fn step(&self, step: usize) -> Option<f32> {
        step.checked_sub(1).and_then(|i| self.steps.get(i)).copied()
    }

    pub fn thumb(&self) -> f32 {
        RADIUS_PILL
    }

    /// Radius for an explicit per-component setting
    pub fn named(&self, size: RadiusSize) -> f32 {
        match size {
            RadiusSize::None => 0.0,
            RadiusSize::Full => RADIUS_PILL,
            other => BASE_STEPS[COMPONENT_STEP - 1] * other.factor(),
        }
    }

    /// Default component radius under the theme setting
    pub fn component(&self) -> f32 {
        self.named(self.size)
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self::new(RadiusSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_steps_match_base() {
        let radii = RadiusTokens::default();
        assert_eq!(radii.step(1), Some(3.0));
        assert_eq!(radii.step(8), Some(16.0));
        assert_eq!(radii.step(9), Some(RADIUS_PILL));
        assert_eq!(radii.step(0), None);
        assert_eq!(radii.step(10), None);
    }

    #[test]
    fn test_factor_scales_steps_but_not_pill() {
        let radii = RadiusTokens::new(RadiusSize::Large);
        assert_eq!(radii.step(2), Some(7.5));
        assert_eq!(radii.step(9), Some(RADIUS_PILL));

        let none = RadiusTokens::new(RadiusSize::None);
        assert_eq!(none.step(4), Some(0.0));
        assert_eq!(none.thumb(), RADIUS_PILL);
    }

    #[test]
    fn test_named_radii() {
        let radii = RadiusTokens::default();
        assert_eq!(radii.named(RadiusSize::None), 0.0);
        assert_eq!(radii.named(RadiusSize::Small), 4.5);
        assert_eq!(radii.named(RadiusSize::Medium), 6.0);
        assert_eq!(radii.named(RadiusSize::Large), 9.0);
        assert_eq!(radii.named(RadiusSize::Full), RADIUS_PILL);
        assert_eq!(RadiusTokens::new(RadiusSize::Full).component(), RADIUS_PILL);
    }
}
