//! Spacing tokens and UI scaling

use serde::{Deserialize, Serialize};

/// Global UI scaling applied to spacing and typography
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Scaling {
    #[serde(rename = "90%")]
    P90,
    #[serde(rename = "95%")]
    P95,
    #[default]
    #[serde(rename = "100%")]
    P100,
    #[serde(rename = "105%")]
    P105,
    #[serde(rename = "110%")]
    P110,
}

impl Scaling {
    pub fn factor(self) -> f32 {
        match self {
            Self::P90 => 0.9,
            Self::P95 => 0.95,
            Self::P100 => 1.0,
            Self::P105 => 1.05,
            Self::P110 => 1.1,
        }
    }
}

const BASE_SPACE: [f32; 9] = [4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 40.0, 48.0, 64.0];

/// Space scale, steps 1-9
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceTokens {
    steps: [f32; 9],
}

impl SpaceTokens {
    pub fn new(scaling: Scaling) -> Self {
        Self {
            steps: BASE_SPACE.map(|v| v * scaling.factor()),
        }
    }

    /// Step by 1-based index
    pub fn get(&self, step: usize) -> Option<f32> {
        step.checked_sub(1).and_then(|i| self.steps.get(i)).copied()
    }
}

impl Default for SpaceTokens {
    fn default() -> Self {
        Self::new(Scaling::default())
    }
}
