//! Shadow tokens for theming

use tinct_core::Color;

use crate::theme::ThemeMode;

/// Box shadow with an Android-style elevation hint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
    pub elevation: f32,
}

impl Shadow {
    pub const fn new(offset_y: f32, blur: f32, color: Color, elevation: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y,
            blur,
            color,
            elevation,
        }
    }
}

/// Shadow levels 1-6
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    levels: [Shadow; 6],
}

impl ShadowTokens {
    pub fn light() -> Self {
        let faint = Color::rgba(0, 0, 0, 13);
        let base = Color::rgba(0, 0, 0, 20);
        Self {
            levels: [
                Shadow::new(0.0, 0.0, faint, 0.0),
                Shadow::new(1.0, 1.0, base, 1.0),
                Shadow::new(2.0, 2.0, base, 2.0),
                Shadow::new(4.0, 4.0, base, 4.0),
                Shadow::new(4.0, 4.0, base, 4.0),
                Shadow::new(4.0, 4.0, base, 4.0),
            ],
        }
    }

    pub fn dark() -> Self {
        let faint = Color::rgba(0, 0, 0, 77);
        let base = Color::rgba(0, 0, 0, 102);
        Self {
            levels: [
                Shadow::new(0.0, 0.0, faint, 0.0),
                Shadow::new(1.0, 1.0, base, 1.0),
                Shadow::new(2.0, 2.0, base, 2.0),
                Shadow::new(4.0, 4.0, base, 4.0),
                Shadow::new(4.0, 4.0, base, 4.0),
                Shadow::new(4.0, 4.0, base, 4.0),
            ],
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Level by 1-based index (1-6)
    pub fn get(&self, level: usize) -> Option<&Shadow> {
        level.checked_sub(1).and_then(|i| self.levels.get(i))
    }
}
