//! Window metrics and responsive breakpoints

use serde::{Deserialize, Serialize};
use tinct_core::Size;

/// Window size plus pixel density and user font scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub font_scale: f32,
}

impl WindowMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            font_scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32, font_scale: f32) -> Self {
        self.scale = scale;
        self.font_scale = font_scale;
        self
    }

    /// Logical size, the viewport used for overlay placement
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Breakpoint widths in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveBreakpoints {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl ResponsiveBreakpoints {
    pub const DEFAULT: Self = Self {
        small: 640.0,
        medium: 768.0,
        large: 1024.0,
    };
}

impl Default for ResponsiveBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Orientation and size class for the current window
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveInfo {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub font_scale: f32,
    pub is_portrait: bool,
    pub is_landscape: bool,
    /// width < small
    pub is_small: bool,
    /// small <= width < large
    pub is_medium: bool,
    /// width >= large
    pub is_large: bool,
}

impl ResponsiveInfo {
    pub fn new(window: WindowMetrics, breakpoints: ResponsiveBreakpoints) -> Self {
        let is_portrait = window.height >= window.width;
        Self {
            width: window.width,
            height: window.height,
            scale: window.scale,
            font_scale: window.font_scale,
            is_portrait,
            is_landscape: !is_portrait,
            is_small: window.width < breakpoints.small,
            is_medium: window.width >= breakpoints.small && window.width < breakpoints.large,
            is_large: window.width >= breakpoints.large,
        }
    }
}

impl From<WindowMetrics> for ResponsiveInfo {
    fn from(window: WindowMetrics) -> Self {
        Self::new(window, ResponsiveBreakpoints::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        let phone = ResponsiveInfo::from(WindowMetrics::new(390.0, 844.0));
        assert!(phone.is_small && phone.is_portrait);
        assert!(!phone.is_medium && !phone.is_large);

        let tablet = ResponsiveInfo::from(WindowMetrics::new(820.0, 1180.0));
        assert!(tablet.is_medium);

        let edge = ResponsiveInfo::from(WindowMetrics::new(640.0, 400.0));
        assert!(edge.is_medium && edge.is_landscape);

        let desktop = ResponsiveInfo::from(WindowMetrics::new(1024.0, 768.0));
        assert!(desktop.is_large && !desktop.is_medium);
    }

    #[test]
    fn test_square_window_is_portrait() {
        let info = ResponsiveInfo::from(WindowMetrics::new(500.0, 500.0).with_scale(3.0, 1.2));
        assert!(info.is_portrait);
        assert_eq!(info.scale, 3.0);
        assert_eq!(info.font_scale, 1.2);
    }
}
