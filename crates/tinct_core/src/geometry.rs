//! Layout geometry in logical pixels

use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero (e.g. content not laid out yet)
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// True when both dimensions are finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Zero-sized rectangle at a point (a touch location used as an anchor)
    pub fn from_point(point: Point) -> Self {
        Self::from_origin_size(point, Size::ZERO)
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }

    /// True when `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x() >= self.x()
            && other.y() >= self.y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x() + dx, self.y() + dy, self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_types() {
        let p = Point::new(1.0, 2.0);
        let s = Size::new(100.0, 50.0);
        let r = Rect::from_origin_size(p, s);

        assert_eq!(r.center(), Point::new(51.0, 27.0));
        assert!(r.contains(Point::new(50.0, 25.0)));
        assert!(!r.contains(Point::new(200.0, 100.0)));
        assert_eq!(r.max_x(), 101.0);
        assert_eq!(r.max_y(), 52.0);

        let rect: Rect = Size::new(200.0, 100.0).into();
        assert_eq!(rect.x(), 0.0);
        assert_eq!(rect.width(), 200.0);

        let moved = rect.offset(10.0, 20.0);
        assert_eq!(moved.x(), 10.0);
        assert_eq!(moved.y(), 20.0);
        assert!(!rect.contains_rect(&moved));
        assert!(rect.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_size_states() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(!Size::new(10.0, 5.0).is_empty());

        assert!(Size::new(10.0, 5.0).is_valid());
        assert!(!Size::new(-1.0, 5.0).is_valid());
        assert!(!Size::new(f32::NAN, 5.0).is_valid());
    }

    #[test]
    fn test_point_anchor() {
        let r = Rect::from_point(Point::new(30.0, 40.0));
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.center(), Point::new(30.0, 40.0));
    }
}
