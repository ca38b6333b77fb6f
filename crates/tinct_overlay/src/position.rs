//! Anchored content placement
//!
//! Places floating content next to an anchor rectangle: on the preferred
//! side, aligned along the other axis, flipped to the opposite side when it
//! would clip and the opposite side has room.
//!
//! The primary axis is never clamped. Content that fits on neither side is
//! left where the preferred side puts it. The cross axis is always slid back
//! inside the viewport.

use serde::{Deserialize, Serialize};
use tinct_animation::Lerp;
use tinct_core::{Point, Rect, Size};

use crate::error::{GeometryError, Result};

/// Side of the anchor the content is placed on
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True for top/bottom, where the primary axis is vertical
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Alignment along the edge of the anchor
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Placement preferences
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementOptions {
    pub side: Side,
    pub align: Align,
    /// Gap between the anchor edge and the content
    pub side_offset: f32,
    /// Shift along the alignment axis
    pub align_offset: f32,
    pub avoid_collisions: bool,
}

impl PlacementOptions {
    /// Tooltip defaults: above, centered, 8px gap
    pub const fn tooltip() -> Self {
        Self {
            side: Side::Top,
            align: Align::Center,
            side_offset: 8.0,
            align_offset: 0.0,
            avoid_collisions: true,
        }
    }

    /// Context menu defaults: below the touch point, start-aligned, 4px gap
    pub const fn context_menu() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Start,
            side_offset: 4.0,
            align_offset: 0.0,
            avoid_collisions: true,
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn side_offset(mut self, offset: f32) -> Self {
        self.side_offset = offset;
        self
    }

    pub fn align_offset(mut self, offset: f32) -> Self {
        self.align_offset = offset;
        self
    }

    pub fn avoid_collisions(mut self, avoid: bool) -> Self {
        self.avoid_collisions = avoid;
        self
    }
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self::tooltip()
    }
}

/// Where the content ended up
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedContent {
    pub top: f32,
    pub left: f32,
    /// May differ from the requested side after a collision flip
    pub actual_side: Side,
}

impl PositionedContent {
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn rect(&self, content: Size) -> Rect {
        Rect::from_origin_size(self.origin(), content)
    }
}

impl Lerp for PositionedContent {
    /// The side snaps to the target; only the origin moves
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            top: <f32 as Lerp>::lerp(&from.top, &to.top, t),
            left: <f32 as Lerp>::lerp(&from.left, &to.left, t),
            actual_side: to.actual_side,
        }
    }
}

/// Coordinate along the primary axis for `side`
fn primary(anchor: &Rect, content: Size, side: Side, offset: f32) -> f32 {
    match side {
        Side::Bottom => anchor.max_y() + offset,
        Side::Top => anchor.y() - content.height - offset,
        Side::Right => anchor.max_x() + offset,
        Side::Left => anchor.x() - content.width - offset,
    }
}

/// Coordinate along the cross axis; `start`, `length` and `extent` are the
/// anchor's leading edge, its length, and the content's length on that axis
fn cross(start: f32, length: f32, extent: f32, align: Align, offset: f32) -> f32 {
    let base = match align {
        Align::Start => start,
        Align::Center => start + length / 2.0 - extent / 2.0,
        Align::End => start + length - extent,
    };
    base + offset
}

fn fits(position: f32, extent: f32, limit: f32) -> bool {
    position >= 0.0 && position + extent <= limit
}

/// Slide `position` inside `[0, limit - extent]`; pins to 0 when too large
fn clamp_into(position: f32, extent: f32, limit: f32) -> f32 {
    position.min(limit - extent).max(0.0)
}

/// Place `content` next to `anchor` inside `viewport`
pub fn calculate_position(
    anchor: Rect,
    content: Size,
    viewport: Size,
    options: &PlacementOptions,
) -> PositionedContent {
    let mut side = options.side;
    let mut main = primary(&anchor, content, side, options.side_offset);

    if options.avoid_collisions {
        let (extent, limit) = if side.is_vertical() {
            (content.height, viewport.height)
        } else {
            (content.width, viewport.width)
        };
        if !fits(main, extent, limit) {
            let flipped = side.opposite();
            let candidate = primary(&anchor, content, flipped, options.side_offset);
            if fits(candidate, extent, limit) {
                tracing::trace!(from = ?side, to = ?flipped, "flipped overlay side");
                side = flipped;
                main = candidate;
            }
        }
    }

    if side.is_vertical() {
        let left = cross(
            anchor.x(),
            anchor.width(),
            content.width,
            options.align,
            options.align_offset,
        );
        PositionedContent {
            top: main,
            left: clamp_into(left, content.width, viewport.width),
            actual_side: side,
        }
    } else {
        let top = cross(
            anchor.y(),
            anchor.height(),
            content.height,
            options.align,
            options.align_offset,
        );
        PositionedContent {
            top: clamp_into(top, content.height, viewport.height),
            left: main,
            actual_side: side,
        }
    }
}

/// Place a tooltip or popover against its trigger rectangle
pub fn calculate_popover_position(
    anchor: Rect,
    content: Size,
    viewport: Size,
    options: &PlacementOptions,
) -> PositionedContent {
    calculate_position(anchor, content, viewport, options)
}

/// Place a context menu at a long-press location
pub fn calculate_context_menu_position(
    touch: Point,
    content: Size,
    viewport: Size,
    options: &PlacementOptions,
) -> PositionedContent {
    calculate_position(Rect::from_point(touch), content, viewport, options)
}

/// [`calculate_position`] with input validation
pub fn checked_position(
    anchor: Rect,
    content: Size,
    viewport: Size,
    options: &PlacementOptions,
) -> Result<PositionedContent> {
    let origin_finite = anchor.x().is_finite() && anchor.y().is_finite();
    for (what, size) in [
        ("anchor", anchor.size),
        ("content size", content),
        ("viewport", viewport),
    ] {
        if !size.is_valid() || (what == "anchor" && !origin_finite) {
            return Err(GeometryError::InvalidGeometry {
                what,
                width: size.width,
                height: size.height,
            });
        }
    }
    let offsets = [options.side_offset, options.align_offset];
    if offsets.iter().any(|o| !o.is_finite()) {
        return Err(GeometryError::InvalidGeometry {
            what: "offset",
            width: options.side_offset,
            height: options.align_offset,
        });
    }
    Ok(calculate_position(anchor, content, viewport, options))
}
