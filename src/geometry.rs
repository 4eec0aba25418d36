//! Board geometry: points, sizes, and the board's on-screen rectangle.
//!
//! Pointer events arrive in screen (client) coordinates. Everything the
//! engine stores is in board-local coordinates, whose origin is the top-left
//! corner of the board's bounding rectangle.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or board-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Euclidean length of the vector from the origin to this point.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square of side `side`.
    #[must_use]
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }
}

/// The board's bounding rectangle in screen coordinates, as reported by the
/// host at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoardRect {
    /// Screen-space top-left corner of the board.
    pub origin: Point,
    /// On-screen size of the board; also the clamp bounds for dragging.
    pub size: Size,
}

impl BoardRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(left, top), size: Size::new(width, height) }
    }

    /// Convert a screen-space point to board-local coordinates.
    #[must_use]
    pub fn to_local(&self, screen: Point) -> Point {
        screen.sub(self.origin)
    }
}

/// Clamp `value` into `[0, upper]`, letting the lower bound win when
/// `upper < 0` (an item larger than the board pins to the origin).
#[must_use]
pub fn clamp_to_extent(value: f64, upper: f64) -> f64 {
    value.min(upper).max(0.0)
}

/// Angle in degrees of the vector from `center` to `target`, measured with
/// `atan2` in screen orientation (y grows downward, so 90° points down).
#[must_use]
pub fn angle_degrees(center: Point, target: Point) -> f64 {
    let d = target.sub(center);
    d.y.atan2(d.x).to_degrees()
}
