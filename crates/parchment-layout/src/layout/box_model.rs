//! Geometry primitives shared by layout, hit testing and painting.

use core::ops::{Add, Sub};

use serde::Serialize;

/// A position, either absolute (view space) or relative to a parent box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a box or of measured text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle positioned in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its corner and extent.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle occupied by a box at `position` with `size`.
    #[must_use]
    pub const fn from_origin_size(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    ///
    /// A point on the right or bottom edge belongs to the next box, so
    /// adjacent boxes never both claim it.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Shrink every side by `amount`. The extent never goes negative.
    #[must_use]
    pub fn inset(self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 14.9)));
        assert!(!r.contains(Point::new(30.0, 12.0)));
        assert!(!r.contains(Point::new(12.0, 15.0)));
        assert!(!r.contains(Point::new(9.9, 12.0)));
    }

    #[test]
    fn test_zero_sized_rect_contains_nothing() {
        let r = Rect::new(0.0, 0.0, 0.0, 10.0);
        assert!(!r.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_inset_clamps_extent() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0).inset(3.0);
        assert_eq!(r, Rect::new(3.0, 3.0, 4.0, 0.0));
    }
}
