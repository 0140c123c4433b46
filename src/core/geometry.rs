//! Screen-space geometry primitives.
//!
//! Coordinates are pixels with the origin at the top-left corner,
//! x growing right and y growing down.

use serde::{Deserialize, Serialize};

/// A point in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (inclusive).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Bottom edge (inclusive).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Containment test, closed on both axes: the corners are inside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x <= self.right()
            && self.y <= point.y
            && point.y <= self.bottom()
    }

    /// Center of the rectangle (rounded toward the top-left).
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.x + self.width as i32 / 2,
            self.y + self.height as i32 / 2,
        )
    }

    /// Overlap test against another rectangle.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_corners() {
        let rect = Rect::new(10, 20, 40, 80);

        // All four corners are inside (closed intervals).
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(50, 20)));
        assert!(rect.contains(Point::new(10, 100)));
        assert!(rect.contains(Point::new(50, 100)));
    }

    #[test]
    fn test_contains_outside() {
        let rect = Rect::new(10, 20, 40, 80);

        assert!(!rect.contains(Point::new(9, 20)));
        assert!(!rect.contains(Point::new(51, 20)));
        assert!(!rect.contains(Point::new(10, 19)));
        assert!(!rect.contains(Point::new(10, 101)));
        assert!(!rect.contains(Point::new(0, 0)));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(10, 20, 40, 80);
        assert_eq!(rect.center(), Point::new(30, 60));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        let c = Rect::new(20, 20, 10, 10);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_serde_roundtrip() {
        let rect = Rect::new(1, 2, 3, 4);
        let json = serde_json::to_string(&rect).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);
    }
}
