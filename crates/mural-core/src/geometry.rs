//! Geometry helpers shared by the element model and the hit-tester.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Check whether `point` lies within `tolerance` of `target` on both axes.
///
/// The comparison is strict: a point exactly `tolerance` away on either axis
/// does not count as near.
pub fn near_point(point: Point, target: Point, tolerance: f64) -> bool {
    (point.x - target.x).abs() < tolerance && (point.y - target.y).abs() < tolerance
}

/// Check whether `point` lies on the segment `a`→`b`.
///
/// Uses the detour length `|ab| - (|ac| + |bc|)`, which is zero exactly on the
/// segment and grows as the point moves away from it or past an endpoint.
/// With a zero tolerance only exactly colinear points inside the segment match.
pub fn on_segment(a: Point, b: Point, point: Point, tolerance: f64) -> bool {
    let offset = (distance(a, b) - (distance(a, point) + distance(b, point))).abs();
    offset < tolerance || offset == 0.0
}

/// Two-corner coordinates of a bounded element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coords {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Coords {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Coordinates spanning two points.
    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// First corner (or line start).
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Second corner (or line end).
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Move the first corner to `origin`, keeping width and height.
    pub fn moved_to(&self, origin: Point) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + self.width(),
            origin.y + self.height(),
        )
    }

    /// Translate both corners.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(
            self.x1 + delta.x,
            self.y1 + delta.y,
            self.x2 + delta.x,
            self.y2 + delta.y,
        )
    }

    /// Per-axis min/max ordering, so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized_rect(&self) -> Self {
        Self::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }

    /// Endpoint ordering for a line: swap only when the end sorts before the
    /// start (by x, then by y). The line keeps its geometry.
    pub fn normalized_line(&self) -> Self {
        if self.x1 < self.x2 || (self.x1 == self.x2 && self.y1 <= self.y2) {
            *self
        } else {
            Self::new(self.x2, self.y2, self.x1, self.y1)
        }
    }

    /// Axis-aligned box covering both corners.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start(), self.end())
    }

    /// Inclusive containment in the axis-aligned box `(x1,y1)`–`(x2,y2)`.
    ///
    /// Uses the stored orientation as-is; an inverted box (mid-gesture)
    /// contains nothing.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x1 && point.x <= self.x2 && point.y >= self.y1 && point.y <= self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_near_point_is_strict() {
        let target = Point::new(0.0, 0.0);
        assert!(near_point(Point::new(4.9, -4.9), target, 5.0));
        assert!(!near_point(Point::new(5.0, 0.0), target, 5.0));
        assert!(!near_point(Point::new(0.0, -5.0), target, 5.0));
    }

    #[test]
    fn test_on_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(on_segment(a, b, Point::new(5.0, 0.0), 1.0));
        assert!(on_segment(a, b, Point::new(5.0, 1.0), 1.0));
        assert!(!on_segment(a, b, Point::new(5.0, 4.0), 1.0));
        // Colinear but past the end
        assert!(!on_segment(a, b, Point::new(12.0, 0.0), 1.0));
    }

    #[test]
    fn test_on_segment_zero_tolerance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(on_segment(a, b, Point::new(5.0, 0.0), 0.0));
        assert!(!on_segment(a, b, Point::new(5.0, 0.5), 0.0));
    }

    #[test]
    fn test_normalized_rect() {
        let c = Coords::new(10.0, -5.0, 0.0, 20.0).normalized_rect();
        assert_eq!(c, Coords::new(0.0, -5.0, 10.0, 20.0));
    }

    #[test]
    fn test_normalized_line_swaps_endpoints() {
        let c = Coords::new(10.0, 0.0, 0.0, 5.0).normalized_line();
        assert_eq!(c, Coords::new(0.0, 5.0, 10.0, 0.0));

        let vertical = Coords::new(3.0, 9.0, 3.0, 1.0).normalized_line();
        assert_eq!(vertical, Coords::new(3.0, 1.0, 3.0, 9.0));

        let forward = Coords::new(0.0, 9.0, 1.0, 0.0);
        assert_eq!(forward.normalized_line(), forward);
    }

    #[test]
    fn test_moved_to_keeps_size() {
        let c = Coords::new(0.0, 0.0, 30.0, 10.0).moved_to(Point::new(5.0, 7.0));
        assert_eq!(c, Coords::new(5.0, 7.0, 35.0, 17.0));
    }

    #[test]
    fn test_contains_inclusive() {
        let c = Coords::new(10.0, 10.0, 50.0, 50.0);
        assert!(c.contains(Point::new(10.0, 50.0)));
        assert!(!c.contains(Point::new(9.9, 30.0)));
    }
}
