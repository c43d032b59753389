//! Freehand pencil stroke.

use super::ElementId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An ordered, non-empty sequence of points captured while drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pencil {
    pub(crate) id: ElementId,
    points: Vec<Point>,
}

impl Pencil {
    /// Start a stroke with a single point.
    pub fn new(id: ElementId, start: Point) -> Self {
        Self {
            id,
            points: vec![start],
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Append a point to the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replace every point, e.g. after a move. An empty list is ignored so the
    /// stroke always keeps at least one point.
    pub fn set_points(&mut self, points: Vec<Point>) {
        if points.is_empty() {
            log::warn!("Ignoring empty point list for pencil {}", self.id);
            return;
        }
        self.points = points;
    }

    /// Bounding box of all points.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.points.iter();
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        iter.fold(Rect::from_points(*first, *first), |rect, p| {
            rect.union_pt(*p)
        })
    }
}
