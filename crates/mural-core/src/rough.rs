//! Hand-drawn rendering primitives for lines and rectangles.
//!
//! Each primitive is two sketchy strokes over the clean outline, generated
//! once when an element is created or its coordinates change. The randomness
//! is seeded from the element id, so regenerating an element in place yields
//! the same strokes.

use crate::geometry::Coords;
use crate::shapes::ElementId;
use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};

/// Parameters of the hand-drawn effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoughOptions {
    /// Overall sketchiness (0 = clean lines).
    pub roughness: f64,
    /// Strength of the mid-segment bow.
    pub bowing: f64,
    /// Maximum jitter applied to endpoints, before roughness scaling.
    pub max_randomness_offset: f64,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: 2.0,
        }
    }
}

/// Precomputed sketchy strokes for a line or rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoughPrimitive {
    strokes: Vec<BezPath>,
}

impl RoughPrimitive {
    /// Hand-drawn line from `(x1,y1)` to `(x2,y2)`.
    pub fn line(coords: Coords, options: &RoughOptions, seed: u32) -> Self {
        let mut path = BezPath::new();
        path.move_to(coords.start());
        path.line_to(coords.end());
        Self::from_outline(&path, options, seed)
    }

    /// Hand-drawn rectangle with corners `(x1,y1)` and `(x2,y2)`.
    ///
    /// Corners are used as given, so an inverted rectangle mid-gesture still
    /// draws where the pointer is.
    pub fn rectangle(coords: Coords, options: &RoughOptions, seed: u32) -> Self {
        let mut path = BezPath::new();
        path.move_to(Point::new(coords.x1, coords.y1));
        path.line_to(Point::new(coords.x2, coords.y1));
        path.line_to(Point::new(coords.x2, coords.y2));
        path.line_to(Point::new(coords.x1, coords.y2));
        path.close_path();
        Self::from_outline(&path, options, seed)
    }

    fn from_outline(path: &BezPath, options: &RoughOptions, seed: u32) -> Self {
        if options.roughness <= 0.0 {
            return Self {
                strokes: vec![path.clone()],
            };
        }
        let strokes = (0..2)
            .map(|stroke_index| apply_hand_drawn_effect(path, options, seed, stroke_index))
            .collect();
        Self { strokes }
    }

    /// The strokes to draw, in order.
    pub fn strokes(&self) -> &[BezPath] {
        &self.strokes
    }

    /// A primitive that has not been generated yet (e.g. after deserializing).
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Stable seed for an element id (splitmix32-style mixing).
pub fn seed_for(id: ElementId) -> u32 {
    let mut x = (id as u32).wrapping_add(1).wrapping_mul(0x9E3779B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^= x >> 16;
    x
}

/// Seeded xorshift32 generator.
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random float in range [-1, 1]
    fn next_f64(&mut self) -> f64 {
        (self.next_u32() as f64 / u32::MAX as f64) * 2.0 - 1.0
    }

    fn offset(&mut self, amount: f64) -> f64 {
        self.next_f64() * amount
    }
}

/// Redraw a straight-segment outline as a sketchy stroke: every vertex is
/// jittered and every segment bows sideways by an amount proportional to its
/// length. `stroke_index` selects an independent random sequence.
fn apply_hand_drawn_effect(
    path: &BezPath,
    options: &RoughOptions,
    seed: u32,
    stroke_index: u32,
) -> BezPath {
    let roughness = options.roughness;
    let max_offset = roughness * options.max_randomness_offset;
    let bowing = roughness * options.bowing;

    let mut rng = SimpleRng::new(seed.wrapping_add(stroke_index.wrapping_mul(99991)));
    let mut result = BezPath::new();
    let mut last_point = Point::ZERO;

    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                result.move_to(Point::new(
                    p.x + rng.offset(max_offset),
                    p.y + rng.offset(max_offset),
                ));
                last_point = *p;
            }
            PathEl::LineTo(p) => {
                let dx = p.x - last_point.x;
                let dy = p.y - last_point.y;
                let len = (dx * dx + dy * dy).sqrt();

                let bow = rng.offset(bowing * len / 200.0);
                let (perp_x, perp_y) = if len > 0.001 {
                    (-dy / len, dx / len)
                } else {
                    (0.0, 0.0)
                };
                let control = Point::new(
                    (last_point.x + p.x) / 2.0 + perp_x * bow,
                    (last_point.y + p.y) / 2.0 + perp_y * bow,
                );
                let end = Point::new(p.x + rng.offset(max_offset), p.y + rng.offset(max_offset));
                result.quad_to(control, end);
                last_point = *p;
            }
            PathEl::ClosePath => result.close_path(),
            // Outlines are built from straight segments only
            other => result.push(*other),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_has_two_strokes() {
        let prim = RoughPrimitive::line(
            Coords::new(0.0, 0.0, 100.0, 0.0),
            &RoughOptions::default(),
            seed_for(0),
        );
        assert_eq!(prim.strokes().len(), 2);
        assert_ne!(prim.strokes()[0], prim.strokes()[1]);
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let coords = Coords::new(10.0, 10.0, 50.0, 40.0);
        let options = RoughOptions::default();
        let a = RoughPrimitive::rectangle(coords, &options, seed_for(3));
        let b = RoughPrimitive::rectangle(coords, &options, seed_for(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_ids_differ() {
        let coords = Coords::new(10.0, 10.0, 50.0, 40.0);
        let options = RoughOptions::default();
        let a = RoughPrimitive::rectangle(coords, &options, seed_for(0));
        let b = RoughPrimitive::rectangle(coords, &options, seed_for(1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_roughness_is_clean() {
        let options = RoughOptions {
            roughness: 0.0,
            ..RoughOptions::default()
        };
        let prim = RoughPrimitive::line(Coords::new(0.0, 0.0, 10.0, 10.0), &options, 7);
        assert_eq!(prim.strokes().len(), 1);
        let bbox = kurbo::Shape::bounding_box(&prim.strokes()[0]);
        assert!((bbox.x1 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_segments_become_bowed_quads() {
        let prim = RoughPrimitive::rectangle(
            Coords::new(0.0, 0.0, 40.0, 30.0),
            &RoughOptions::default(),
            seed_for(2),
        );
        for stroke in prim.strokes() {
            let elements = stroke.elements();
            assert!(matches!(elements[0], PathEl::MoveTo(_)));
            assert_eq!(
                elements
                    .iter()
                    .filter(|el| matches!(el, PathEl::QuadTo(..)))
                    .count(),
                3
            );
            assert_eq!(elements.last(), Some(&PathEl::ClosePath));
        }
    }

    #[test]
    fn test_jitter_stays_bounded() {
        let options = RoughOptions::default();
        let prim = RoughPrimitive::rectangle(Coords::new(0.0, 0.0, 100.0, 100.0), &options, 42);
        let limit = options.roughness * options.max_randomness_offset + options.bowing;
        for stroke in prim.strokes() {
            let bbox = kurbo::Shape::bounding_box(stroke);
            assert!(bbox.x0 > -limit && bbox.y0 > -limit);
            assert!(bbox.x1 < 100.0 + limit && bbox.y1 < 100.0 + limit);
        }
    }
}
