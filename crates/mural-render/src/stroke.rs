//! Variable-width outlines for freehand strokes.
//!
//! Input points are smoothed, given a simulated pressure from their spacing
//! (wide gaps mean a fast hand and a thinner line), then offset to both sides
//! by a pressure-dependent radius. The two sides and two round caps form one
//! closed polygon, which [`outline_to_path`] turns into a smooth filled path.

use kurbo::{BezPath, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How much the simulated pressure may change per point.
const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;
/// Segments used to approximate each round cap.
const CAP_SEGMENTS: usize = 12;

/// Stroke shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// Base stroke diameter.
    pub size: f64,
    /// How strongly pressure thins the stroke (0 = constant width).
    pub thinning: f64,
    /// Minimum spacing between outline points, as a fraction of `size`.
    pub smoothing: f64,
    /// How far each input point is pulled towards the previous one.
    pub streamline: f64,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 16.0,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
        }
    }
}

struct StrokePoint {
    point: Point,
    /// Unit direction of travel.
    direction: Vec2,
    distance: f64,
}

fn stroke_points(points: &[Point], options: &StrokeOptions) -> Vec<StrokePoint> {
    let t = 0.15 + (1.0 - options.streamline.clamp(0.0, 1.0)) * 0.85;
    let mut result: Vec<StrokePoint> = Vec::with_capacity(points.len());
    let Some(first) = points.first() else {
        return result;
    };
    result.push(StrokePoint {
        point: *first,
        direction: Vec2::ZERO,
        distance: 0.0,
    });

    let last_index = points.len() - 1;
    for (i, raw) in points.iter().enumerate().skip(1) {
        let prev = result[result.len() - 1].point;
        // The last point is not streamlined so the stroke ends under the pointer
        let point = if i == last_index {
            *raw
        } else {
            prev.lerp(*raw, t)
        };
        let delta = point - prev;
        let distance = delta.hypot();
        if distance <= f64::EPSILON {
            continue;
        }
        result.push(StrokePoint {
            point,
            direction: delta / distance,
            distance,
        });
    }

    if result.len() > 1 {
        result[0].direction = result[1].direction;
    }
    result
}

fn radius(options: &StrokeOptions, pressure: f64) -> f64 {
    options.size * (0.5 - options.thinning * (0.5 - pressure))
}

/// Points of a round cap around `center`, sweeping half a turn clockwise
/// from `from` (an offset from the center). Endpoints are excluded.
fn cap(center: Point, from: Vec2) -> impl Iterator<Item = Point> {
    (1..CAP_SEGMENTS).map(move |k| {
        let theta = -PI * k as f64 / CAP_SEGMENTS as f64;
        let (sin, cos) = theta.sin_cos();
        center + Vec2::new(from.x * cos - from.y * sin, from.x * sin + from.y * cos)
    })
}

fn dot(center: Point, radius: f64) -> Vec<Point> {
    let from = Vec2::new(0.0, -radius);
    let mut outline = vec![center + from];
    outline.extend(cap(center, from));
    outline.push(center - from);
    outline.extend(cap(center, -from));
    outline
}

/// Outline polygon of a freehand stroke through `points`.
///
/// Empty input yields an empty outline; a single point (or a stroke whose
/// points all coincide) yields a round dot.
pub fn stroke_outline(points: &[Point], options: &StrokeOptions) -> Vec<Point> {
    let stroke = stroke_points(points, options);
    match stroke.as_slice() {
        [] => return Vec::new(),
        [only] => return dot(only.point, radius(options, 0.5).max(0.5)),
        _ => {}
    }

    let min_spacing = (options.size * options.smoothing).powi(2);
    let mut left: Vec<Point> = Vec::with_capacity(stroke.len());
    let mut right: Vec<Point> = Vec::with_capacity(stroke.len());
    let mut pressure = 0.5;
    let mut first_radius = 0.0;
    let mut last_radius = 0.0;

    let last_index = stroke.len() - 1;
    for (i, sp) in stroke.iter().enumerate() {
        let speed = (sp.distance / options.size).min(1.0);
        let target = 1.0 - speed;
        pressure = (pressure + (target - pressure) * speed * RATE_OF_PRESSURE_CHANGE).clamp(0.0, 1.0);
        let r = radius(options, pressure).max(0.5);
        if i == 0 {
            first_radius = r;
        }
        last_radius = r;

        let normal = Vec2::new(-sp.direction.y, sp.direction.x) * r;
        let l = sp.point + normal;
        let rt = sp.point - normal;
        let far_enough = |side: &[Point], p: Point| {
            side.last()
                .is_none_or(|prev| (p - *prev).hypot2() > min_spacing)
        };
        if i == 0 || i == last_index || far_enough(&left, l) {
            left.push(l);
        }
        if i == 0 || i == last_index || far_enough(&right, rt) {
            right.push(rt);
        }
    }

    let start = &stroke[0];
    let end = &stroke[last_index];
    let start_normal = Vec2::new(-start.direction.y, start.direction.x) * first_radius;
    let end_normal = Vec2::new(-end.direction.y, end.direction.x) * last_radius;

    let mut outline = Vec::with_capacity(left.len() + right.len() + 2 * CAP_SEGMENTS);
    outline.extend(left.iter().copied());
    outline.extend(cap(end.point, end_normal));
    outline.extend(right.iter().rev().copied());
    outline.extend(cap(start.point, -start_normal));
    outline
}

/// Smooth closed path through an outline polygon, using each vertex as a
/// quadratic control point between consecutive midpoints.
pub fn outline_to_path(outline: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = outline.first() else {
        return path;
    };
    path.move_to(*first);
    for (i, p) in outline.iter().enumerate() {
        let next = outline[(i + 1) % outline.len()];
        path.quad_to(*p, p.midpoint(next));
    }
    path.close_path();
    path
}
