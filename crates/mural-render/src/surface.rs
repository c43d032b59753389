//! Drawing surface abstraction.

use kurbo::{BezPath, Point};
use mural_core::{FontSpec, RoughPrimitive, TextMeasure};
use peniko::Color;

/// A 2D raster surface the renderer draws onto.
///
/// Surfaces also measure text so that committed text boxes match what is
/// drawn.
pub trait Surface: TextMeasure {
    /// Erase everything.
    fn clear(&mut self);

    /// Stroke the hand-drawn strokes of a line or rectangle.
    fn draw_rough(&mut self, primitive: &RoughPrimitive, color: Color);

    /// Fill a closed path.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, font: &FontSpec, color: Color);
}
