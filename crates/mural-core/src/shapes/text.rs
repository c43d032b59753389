//! Text label element and text measurement.

use super::ElementId;
use crate::geometry::Coords;
use serde::{Deserialize, Serialize};

/// A single-line text label. `text` is empty while the label is being placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    #[serde(flatten)]
    coords: Coords,
    #[serde(default)]
    pub text: String,
}

impl Text {
    pub fn new(id: ElementId, coords: Coords) -> Self {
        Self {
            id,
            coords,
            text: String::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn set_coords(&mut self, coords: Coords) {
        self.coords = coords;
    }

    /// Set the content and resize the box to `width` x `line_height`,
    /// anchored at the current top-left corner.
    pub fn set_text(&mut self, text: String, width: f64, line_height: f64) {
        self.coords = Coords::new(
            self.coords.x1,
            self.coords.y1,
            self.coords.x1 + width,
            self.coords.y1 + line_height,
        );
        self.text = text;
    }
}

/// Font used to draw and measure text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub family: String,
    /// Font size in pixels.
    pub size: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Nunito".to_string(),
            size: 24.0,
        }
    }
}

impl FontSpec {
    /// CSS shorthand, e.g. `24px Nunito`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

/// Measures the advance width of a string in a given font.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font: &FontSpec) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &FontSpec) -> f64,
{
    fn measure_text(&self, text: &str, font: &FontSpec) -> f64 {
        self(text, font)
    }
}

/// Fixed-advance measurement: every character is `advance * font.size` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_text(&self, text: &str, font: &FontSpec) -> f64 {
        text.chars().count() as f64 * self.advance * font.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_resizes_box() {
        let mut text = Text::new(3, Coords::new(10.0, 20.0, 10.0, 20.0));
        text.set_text("hello".to_string(), 55.0, 24.0);
        assert_eq!(text.coords(), Coords::new(10.0, 20.0, 65.0, 44.0));
        assert_eq!(text.text, "hello");
    }

    #[test]
    fn test_monospace_measure() {
        let font = FontSpec::default();
        let width = MonospaceMeasure::default().measure_text("abcd", &font);
        assert!((width - 4.0 * 0.6 * 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_closure_measure() {
        let measure = |text: &str, _: &FontSpec| text.len() as f64 * 10.0;
        assert!((measure.measure_text("abc", &FontSpec::default()) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_font_css() {
        assert_eq!(FontSpec::default().css(), "24px Nunito");
    }
}
