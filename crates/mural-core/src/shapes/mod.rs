//! Element definitions for the whiteboard.

mod line;
mod pencil;
mod rectangle;
mod text;

pub use line::Line;
pub use pencil::Pencil;
pub use rectangle::Rectangle;
pub use text::{FontSpec, MonospaceMeasure, Text, TextMeasure};

use crate::error::MuralError;
use crate::geometry::Coords;
use crate::rough::RoughOptions;
use crate::tools::Tool;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positional index of an element in its document.
pub type ElementId = usize;

/// The four drawable element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Line,
    Rectangle,
    Pencil,
    Text,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Pencil => "pencil",
            ElementKind::Text => "text",
        }
    }

    /// Whether the element is defined by two corner points.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, ElementKind::Pencil)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = MuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ElementKind::Line),
            "rectangle" => Ok(ElementKind::Rectangle),
            "pencil" => Ok(ElementKind::Pencil),
            "text" => Ok(ElementKind::Text),
            other => Err(MuralError::UnrecognizedElementType(other.to_string())),
        }
    }
}

impl TryFrom<Tool> for ElementKind {
    type Error = MuralError;

    fn try_from(tool: Tool) -> Result<Self, Self::Error> {
        match tool {
            Tool::Line => Ok(ElementKind::Line),
            Tool::Rectangle => Ok(ElementKind::Rectangle),
            Tool::Pencil => Ok(ElementKind::Pencil),
            Tool::Text => Ok(ElementKind::Text),
            Tool::Selection => Err(MuralError::UnrecognizedElementType(
                tool.as_str().to_string(),
            )),
        }
    }
}

/// A drawable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Pencil(Pencil),
    Text(Text),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(e) => e.id(),
            Element::Rectangle(e) => e.id(),
            Element::Pencil(e) => e.id(),
            Element::Text(e) => e.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line(_) => ElementKind::Line,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Pencil(_) => ElementKind::Pencil,
            Element::Text(_) => ElementKind::Text,
        }
    }

    /// Corner coordinates; `None` for pencil strokes.
    pub fn coords(&self) -> Option<Coords> {
        match self {
            Element::Line(e) => Some(e.coords()),
            Element::Rectangle(e) => Some(e.coords()),
            Element::Text(e) => Some(e.coords()),
            Element::Pencil(_) => None,
        }
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Pencil(e) => e.bounds(),
            Element::Line(e) => e.coords().as_rect(),
            Element::Rectangle(e) => e.coords().as_rect(),
            Element::Text(e) => e.coords().as_rect(),
        }
    }

    /// Copy of this element with new corner coordinates.
    ///
    /// The hand-drawn primitive is regenerated only when the coordinates
    /// actually change. Pencil strokes have no corners and are returned as-is.
    pub fn with_coords(&self, coords: Coords, options: &RoughOptions) -> Element {
        if self.coords() == Some(coords) {
            return self.clone();
        }
        match self {
            Element::Line(e) => Element::Line(Line::new(e.id(), coords, options)),
            Element::Rectangle(e) => Element::Rectangle(Rectangle::new(e.id(), coords, options)),
            Element::Text(e) => {
                let mut text = e.clone();
                text.set_coords(coords);
                Element::Text(text)
            }
            Element::Pencil(_) => self.clone(),
        }
    }

    /// Copy of this element with its coordinates normalized. Returns a plain
    /// clone when nothing changes.
    pub fn normalized(&self, options: &RoughOptions) -> Element {
        match normalize_coordinates(self) {
            Some(coords) => self.with_coords(coords, options),
            None => self.clone(),
        }
    }

    /// Regenerate the cached hand-drawn primitive, e.g. after deserializing.
    pub fn rebuild_primitive(&mut self, options: &RoughOptions) {
        match self {
            Element::Line(e) => e.rebuild_primitive(options),
            Element::Rectangle(e) => e.rebuild_primitive(options),
            Element::Pencil(_) | Element::Text(_) => {}
        }
    }
}

/// Builds elements with the configured hand-drawn options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementFactory {
    pub rough: RoughOptions,
}

impl ElementFactory {
    pub fn new(rough: RoughOptions) -> Self {
        Self { rough }
    }

    /// Create an element of `kind` spanning `(x1,y1)`-`(x2,y2)`.
    ///
    /// Pencil strokes start as the single point `(x1,y1)`; text starts empty.
    pub fn create(
        &self,
        id: ElementId,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        kind: ElementKind,
    ) -> Element {
        let coords = Coords::new(x1, y1, x2, y2);
        match kind {
            ElementKind::Line => Element::Line(Line::new(id, coords, &self.rough)),
            ElementKind::Rectangle => Element::Rectangle(Rectangle::new(id, coords, &self.rough)),
            ElementKind::Pencil => Element::Pencil(Pencil::new(id, Point::new(x1, y1))),
            ElementKind::Text => Element::Text(Text::new(id, coords)),
        }
    }
}

/// Create an element with default hand-drawn options.
pub fn create_element(
    id: ElementId,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    kind: ElementKind,
) -> Element {
    ElementFactory::default().create(id, x1, y1, x2, y2, kind)
}

/// Canonical corner ordering for lines and rectangles.
///
/// Rectangles take per-axis min/max; lines swap endpoints when the end sorts
/// before the start. Pencil and text are not normalized and yield `None`.
pub fn normalize_coordinates(element: &Element) -> Option<Coords> {
    match element {
        Element::Line(e) => Some(e.coords().normalized_line()),
        Element::Rectangle(e) => Some(e.coords().normalized_rect()),
        Element::Pencil(_) | Element::Text(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_line_has_primitive() {
        let element = create_element(0, 0.0, 0.0, 10.0, 10.0, ElementKind::Line);
        let Element::Line(line) = &element else {
            panic!("expected line");
        };
        assert!(!line.primitive().is_empty());
        assert_eq!(element.coords(), Some(Coords::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_create_pencil_ignores_far_corner() {
        let element = create_element(2, 4.0, 5.0, 99.0, 99.0, ElementKind::Pencil);
        let Element::Pencil(pencil) = &element else {
            panic!("expected pencil");
        };
        assert_eq!(pencil.points(), &[Point::new(4.0, 5.0)]);
        assert_eq!(element.id(), 2);
        assert!(element.coords().is_none());
    }

    #[test]
    fn test_create_text_is_empty() {
        let element = create_element(1, 4.0, 5.0, 4.0, 5.0, ElementKind::Text);
        let Element::Text(text) = &element else {
            panic!("expected text");
        };
        assert!(text.text.is_empty());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("rectangle".parse::<ElementKind>(), Ok(ElementKind::Rectangle));
        assert_eq!(
            "circle".parse::<ElementKind>(),
            Err(MuralError::UnrecognizedElementType("circle".to_string()))
        );
    }

    #[test]
    fn test_selection_tool_is_not_an_element() {
        assert!(ElementKind::try_from(Tool::Selection).is_err());
        assert_eq!(ElementKind::try_from(Tool::Text), Ok(ElementKind::Text));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let rect = create_element(0, 50.0, 40.0, 10.0, 0.0, ElementKind::Rectangle);
        let once = rect.normalized(&RoughOptions::default());
        assert_eq!(once.coords(), Some(Coords::new(10.0, 0.0, 50.0, 40.0)));
        let twice = once.normalized(&RoughOptions::default());
        assert_eq!(once, twice);

        let line = create_element(0, 10.0, 0.0, 0.0, 5.0, ElementKind::Line);
        let once = normalize_coordinates(&line);
        assert_eq!(once, Some(Coords::new(0.0, 5.0, 10.0, 0.0)));
        let again = line.normalized(&RoughOptions::default());
        assert_eq!(normalize_coordinates(&again), once);
    }

    #[test]
    fn test_normalize_skips_pencil_and_text() {
        let text = create_element(0, 10.0, 10.0, 0.0, 0.0, ElementKind::Text);
        assert!(normalize_coordinates(&text).is_none());
    }

    #[test]
    fn test_with_same_coords_keeps_primitive() {
        let rect = create_element(4, 0.0, 0.0, 20.0, 10.0, ElementKind::Rectangle);
        let again = rect.with_coords(Coords::new(0.0, 0.0, 20.0, 10.0), &RoughOptions::default());
        assert_eq!(rect, again);
    }

    #[test]
    fn test_serde_skips_primitive() {
        let line = create_element(0, 1.0, 2.0, 3.0, 4.0, ElementKind::Line);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["x2"], 3.0);
        assert!(json.get("primitive").is_none());

        let mut restored: Element = serde_json::from_value(json).unwrap();
        assert_ne!(restored, line);
        restored.rebuild_primitive(&RoughOptions::default());
        assert_eq!(restored, line);
    }
}
