//! Projects a document onto a surface.

use crate::recording::SerializableColor;
use crate::stroke::{outline_to_path, stroke_outline, StrokeOptions};
use crate::surface::Surface;
use kurbo::Point;
use mural_core::{Canvas, Document, Element, ElementId, FontSpec, TextMeasure};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Freehand stroke shape.
    pub stroke: StrokeOptions,
    /// Color for every element.
    pub ink: SerializableColor,
    /// Font for text when rendering a bare document.
    pub font: FontSpec,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stroke: StrokeOptions::default(),
            ink: SerializableColor::black(),
            font: FontSpec::default(),
        }
    }
}

/// Redraws whole documents onto a [`Surface`].
#[derive(Debug)]
pub struct Renderer<S: Surface> {
    surface: S,
    config: RenderConfig,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, RenderConfig::default())
    }

    pub fn with_config(surface: S, config: RenderConfig) -> Self {
        Self { surface, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Clear the surface and draw every element in order, skipping the one
    /// being text-edited.
    pub fn render(&mut self, document: &Document, editing: Option<ElementId>) {
        let font = self.config.font.clone();
        self.draw(document, editing, &font);
    }

    /// Render the current snapshot of `canvas` with its text font.
    pub fn render_canvas<M: TextMeasure>(&mut self, canvas: &Canvas<M>) {
        self.draw(canvas.document(), canvas.editing_id(), &canvas.config().text.font);
    }

    fn draw(&mut self, document: &Document, editing: Option<ElementId>, font: &FontSpec) {
        let ink = Color::from(self.config.ink);
        self.surface.clear();

        for element in document.iter() {
            if editing == Some(element.id()) {
                continue;
            }
            match element {
                Element::Line(line) => self.draw_primitive(element.id(), line.primitive(), ink),
                Element::Rectangle(rect) => self.draw_primitive(element.id(), rect.primitive(), ink),
                Element::Pencil(pencil) => {
                    let outline = stroke_outline(pencil.points(), &self.config.stroke);
                    self.surface.fill_path(&outline_to_path(&outline), ink);
                }
                Element::Text(text) => {
                    let coords = text.coords();
                    self.surface.draw_text(
                        Point::new(coords.x1, coords.y1),
                        &text.text,
                        font,
                        ink,
                    );
                }
            }
        }
        log::trace!("Rendered {} elements", document.len());
    }

    fn draw_primitive(&mut self, id: ElementId, primitive: &mural_core::RoughPrimitive, ink: Color) {
        if primitive.is_empty() {
            log::warn!("Element {id} has no hand-drawn primitive; skipping");
            return;
        }
        self.surface.draw_rough(primitive, ink);
    }
}
