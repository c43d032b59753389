//! A surface that records draw calls instead of rasterizing them.

use crate::surface::Surface;
use kurbo::{BezPath, Point};
use mural_core::{FontSpec, MonospaceMeasure, RoughPrimitive, TextMeasure};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// One recorded draw call. Paths are stored as SVG path data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    Rough {
        strokes: Vec<String>,
        color: SerializableColor,
    },
    Fill {
        path: String,
        color: SerializableColor,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font: String,
        color: SerializableColor,
    },
}

/// Records every call in order. Text is measured with a fixed advance.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    measure: MonospaceMeasure,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_measure(measure: MonospaceMeasure) -> Self {
        Self {
            commands: Vec::new(),
            measure,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, font: &FontSpec) -> f64 {
        self.measure.measure_text(text, font)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_rough(&mut self, primitive: &RoughPrimitive, color: Color) {
        self.commands.push(DrawCommand::Rough {
            strokes: primitive.strokes().iter().map(BezPath::to_svg).collect(),
            color: color.into(),
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: path.to_svg(),
            color: color.into(),
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, font: &FontSpec, color: Color) {
        self.commands.push(DrawCommand::Text {
            x: origin.x,
            y: origin.y,
            text: text.to_string(),
            font: font.css(),
            color: color.into(),
        });
    }
}
