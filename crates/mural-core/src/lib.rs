//! Mural Core Library
//!
//! Platform-agnostic element model, hit-testing, undo history and the pointer
//! interaction state machine for the Mural whiteboard.

pub mod canvas;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod rough;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::{Action, Canvas};
pub use config::{ConfigError, EngineConfig, HitTolerances, TextConfig};
pub use document::{Document, DocumentError};
pub use error::{MuralError, MuralResult};
pub use geometry::Coords;
pub use hit_test::{element_at, position_within, Hit};
pub use history::History;
pub use input::{KeyCommand, Modifiers, PointerEvent};
pub use rough::{RoughOptions, RoughPrimitive};
pub use selection::{cursor_for_region, resized_coordinates, CursorHint, Region, Selection};
pub use shapes::{
    create_element, normalize_coordinates, Element, ElementFactory, ElementId, ElementKind,
    FontSpec, MonospaceMeasure, TextMeasure,
};
pub use tools::Tool;
