//! Mural Render Library
//!
//! Draws the current document of a Mural canvas onto an abstract 2D
//! [`Surface`]. Freehand strokes are filled outlines built by [`stroke`].

mod recording;
mod renderer;
pub mod stroke;
mod surface;

pub use recording::{DrawCommand, RecordingSurface, SerializableColor};
pub use renderer::{RenderConfig, Renderer};
pub use stroke::{outline_to_path, stroke_outline, StrokeOptions};
pub use surface::Surface;
