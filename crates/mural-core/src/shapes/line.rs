//! Line element.

use super::ElementId;
use crate::geometry::Coords;
use crate::rough::{seed_for, RoughOptions, RoughPrimitive};
use serde::{Deserialize, Serialize};

/// A straight segment from `(x1,y1)` to `(x2,y2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ElementId,
    #[serde(flatten)]
    coords: Coords,
    #[serde(skip)]
    primitive: RoughPrimitive,
}

impl Line {
    /// Create a line and generate its hand-drawn primitive.
    pub fn new(id: ElementId, coords: Coords, options: &RoughOptions) -> Self {
        Self {
            id,
            coords,
            primitive: RoughPrimitive::line(coords, options, seed_for(id)),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn primitive(&self) -> &RoughPrimitive {
        &self.primitive
    }

    /// Regenerate the primitive from the current coordinates.
    pub fn rebuild_primitive(&mut self, options: &RoughOptions) {
        self.primitive = RoughPrimitive::line(self.coords, options, seed_for(self.id));
    }
}
