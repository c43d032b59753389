//! Rectangle element.

use super::ElementId;
use crate::geometry::Coords;
use crate::rough::{seed_for, RoughOptions, RoughPrimitive};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with corners `(x1,y1)` and `(x2,y2)`.
///
/// The corners are not ordered while a gesture is in progress; they are
/// normalized to top-left/bottom-right when the gesture completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    #[serde(flatten)]
    coords: Coords,
    #[serde(skip)]
    primitive: RoughPrimitive,
}

impl Rectangle {
    pub fn new(id: ElementId, coords: Coords, options: &RoughOptions) -> Self {
        Self {
            id,
            coords,
            primitive: RoughPrimitive::rectangle(coords, options, seed_for(id)),
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

    pub fn rebuild_primitive(&mut self, options: &RoughOptions) {
        self.primitive = RoughPrimitive::rectangle(self.coords, options, seed_for(self.id));
    }
}
