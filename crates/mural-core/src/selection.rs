//! Grab regions, cursor hints and move/resize manipulation.

use crate::error::{MuralError, MuralResult};
use crate::geometry::Coords;
use crate::rough::RoughOptions;
use crate::shapes::Element;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where on an element the pointer landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Line start point.
    Start,
    /// Line end point.
    End,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// The body of the element.
    Inside,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Start => "start",
            Region::End => "end",
            Region::TopLeft => "tl",
            Region::TopRight => "tr",
            Region::BottomLeft => "bl",
            Region::BottomRight => "br",
            Region::Inside => "inside",
        }
    }

    /// Whether grabbing this region resizes rather than moves.
    pub fn is_handle(&self) -> bool {
        *self != Region::Inside
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor to show for the region under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    /// Diagonal resize, top-left to bottom-right.
    ResizeNwSe,
    /// Diagonal resize, top-right to bottom-left.
    ResizeNeSw,
}

impl CursorHint {
    /// CSS cursor name.
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Move => "move",
            CursorHint::ResizeNwSe => "nwse-resize",
            CursorHint::ResizeNeSw => "nesw-resize",
        }
    }
}

pub fn cursor_for_region(region: Option<Region>) -> CursorHint {
    match region {
        None => CursorHint::Default,
        Some(Region::TopLeft | Region::BottomRight | Region::Start | Region::End) => {
            CursorHint::ResizeNwSe
        }
        Some(Region::TopRight | Region::BottomLeft) => CursorHint::ResizeNeSw,
        Some(Region::Inside) => CursorHint::Move,
    }
}

/// New corner coordinates after dragging `region` to `pointer`.
///
/// Only the grabbed corner follows the pointer; the opposite corner stays put.
/// The result is not normalized.
pub fn resized_coordinates(pointer: Point, region: Region, coords: Coords) -> MuralResult<Coords> {
    let Coords { x1, y1, x2, y2 } = coords;
    let (px, py) = (pointer.x, pointer.y);
    match region {
        Region::TopLeft | Region::Start => Ok(Coords::new(px, py, x2, y2)),
        Region::TopRight => Ok(Coords::new(x1, py, px, y2)),
        Region::BottomLeft => Ok(Coords::new(px, y1, x2, py)),
        Region::BottomRight | Region::End => Ok(Coords::new(x1, y1, px, py)),
        Region::Inside => Err(MuralError::InvalidResizeHandle(region.to_string())),
    }
}

/// Pointer-to-element offsets captured at grab time.
#[derive(Debug, Clone, PartialEq)]
pub enum GrabOffset {
    /// Bounded shapes: pointer minus the first corner.
    Offset(Vec2),
    /// Pencil strokes: pointer minus each point.
    PointOffsets(Vec<Vec2>),
}

/// An element grabbed by the selection tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Copy of the element as it was when grabbed.
    pub element: Element,
    pub region: Region,
    pub grab_point: Point,
    pub offset: GrabOffset,
}

impl Selection {
    pub fn new(element: Element, region: Region, grab_point: Point) -> Self {
        let offset = match (&element, element.coords()) {
            (Element::Pencil(pencil), _) => GrabOffset::PointOffsets(
                pencil.points().iter().map(|p| grab_point - *p).collect(),
            ),
            (_, Some(coords)) => GrabOffset::Offset(grab_point - coords.start()),
            (_, None) => GrabOffset::Offset(Vec2::ZERO),
        };
        Self {
            element,
            region,
            grab_point,
            offset,
        }
    }

    /// The grabbed element translated so the grab point follows `pointer`.
    ///
    /// Bounded shapes move rigidly; each pencil point keeps its own offset.
    pub fn moved_element(&self, pointer: Point, options: &RoughOptions) -> Element {
        match (&self.element, &self.offset) {
            (Element::Pencil(pencil), GrabOffset::PointOffsets(offsets)) => {
                let mut moved = pencil.clone();
                moved.set_points(offsets.iter().map(|offset| pointer - *offset).collect());
                Element::Pencil(moved)
            }
            (element, GrabOffset::Offset(offset)) => match element.coords() {
                Some(coords) => element.with_coords(coords.moved_to(pointer - *offset), options),
                None => element.clone(),
            },
            (element, GrabOffset::PointOffsets(_)) => element.clone(),
        }
    }

    /// The grabbed element with the grabbed handle dragged to `pointer`.
    pub fn resized_element(&self, pointer: Point, options: &RoughOptions) -> MuralResult<Element> {
        let coords = self
            .element
            .coords()
            .ok_or_else(|| MuralError::UnrecognizedElementType(self.element.kind().to_string()))?;
        let resized = resized_coordinates(pointer, self.region, coords)?;
        Ok(self.element.with_coords(resized, options))
    }
}
