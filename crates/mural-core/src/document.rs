//! Ordered element collection with structural sharing.

use crate::rough::RoughOptions;
use crate::shapes::{Element, ElementId};
use std::sync::Arc;
use thiserror::Error;

/// Reasons a loaded element list cannot become a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Element at index {index} has id {id}")]
    IdMismatch { index: usize, id: ElementId },
    #[error("Pencil {0} has no points")]
    EmptyPencil(ElementId),
}

/// The elements of one snapshot, in creation (and drawing) order.
///
/// Each element sits behind an `Arc`, so cloning a document to produce the
/// next snapshot copies pointers only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Arc<Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Id the next created element will receive.
    pub fn next_id(&self) -> ElementId {
        self.elements.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id).map(Arc::as_ref)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Element> + ExactSizeIterator {
        self.elements.iter().map(Arc::as_ref)
    }

    /// Append an element. Its id must be [`Document::next_id`].
    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(Arc::new(element));
    }

    /// Replace the element at `id`. Unknown ids are ignored.
    pub fn replace(&mut self, id: ElementId, element: Element) -> bool {
        match self.elements.get_mut(id) {
            Some(slot) => {
                *slot = Arc::new(element);
                true
            }
            None => {
                log::warn!("Ignoring update for unknown element {id}");
                false
            }
        }
    }

    /// Whether the element at `id` is shared with `other` (not copied).
    pub fn shares_element(&self, other: &Document, id: ElementId) -> bool {
        match (self.elements.get(id), other.elements.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Serialize the elements as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let elements: Vec<&Element> = self.iter().collect();
        serde_json::to_string_pretty(&elements)
    }

    /// Load elements from a JSON array and regenerate their primitives.
    pub fn from_json(json: &str, options: &RoughOptions) -> Result<Self, DocumentError> {
        let mut elements: Vec<Element> = serde_json::from_str(json)?;
        for element in &mut elements {
            element.rebuild_primitive(options);
        }
        Self::try_from(elements)
    }
}

impl TryFrom<Vec<Element>> for Document {
    type Error = DocumentError;

    /// Ids must match positions, and every pencil needs a point.
    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        for (index, element) in elements.iter().enumerate() {
            if element.id() != index {
                return Err(DocumentError::IdMismatch {
                    index,
                    id: element.id(),
                });
            }
            if matches!(element, Element::Pencil(pencil) if pencil.points().is_empty()) {
                return Err(DocumentError::EmptyPencil(index));
            }
        }
        Ok(Self {
            elements: elements.into_iter().map(Arc::new).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{create_element, ElementKind};

    fn sample() -> Document {
        Document::try_from(vec![
            create_element(0, 0.0, 0.0, 10.0, 10.0, ElementKind::Rectangle),
            create_element(1, 5.0, 5.0, 20.0, 0.0, ElementKind::Line),
        ])
        .unwrap()
    }

    #[test]
    fn test_next_id_is_len() {
        let doc = sample();
        assert_eq!(doc.next_id(), 2);
        assert_eq!(doc.get(1).map(Element::id), Some(1));
    }

    #[test]
    fn test_replace_copies_only_target() {
        let before = sample();
        let mut after = before.clone();
        let moved = create_element(1, 6.0, 6.0, 21.0, 1.0, ElementKind::Line);
        assert!(after.replace(1, moved));
        assert!(after.shares_element(&before, 0));
        assert!(!after.shares_element(&before, 1));
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut doc = sample();
        let stray = create_element(9, 0.0, 0.0, 1.0, 1.0, ElementKind::Line);
        assert!(!doc.replace(9, stray));
        assert_eq!(doc, sample());
    }

    #[test]
    fn test_json_round_trip() {
        let doc = sample();
        let json = doc.to_json().unwrap();
        let restored = Document::from_json(&json, &RoughOptions::default()).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn test_rejects_id_out_of_position() {
        let json = r#"[
            {"type": "rectangle", "id": 0, "x1": 0, "y1": 0, "x2": 10, "y2": 10},
            {"type": "rectangle", "id": 0, "x1": 100, "y1": 100, "x2": 120, "y2": 120}
        ]"#;
        let result = Document::from_json(json, &RoughOptions::default());
        assert!(matches!(
            result,
            Err(DocumentError::IdMismatch { index: 1, id: 0 })
        ));

        let shifted = vec![create_element(1, 0.0, 0.0, 1.0, 1.0, ElementKind::Line)];
        assert!(matches!(
            Document::try_from(shifted),
            Err(DocumentError::IdMismatch { index: 0, id: 1 })
        ));
    }

    #[test]
    fn test_rejects_empty_pencil() {
        let json = r#"[
            {"type": "line", "id": 0, "x1": 0, "y1": 0, "x2": 10, "y2": 10},
            {"type": "pencil", "id": 1, "points": []}
        ]"#;
        let result = Document::from_json(json, &RoughOptions::default());
        assert!(matches!(result, Err(DocumentError::EmptyPencil(1))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = Document::from_json("[{", &RoughOptions::default());
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }
}
