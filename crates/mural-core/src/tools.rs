//! Drawing tools.

use crate::error::MuralError;
use crate::shapes::ElementKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Selection,
    Line,
    Rectangle,
    Pencil,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Selection,
        Tool::Line,
        Tool::Rectangle,
        Tool::Pencil,
        Tool::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Selection => "selection",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Pencil => "pencil",
            Tool::Text => "text",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = MuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| MuralError::UnrecognizedElementType(s.to_string()))
    }
}

impl From<ElementKind> for Tool {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Line => Tool::Line,
            ElementKind::Rectangle => Tool::Rectangle,
            ElementKind::Pencil => Tool::Pencil,
            ElementKind::Text => Tool::Text,
        }
    }
}
