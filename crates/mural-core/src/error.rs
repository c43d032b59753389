//! Errors raised by element and gesture operations.

use thiserror::Error;

/// Errors for tool/variant mismatches.
///
/// These indicate an integration bug rather than a user mistake: the gesture
/// that produced one is aborted and the canvas returns to idle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MuralError {
    #[error("Unrecognized element type: {0}")]
    UnrecognizedElementType(String),
    #[error("Invalid resize handle: {0}")]
    InvalidResizeHandle(String),
}

/// Result type for element and gesture operations.
pub type MuralResult<T> = Result<T, MuralError>;
