//! Pointer and keyboard input.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer events in canvas-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    /// The text editing affordance lost focus with the given content.
    Blur(String),
}

/// Commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCommand {
    Undo,
    Redo,
    Cancel,
}

/// Map a key press to a command.
///
/// Ctrl/Cmd+Z undoes, Ctrl/Cmd+Shift+Z redoes, Escape cancels the current
/// gesture. Key names are matched case-insensitively.
pub fn command_for_key(key: &str, modifiers: Modifiers) -> Option<KeyCommand> {
    if key.eq_ignore_ascii_case("escape") {
        return Some(KeyCommand::Cancel);
    }
    if !modifiers.command() || !key.eq_ignore_ascii_case("z") {
        return None;
    }
    if modifiers.shift {
        Some(KeyCommand::Redo)
    } else {
        Some(KeyCommand::Undo)
    }
}
