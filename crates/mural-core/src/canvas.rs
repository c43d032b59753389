//! Pointer interaction state machine.
//!
//! The [`Canvas`] owns the undo history and turns pointer, keyboard and tool
//! input into element creation, move, resize and text editing. Every gesture
//! records exactly one history entry: creation gestures append on
//! pointer-down, selection gestures append on their first real change, and
//! every later frame of the same gesture overwrites that entry.

use crate::config::EngineConfig;
use crate::document::Document;
use crate::error::{MuralError, MuralResult};
use crate::geometry::Coords;
use crate::hit_test::element_at;
use crate::history::History;
use crate::input::{command_for_key, KeyCommand, Modifiers, PointerEvent};
use crate::selection::{cursor_for_region, CursorHint, Selection};
use crate::shapes::{Element, ElementFactory, ElementId, ElementKind, MonospaceMeasure, TextMeasure};
use crate::tools::Tool;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What the current gesture is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Action {
    /// No gesture in progress.
    #[default]
    None,
    /// Creating a line, rectangle or pencil stroke.
    Drawing,
    /// Dragging a selected element.
    Moving,
    /// Dragging a handle of a selected element.
    Resizing,
    /// Waiting for the text editing affordance to blur.
    Writing,
}

/// The interactive whiteboard engine.
#[derive(Debug)]
pub struct Canvas<M: TextMeasure = MonospaceMeasure> {
    history: History<Document>,
    config: EngineConfig,
    factory: ElementFactory,
    measure: M,
    tool: Tool,
    action: Action,
    /// Element grabbed by the selection tool.
    selection: Option<Selection>,
    /// Element being drawn or written.
    active: Option<ElementId>,
    /// Whether the current gesture already appended its history entry.
    gesture_committed: bool,
}

impl Default for Canvas<MonospaceMeasure> {
    fn default() -> Self {
        Self::new(MonospaceMeasure::default())
    }
}

impl<M: TextMeasure> Canvas<M> {
    /// Create an empty canvas with the default configuration.
    pub fn new(measure: M) -> Self {
        Self::with_config(EngineConfig::default(), measure)
    }

    pub fn with_config(config: EngineConfig, measure: M) -> Self {
        Self::with_document(Document::new(), config, measure)
    }

    /// Start from an existing document as the initial snapshot.
    pub fn with_document(document: Document, config: EngineConfig, measure: M) -> Self {
        Self {
            history: History::new(document),
            factory: ElementFactory::new(config.rough),
            config,
            measure,
            tool: Tool::default(),
            action: Action::None,
            selection: None,
            active: None,
            gesture_committed: false,
        }
    }

    /// The current snapshot.
    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Id of the text element being edited. Renderers skip it so the editing
    /// affordance can draw it instead.
    pub fn editing_id(&self) -> Option<ElementId> {
        match self.action {
            Action::Writing => self.active,
            _ => None,
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            log::debug!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool;
        }
    }

    /// Select a tool by name (`selection`, `line`, `rectangle`, `pencil` or `text`).
    pub fn set_tool_named(&mut self, name: &str) -> MuralResult<()> {
        let tool = name.parse()?;
        self.set_tool(tool);
        Ok(())
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> MuralResult<()> {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => self.pointer_move(point),
            PointerEvent::Up(point) => self.pointer_up(point),
            PointerEvent::Blur(text) => self.blur(text),
        }
    }

    /// Handle a key press. Returns true when it mapped to a command.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> bool {
        match command_for_key(key, modifiers) {
            Some(KeyCommand::Undo) => {
                self.undo();
                true
            }
            Some(KeyCommand::Redo) => {
                self.redo();
                true
            }
            Some(KeyCommand::Cancel) => {
                self.cancel();
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&mut self, point: Point) -> MuralResult<()> {
        match self.action {
            Action::None => {}
            Action::Writing => {
                log::trace!("Pointer down ignored while writing");
                return Ok(());
            }
            other => {
                log::warn!("Pointer down ignored during {other:?}");
                return Ok(());
            }
        }

        if self.tool == Tool::Selection {
            let hit = element_at(point, self.document().iter(), &self.config.hit)
                .map(|hit| (hit.element.clone(), hit.region));
            if let Some((element, region)) = hit {
                self.action = if region.is_handle() {
                    Action::Resizing
                } else {
                    Action::Moving
                };
                log::debug!(
                    "Grabbed element {} at {} ({:?})",
                    element.id(),
                    region,
                    self.action
                );
                self.selection = Some(Selection::new(element, region, point));
                self.gesture_committed = false;
            }
            return Ok(());
        }

        let kind = ElementKind::try_from(self.tool)?;
        let mut document = self.document().clone();
        let id = document.next_id();
        let element = self
            .factory
            .create(id, point.x, point.y, point.x, point.y, kind);
        document.push(element);
        self.history.commit(document, false);
        self.gesture_committed = true;
        self.active = Some(id);
        self.action = if kind == ElementKind::Text {
            Action::Writing
        } else {
            Action::Drawing
        };
        log::debug!("Created {kind} {id} ({:?})", self.action);
        Ok(())
    }

    pub fn pointer_move(&mut self, point: Point) -> MuralResult<()> {
        match self.action {
            Action::Drawing => {
                let Some(element) = self.active_element() else {
                    return Ok(());
                };
                let updated = match element {
                    Element::Pencil(pencil) => {
                        let mut pencil = pencil.clone();
                        pencil.add_point(point);
                        Element::Pencil(pencil)
                    }
                    other => match other.coords() {
                        Some(Coords { x1, y1, .. }) => {
                            other.with_coords(Coords::new(x1, y1, point.x, point.y), &self.config.rough)
                        }
                        None => return Ok(()),
                    },
                };
                self.commit_element(updated);
            }
            Action::Moving => {
                if let Some(selection) = &self.selection {
                    let moved = selection.moved_element(point, &self.config.rough);
                    self.commit_element(moved);
                }
            }
            Action::Resizing => {
                if let Some(selection) = &self.selection {
                    match selection.resized_element(point, &self.config.rough) {
                        Ok(resized) => self.commit_element(resized),
                        Err(err) => return Err(self.fail(err)),
                    }
                }
            }
            Action::None | Action::Writing => {}
        }
        Ok(())
    }

    pub fn pointer_up(&mut self, point: Point) -> MuralResult<()> {
        match self.action {
            Action::Drawing => {
                if let Some(element) = self.active_element() {
                    let normalized = element.normalized(&self.config.rough);
                    self.commit_element(normalized);
                }
                self.finish();
            }
            Action::Resizing => {
                let current = self
                    .selection
                    .as_ref()
                    .and_then(|selection| self.document().get(selection.element.id()));
                if let Some(element) = current {
                    let normalized = element.normalized(&self.config.rough);
                    self.commit_element(normalized);
                }
                self.finish();
            }
            Action::Moving => {
                let click_to_edit = self.selection.as_ref().and_then(|selection| {
                    (selection.element.kind() == ElementKind::Text && selection.grab_point == point)
                        .then(|| selection.element.id())
                });
                match click_to_edit {
                    Some(id) => {
                        log::debug!("Editing text {id}");
                        self.selection = None;
                        self.active = Some(id);
                        self.action = Action::Writing;
                    }
                    None => self.finish(),
                }
            }
            Action::None | Action::Writing => {}
        }
        Ok(())
    }

    /// The editing affordance lost focus: store `text` in the element being
    /// written and size its box from the measured width and the line height.
    pub fn blur(&mut self, text: String) -> MuralResult<()> {
        if self.action != Action::Writing {
            log::warn!("Ignoring text blur outside of writing");
            return Ok(());
        }
        let updated = match self.active_element() {
            Some(Element::Text(element)) => {
                let mut element = element.clone();
                let width = self.measure.measure_text(&text, &self.config.text.font);
                element.set_text(text, width, self.config.text.line_height);
                Element::Text(element)
            }
            Some(other) => {
                let err = MuralError::UnrecognizedElementType(other.kind().to_string());
                return Err(self.fail(err));
            }
            None => {
                log::warn!("Text element being written no longer exists");
                self.abort();
                return Ok(());
            }
        };
        self.commit_element(updated);
        self.finish();
        Ok(())
    }

    /// Step back in history. Ignored while a gesture is in progress.
    pub fn undo(&mut self) -> bool {
        if self.action != Action::None {
            log::debug!("Undo ignored during {:?}", self.action);
            return false;
        }
        let done = self.history.undo();
        if done {
            log::debug!("Undo to index {}", self.history.index());
        }
        done
    }

    /// Step forward in history. Ignored while a gesture is in progress.
    pub fn redo(&mut self) -> bool {
        if self.action != Action::None {
            log::debug!("Redo ignored during {:?}", self.action);
            return false;
        }
        let done = self.history.redo();
        if done {
            log::debug!("Redo to index {}", self.history.index());
        }
        done
    }

    /// Abandon the current gesture, removing any history entry it appended.
    pub fn cancel(&mut self) {
        if self.action != Action::None {
            log::warn!("Cancelling {:?} gesture", self.action);
            self.abort();
        }
    }

    /// Cancel any gesture and append an empty document.
    pub fn clear(&mut self) {
        self.cancel();
        self.history.commit(Document::new(), false);
        log::debug!("Cleared canvas (history length {})", self.history.len());
    }

    /// Cursor to show with the pointer at `point`.
    pub fn hover(&self, point: Point) -> CursorHint {
        if self.tool != Tool::Selection {
            return CursorHint::Default;
        }
        let region = element_at(point, self.document().iter(), &self.config.hit).map(|hit| hit.region);
        cursor_for_region(region)
    }

    fn active_element(&self) -> Option<&Element> {
        self.active.and_then(|id| self.document().get(id))
    }

    /// Write `element` into a new snapshot. The first change of a gesture
    /// appends; later changes overwrite. Unchanged elements are skipped.
    fn commit_element(&mut self, element: Element) {
        let id = element.id();
        if self.document().get(id) == Some(&element) {
            return;
        }
        let mut document = self.document().clone();
        if !document.replace(id, element) {
            return;
        }
        let overwrite = self.gesture_committed;
        self.history.commit(document, overwrite);
        self.gesture_committed = true;
        if overwrite {
            log::trace!("Updated element {id}");
        } else {
            log::debug!(
                "Committed element {id} (history length {})",
                self.history.len()
            );
        }
    }

    fn finish(&mut self) {
        log::debug!("{:?} finished", self.action);
        self.reset();
    }

    fn fail(&mut self, err: MuralError) -> MuralError {
        log::warn!("Aborting {:?} gesture: {err}", self.action);
        self.abort();
        err
    }

    fn abort(&mut self) {
        if self.gesture_committed {
            self.history.rollback();
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.action = Action::None;
        self.selection = None;
        self.active = None;
        self.gesture_committed = false;
    }
}
