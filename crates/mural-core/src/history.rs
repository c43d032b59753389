//! Linear undo/redo log of whole-document snapshots.

/// A timeline of snapshots with a cursor.
///
/// The log is never empty: it starts with the initial snapshot at index 0.
/// Appending drops every snapshot after the cursor, so redo is lost as soon
/// as a new change is made.
#[derive(Debug, Clone)]
pub struct History<T: Clone> {
    states: Vec<T>,
    index: usize,
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            states: vec![initial],
            index: 0,
        }
    }

    /// Record `state`.
    ///
    /// With `overwrite` the current snapshot is replaced in place and the
    /// length is unchanged. Otherwise later snapshots are discarded, `state`
    /// is appended and becomes current.
    pub fn commit(&mut self, state: T, overwrite: bool) {
        if overwrite {
            self.states[self.index] = state;
        } else {
            self.states.truncate(self.index + 1);
            self.states.push(state);
            self.index += 1;
        }
    }

    /// Step back. Returns false at the initial snapshot.
    pub fn undo(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward. Returns false at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.index + 1 < self.states.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Discard the current snapshot and everything after it, stepping back
    /// one entry. The initial snapshot is never discarded.
    pub fn rollback(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.states.truncate(self.index);
        self.index -= 1;
        true
    }

    pub fn current(&self) -> &T {
        &self.states[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.states.len()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
