use crate::drawable::Drawable;

/// Linear drawing history: the committed drawables plus a redo buffer.
///
/// `committed` order is z-order — later entries draw on top. Undo and redo
/// move single drawables between the two stack tails; committing anything
/// discards the redo buffer, so history is always a straight line, never a
/// tree.
#[derive(Debug, Clone, Default)]
pub struct History {
    committed: Vec<Drawable>,
    redo: Vec<Drawable>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable to the committed sequence. Always succeeds; any
    /// redoable future is discarded.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.redo.clear();
    }

    /// Move the newest committed drawable to the redo buffer. Returns
    /// whether anything moved; an empty history is a silent no-op.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the newest redo entry back onto the committed sequence. Returns
    /// whether anything moved; an empty buffer is a silent no-op.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empty both sequences unconditionally.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
    }

    /// True if there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// True if there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The committed drawables in z-order.
    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    /// The redo buffer, oldest undo first (redo pops from the end).
    pub fn redo_buffer(&self) -> &[Drawable] {
        &self.redo
    }

    /// Mutable access to the committed tail: the drawable still being drawn.
    pub(crate) fn active_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }
}
