use egui::{Color32, Pos2};

use crate::drawable::{Drawable, factory};
use crate::export::{self, ExportError};
use crate::history::History;
use crate::render::replay;
use crate::surface::DrawSurface;
use crate::tool::{MarkerWidth, ToolState};

/// Native pad size in pixels. The on-screen canvas and PNG exports both use
/// this square.
pub const CANVAS_SIZE: u32 = 256;

/// What the pad is doing with the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadState {
    /// No gesture in flight; an idle pointer shows a tool preview.
    #[default]
    Idle,
    /// A press started a drawable and moves are extending it.
    Drawing,
}

impl PadState {
    pub fn is_idle(&self) -> bool {
        matches!(self, PadState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, PadState::Drawing)
    }
}

/// One sketchpad session: history, tool selection, gesture state and the
/// transient preview, behind a single mutation surface.
///
/// Every mutation that can change what a replay produces fires the
/// `on_change` callback; hosts repaint from [`Sketchpad::render`] instead of
/// tracking dirty regions themselves.
///
/// Tool selection serializes so hosts can persist it as a preference. The
/// sketch itself does not survive a restart: history, gesture state, the
/// preview and the observer are all per-run and skipped.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Sketchpad {
    #[serde(skip)]
    history: History,
    tools: ToolState,
    #[serde(skip)]
    state: PadState,
    #[serde(skip)]
    preview: Option<Drawable>,
    #[serde(skip)]
    on_change: Option<Box<dyn FnMut()>>,
}

impl Sketchpad {
    pub fn new() -> Self {
        Self {
            history: History::new(),
            tools: ToolState::default(),
            state: PadState::Idle,
            preview: None,
            on_change: None,
        }
    }

    /// Register the single change observer, replacing any previous one.
    pub fn set_on_change(&mut self, callback: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn state(&self) -> PadState {
        self.state
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    /// The committed drawables in z-order, including any still being drawn.
    pub fn drawables(&self) -> &[Drawable] {
        self.history.committed()
    }

    /// Read access to the full history, redo buffer included.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The transient preview under an idle pointer, if one is showing.
    pub fn preview(&self) -> Option<&Drawable> {
        self.preview.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// A press while idle commits a fresh drawable for the selected tool and
    /// enters [`PadState::Drawing`]. Committing discards the redo buffer. A
    /// press mid-gesture is ignored.
    pub fn pointer_pressed(&mut self, pos: Pos2) {
        if self.state.is_drawing() {
            return;
        }
        let drawable = match self.tools.sticker() {
            Some(glyph) => factory::sticker_placement(pos, glyph),
            None => factory::marker_stroke(
                pos,
                self.tools.width().px(),
                self.tools.marker_color(),
            ),
        };
        self.history.commit(drawable);
        self.state = PadState::Drawing;
        self.preview = None;
        self.notify_change();
    }

    /// Mid-gesture a move extends the active drawable; idle it repositions
    /// the tool preview.
    pub fn pointer_moved(&mut self, pos: Pos2) {
        match self.state {
            PadState::Drawing => {
                if let Some(active) = self.history.active_mut() {
                    active.extend(pos);
                }
            }
            PadState::Idle => {
                self.preview = Some(self.tools.preview_at(pos));
            }
        }
        self.notify_change();
    }

    /// End the gesture. The drawable was committed at press time, so this
    /// only returns to idle and restores the preview under the pointer.
    pub fn pointer_released(&mut self, pos: Pos2) {
        if self.state.is_idle() {
            return;
        }
        self.state = PadState::Idle;
        self.preview = Some(self.tools.preview_at(pos));
        self.notify_change();
    }

    /// The pointer left the pad: any gesture ends where it was and the
    /// preview disappears.
    pub fn pointer_left(&mut self) {
        let was_drawing = self.state.is_drawing();
        self.state = PadState::Idle;
        if was_drawing || self.preview.is_some() {
            self.preview = None;
            self.notify_change();
        }
    }

    /// Select a marker width (and marker mode).
    pub fn select_marker(&mut self, width: MarkerWidth) {
        self.tools.select_width(width);
        self.refresh_preview();
    }

    /// Set the marker hue in degrees (and marker mode).
    pub fn select_hue(&mut self, hue: f32) {
        self.tools.select_hue(hue);
        self.refresh_preview();
    }

    /// Select a sticker glyph.
    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.tools.select_sticker(glyph);
        self.refresh_preview();
    }

    /// Deselect the sticker, back to marker mode.
    pub fn clear_sticker(&mut self) {
        self.tools.clear_sticker();
        self.refresh_preview();
    }

    /// Undo the newest drawable. A request mid-gesture finalizes the stroke
    /// first, then removes it.
    pub fn undo(&mut self) -> bool {
        self.finalize_if_drawing();
        let undone = self.history.undo();
        if undone {
            self.notify_change();
        }
        undone
    }

    /// Restore the most recently undone drawable.
    pub fn redo(&mut self) -> bool {
        self.finalize_if_drawing();
        let redone = self.history.redo();
        if redone {
            self.notify_change();
        }
        redone
    }

    /// Wipe the pad: committed drawables and redo buffer both empty. Always
    /// signals a change, even when there was nothing to wipe.
    pub fn clear(&mut self) {
        self.finalize_if_drawing();
        self.history.clear();
        self.notify_change();
    }

    /// Replay the whole scene (committed drawables, then the preview) onto
    /// `surface`.
    pub fn render(&self, background: Option<Color32>, surface: &mut dyn DrawSurface) {
        replay(self.drawables(), self.preview.as_ref(), background, surface);
    }

    /// The drawables an export captures: everything committed except a
    /// stroke still in flight.
    pub fn exportable(&self) -> &[Drawable] {
        let committed = self.history.committed();
        if self.state.is_drawing() {
            &committed[..committed.len().saturating_sub(1)]
        } else {
            committed
        }
    }

    /// Encode the exportable drawables as a [`CANVAS_SIZE`]-square PNG. An
    /// opaque export fills a white background first; otherwise untouched
    /// pixels stay fully transparent.
    pub fn export_png(&self, opaque: bool) -> Result<Vec<u8>, ExportError> {
        let background = opaque.then_some(Color32::WHITE);
        export::render_png(self.exportable(), CANVAS_SIZE, CANVAS_SIZE, background)
    }

    fn finalize_if_drawing(&mut self) {
        if self.state.is_drawing() {
            self.state = PadState::Idle;
        }
    }

    /// Rebuild a visible preview in place after a tool change.
    fn refresh_preview(&mut self) {
        if let Some(Drawable::Preview(preview)) = &self.preview {
            let pos = preview.center();
            self.preview = Some(self.tools.preview_at(pos));
            self.notify_change();
        }
    }

    fn notify_change(&mut self) {
        if let Some(callback) = &mut self.on_change {
            callback();
        }
    }
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sketchpad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketchpad")
            .field("state", &self.state)
            .field("tools", &self.tools)
            .field("history", &self.history)
            .field("preview", &self.preview)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::ToolPreview;
    use egui::pos2;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_change_callback() {
        let count = Rc::new(Cell::new(0u32));
        let mut pad = Sketchpad::new();
        let seen = Rc::clone(&count);
        pad.set_on_change(move || seen.set(seen.get() + 1));

        pad.pointer_pressed(pos2(10.0, 10.0));
        pad.pointer_moved(pos2(12.0, 12.0));
        pad.pointer_released(pos2(12.0, 12.0));
        assert_eq!(count.get(), 3);

        assert!(pad.undo());
        assert_eq!(count.get(), 4);

        // Nothing left to undo, so nothing fires.
        assert!(!pad.undo());
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_double_press_ignored() {
        let mut pad = Sketchpad::new();
        pad.pointer_pressed(pos2(1.0, 1.0));
        pad.pointer_pressed(pos2(9.0, 9.0));

        assert_eq!(pad.drawables().len(), 1);
        assert!(pad.state().is_drawing());
    }

    #[test]
    fn test_export_excludes_active_stroke() {
        let mut pad = Sketchpad::new();
        pad.pointer_pressed(pos2(1.0, 1.0));
        pad.pointer_moved(pos2(2.0, 2.0));
        pad.pointer_released(pos2(2.0, 2.0));

        pad.pointer_pressed(pos2(3.0, 3.0));
        assert_eq!(pad.drawables().len(), 2);
        assert_eq!(pad.exportable().len(), 1);

        pad.pointer_released(pos2(3.0, 3.0));
        assert_eq!(pad.exportable().len(), 2);
    }

    #[test]
    fn test_tool_change_updates_preview() {
        let mut pad = Sketchpad::new();
        pad.pointer_moved(pos2(8.0, 8.0));
        assert!(matches!(
            pad.preview(),
            Some(Drawable::Preview(ToolPreview::SizeRing { .. }))
        ));

        pad.select_sticker("⭐");
        let Some(Drawable::Preview(ToolPreview::GlyphGhost { center, glyph })) = pad.preview()
        else {
            panic!("sticker selection should swap the preview to a glyph ghost");
        };
        assert_eq!(*center, pos2(8.0, 8.0));
        assert_eq!(glyph, "⭐");

        pad.clear_sticker();
        assert!(matches!(
            pad.preview(),
            Some(Drawable::Preview(ToolPreview::SizeRing { .. }))
        ));
    }

    #[test]
    fn test_undo_mid_gesture() {
        let mut pad = Sketchpad::new();
        pad.pointer_pressed(pos2(1.0, 1.0));
        pad.pointer_moved(pos2(5.0, 5.0));

        assert!(pad.undo());
        assert!(pad.state().is_idle());
        assert!(pad.drawables().is_empty());
        assert!(pad.can_redo());
    }
}
