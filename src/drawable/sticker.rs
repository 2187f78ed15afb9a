use egui::{Color32, Pos2};

use crate::surface::DrawSurface;

/// Height of a placed sticker glyph, in pixels.
pub const STICKER_SIZE: f32 = 24.0;

/// An emoji (or short text) sticker stamped onto the canvas.
///
/// The glyph is fixed at creation; the position follows the pointer while the
/// placement is active and freezes when the gesture ends.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    glyph: String,
    pos: Pos2,
}

impl StickerPlacement {
    pub(crate) fn new(pos: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            pos,
        }
    }

    /// Reposition while the placement is still active.
    pub(crate) fn move_to(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    /// The glyph text.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Where the sticker sits (its center).
    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub(crate) fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.glyph(self.pos, &self.glyph, STICKER_SIZE, Color32::BLACK);
    }
}
