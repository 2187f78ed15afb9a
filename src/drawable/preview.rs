use egui::{Color32, Pos2};

use super::sticker::STICKER_SIZE;
use crate::surface::DrawSurface;

/// The transient tool indicator shown under an idle pointer.
///
/// Previews are rebuilt wholesale on every pointer move or tool change and
/// are never committed to history; they exist only until the next redraw
/// decision.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Marker mode: a ring showing the marker radius, in the marker color.
    SizeRing {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    /// Sticker mode: the glyph ghosted at the pointer position.
    GlyphGhost { center: Pos2, glyph: String },
}

impl ToolPreview {
    /// Where the preview is anchored (the idle pointer position).
    pub fn center(&self) -> Pos2 {
        match self {
            ToolPreview::SizeRing { center, .. } | ToolPreview::GlyphGhost { center, .. } => {
                *center
            }
        }
    }

    pub(crate) fn draw(&self, surface: &mut dyn DrawSurface) {
        match self {
            ToolPreview::SizeRing {
                center,
                radius,
                color,
            } => surface.circle_outline(*center, *radius, *color),
            ToolPreview::GlyphGhost { center, glyph } => {
                surface.glyph(*center, glyph, STICKER_SIZE, Color32::BLACK)
            }
        }
    }
}
