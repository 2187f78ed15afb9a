use egui::Pos2;

mod marker;
mod preview;
mod sticker;

pub use marker::MarkerStroke;
pub use preview::ToolPreview;
pub use sticker::{STICKER_SIZE, StickerPlacement};

use crate::surface::DrawSurface;

/// A single unit of visual content on the pad.
///
/// Committed history holds markers and stickers; previews only ever live in
/// the session's preview slot. Dispatch is a plain match so each variant can
/// decide what following the pointer means — previews ignore it entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Marker(MarkerStroke),
    Sticker(StickerPlacement),
    Preview(ToolPreview),
}

impl Drawable {
    /// Render onto the given surface.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match self {
            Drawable::Marker(stroke) => stroke.draw(surface),
            Drawable::Sticker(placement) => placement.draw(surface),
            Drawable::Preview(preview) => preview.draw(surface),
        }
    }

    /// Follow the pointer while this drawable is active: a marker grows by a
    /// point, a sticker repositions, a preview ignores the call.
    pub fn extend(&mut self, pos: Pos2) {
        match self {
            Drawable::Marker(stroke) => stroke.add_point(pos),
            Drawable::Sticker(placement) => placement.move_to(pos),
            Drawable::Preview(_) => {}
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Drawable::Preview(_))
    }
}

/// Factory functions for creating drawables.
pub mod factory {
    use super::*;
    use egui::Color32;

    /// A new marker stroke starting at `origin`.
    ///
    /// Thickness and color are taken as-is; the caller (the toolbar)
    /// constrains their ranges, out-of-range values are merely odd to look
    /// at.
    pub fn marker_stroke(origin: Pos2, thickness: f32, color: Color32) -> Drawable {
        Drawable::Marker(MarkerStroke::new(origin, thickness, color))
    }

    /// A new sticker placement centered at `pos`.
    pub fn sticker_placement(pos: Pos2, glyph: impl Into<String>) -> Drawable {
        Drawable::Sticker(StickerPlacement::new(pos, glyph))
    }

    /// A marker-size indicator ring.
    pub fn size_ring(center: Pos2, radius: f32, color: Color32) -> Drawable {
        Drawable::Preview(ToolPreview::SizeRing {
            center,
            radius,
            color,
        })
    }

    /// A sticker ghost following the idle pointer.
    pub fn glyph_ghost(center: Pos2, glyph: impl Into<String>) -> Drawable {
        Drawable::Preview(ToolPreview::GlyphGhost {
            center,
            glyph: glyph.into(),
        })
    }
}
