use egui::ecolor::Hsva;
use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::drawable::{Drawable, factory};

/// Marker line widths offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerWidth {
    /// 2 px line.
    #[default]
    Thin,
    /// 6 px line.
    Thick,
}

impl MarkerWidth {
    /// Line thickness in pixels.
    pub fn px(self) -> f32 {
        match self {
            MarkerWidth::Thin => 2.0,
            MarkerWidth::Thick => 6.0,
        }
    }
}

/// The currently selected tool: marker width and hue, or a sticker glyph.
///
/// Sticker and marker mode are mutually exclusive — picking a width or hue
/// returns to marker mode, picking a sticker leaves it. The hue is
/// continuous degrees; nothing here validates the range, the sliders in the
/// host constrain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    width: MarkerWidth,
    hue: f32,
    sticker: Option<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            width: MarkerWidth::Thin,
            hue: 0.0,
            sticker: None,
        }
    }
}

impl ToolState {
    /// The selected marker width.
    pub fn width(&self) -> MarkerWidth {
        self.width
    }

    /// The marker hue in degrees.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// The selected sticker glyph, if any.
    pub fn sticker(&self) -> Option<&str> {
        self.sticker.as_deref()
    }

    /// Whether the next gesture places a sticker instead of a stroke.
    pub fn is_sticker_mode(&self) -> bool {
        self.sticker.is_some()
    }

    /// Pick a marker width. Switches to marker mode.
    pub fn select_width(&mut self, width: MarkerWidth) {
        self.width = width;
        self.sticker = None;
    }

    /// Set the marker hue in degrees. Switches to marker mode.
    pub fn select_hue(&mut self, hue: f32) {
        self.hue = hue;
        self.sticker = None;
    }

    /// Pick a sticker glyph. Switches to sticker mode; marker settings keep
    /// their values for when the marker is reselected.
    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.sticker = Some(glyph.into());
    }

    /// Deselect the sticker, back to marker mode.
    pub fn clear_sticker(&mut self) {
        self.sticker = None;
    }

    /// Marker ink: the hue at full saturation and value.
    pub fn marker_color(&self) -> Color32 {
        Color32::from(Hsva::new(self.hue / 360.0, 1.0, 1.0, 1.0))
    }

    /// The preview drawable for an idle pointer at `pos`: a glyph ghost in
    /// sticker mode, otherwise a ring the size of the marker radius.
    pub fn preview_at(&self, pos: Pos2) -> Drawable {
        match &self.sticker {
            Some(glyph) => factory::glyph_ghost(pos, glyph.clone()),
            None => factory::size_ring(pos, self.width.px() / 2.0, self.marker_color()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::ToolPreview;
    use egui::pos2;

    #[test]
    fn test_mode_exclusivity() {
        let mut tools = ToolState::default();
        assert!(!tools.is_sticker_mode());

        tools.select_sticker("⭐");
        assert!(tools.is_sticker_mode());

        tools.select_width(MarkerWidth::Thick);
        assert!(!tools.is_sticker_mode());
        assert_eq!(tools.width(), MarkerWidth::Thick);

        tools.select_sticker("🎉");
        tools.select_hue(200.0);
        assert!(!tools.is_sticker_mode());
        assert_eq!(tools.hue(), 200.0);
    }

    #[test]
    fn test_hue_zero_is_red() {
        let tools = ToolState::default();
        assert_eq!(tools.marker_color(), Color32::RED);
    }

    #[test]
    fn test_preview_matches_mode() {
        let mut tools = ToolState::default();
        tools.select_width(MarkerWidth::Thick);

        let Drawable::Preview(ToolPreview::SizeRing { radius, .. }) =
            tools.preview_at(pos2(10.0, 10.0))
        else {
            panic!("marker mode should preview a size ring");
        };
        assert_eq!(radius, MarkerWidth::Thick.px() / 2.0);

        tools.select_sticker("😀");
        let Drawable::Preview(ToolPreview::GlyphGhost { glyph, center }) =
            tools.preview_at(pos2(3.0, 4.0))
        else {
            panic!("sticker mode should preview a glyph ghost");
        };
        assert_eq!(glyph, "😀");
        assert_eq!(center, pos2(3.0, 4.0));
    }
}
