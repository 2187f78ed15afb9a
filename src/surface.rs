use egui::{Color32, Pos2};

/// A surface drawables render onto.
///
/// Two implementations exist: [`DisplayList`] records instructions for the
/// host UI to replay on screen, and [`crate::raster::Pixmap`] rasterizes into
/// RGBA pixels for export and for pixel-level tests.
pub trait DrawSurface {
    /// Wipe the surface. `Some(color)` fills it solid; `None` leaves every
    /// pixel fully transparent.
    fn reset(&mut self, background: Option<Color32>);

    /// Draw an open polyline with round caps. A single point is a round dot
    /// of diameter `thickness`.
    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Draw a one-pixel-wide circle outline.
    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw glyph text centered on `center`, `size` pixels tall.
    fn glyph(&mut self, center: Pos2, text: &str, size: f32, color: Color32);
}

/// A single recorded draw instruction, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        background: Option<Color32>,
    },
    Polyline {
        points: Vec<Pos2>,
        thickness: f32,
        color: Color32,
    },
    CircleOutline {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Glyph {
        center: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Recording surface: the instruction list a host replays to repaint.
///
/// Resetting starts a new list, so a replayed frame always begins with a
/// [`DrawCmd::Clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCmd>,
}

impl DisplayList {
    /// Creates an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded instructions, in draw order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for DisplayList {
    fn reset(&mut self, background: Option<Color32>) {
        self.commands.clear();
        self.commands.push(DrawCmd::Clear { background });
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        self.commands.push(DrawCmd::Polyline {
            points: points.to_vec(),
            thickness,
            color,
        });
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCmd::CircleOutline {
            center,
            radius,
            color,
        });
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        self.commands.push(DrawCmd::Glyph {
            center,
            text: text.to_owned(),
            size,
            color,
        });
    }
}
