use egui::{Color32, Pos2};

use crate::surface::DrawSurface;

/// A freehand marker stroke: an append-only point list with a fixed
/// thickness and color.
///
/// The first point is where the pointer went down; [`MarkerStroke::add_point`]
/// grows the stroke while the gesture lasts. Once the gesture ends nothing
/// mutates it again, so a stroke with a single point is valid and renders as
/// a round dot.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl MarkerStroke {
    pub(crate) fn new(origin: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![origin],
            thickness,
            color,
        }
    }

    /// Append the next pointer position.
    pub(crate) fn add_point(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    /// The points that make up this stroke.
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// The stroke thickness in pixels.
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// The stroke color.
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub(crate) fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.polyline(&self.points, self.thickness, self.color);
    }
}
