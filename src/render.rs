use egui::{Align2, Color32, FontId, Painter, Rect, Shape, Stroke};

use crate::drawable::Drawable;
use crate::surface::{DisplayList, DrawCmd, DrawSurface};

/// Repaint the whole scene from scratch: wipe the surface, then replay every
/// committed drawable in order, then the transient preview (if any) on top.
///
/// This is the only way pixels are produced — there is no incremental path,
/// so surface contents can never drift from the model.
pub fn replay(
    drawables: &[Drawable],
    preview: Option<&Drawable>,
    background: Option<Color32>,
    surface: &mut dyn DrawSurface,
) {
    surface.reset(background);
    for drawable in drawables {
        drawable.render(surface);
    }
    if let Some(preview) = preview {
        preview.render(surface);
    }
}

/// Paint a recorded display list into an egui region. `rect` supplies the
/// translation from pad coordinates (origin at the pad's top-left) to screen
/// coordinates.
pub fn paint_display_list(painter: &Painter, rect: &Rect, list: &DisplayList) {
    let origin = rect.min.to_vec2();
    for command in list.commands() {
        match command {
            DrawCmd::Clear { background } => {
                if let Some(color) = background {
                    painter.rect_filled(*rect, 0.0, *color);
                }
            }
            DrawCmd::Polyline {
                points,
                thickness,
                color,
            } => match points.as_slice() {
                [] => {}
                [point] => {
                    painter.circle_filled(*point + origin, thickness / 2.0, *color);
                }
                _ => {
                    let screen = points.iter().map(|p| *p + origin).collect();
                    painter.add(Shape::line(screen, Stroke::new(*thickness, *color)));
                }
            },
            DrawCmd::CircleOutline {
                center,
                radius,
                color,
            } => {
                painter.circle_stroke(*center + origin, *radius, Stroke::new(1.0, *color));
            }
            DrawCmd::Glyph {
                center,
                text,
                size,
                color,
            } => {
                painter.text(
                    *center + origin,
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(*size),
                    *color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::factory;
    use egui::pos2;

    #[test]
    fn test_replay_clears_first() {
        let stroke = factory::marker_stroke(pos2(1.0, 1.0), 2.0, Color32::RED);
        let mut list = DisplayList::new();
        replay(&[stroke], None, Some(Color32::WHITE), &mut list);

        assert_eq!(list.len(), 2);
        assert_eq!(
            list.commands()[0],
            DrawCmd::Clear {
                background: Some(Color32::WHITE)
            }
        );
    }

    #[test]
    fn test_preview_renders_on_top() {
        let stroke = factory::marker_stroke(pos2(1.0, 1.0), 2.0, Color32::RED);
        let ring = factory::size_ring(pos2(5.0, 5.0), 3.0, Color32::RED);

        let mut list = DisplayList::new();
        replay(&[stroke], Some(&ring), None, &mut list);

        assert!(matches!(
            list.commands().last(),
            Some(DrawCmd::CircleOutline { .. })
        ));
    }

    #[test]
    fn test_empty_replay() {
        let mut list = DisplayList::new();
        replay(&[], None, None, &mut list);
        assert_eq!(list.commands(), &[DrawCmd::Clear { background: None }]);
    }
}
