use egui::{Color32, Sense, Stroke, vec2};

use crate::app::SketchpadApp;
use crate::input::InputEvent;
use crate::render::paint_display_list;
use crate::session::CANVAS_SIZE;

/// The pad itself: a fixed-size canvas that turns egui pointer state into
/// [`InputEvent`]s and replays the recorded scene.
pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Sticker Sketchpad");

            let side = CANVAS_SIZE as f32;
            let (response, painter) =
                ui.allocate_painter(vec2(side, side), Sense::drag().union(Sense::hover()));
            let rect = response.rect;
            let to_pad = |pos: egui::Pos2| pos - rect.min.to_vec2();

            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.pad_mut()
                        .apply(InputEvent::PointerPressed { pos: to_pad(pos) });
                }
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if rect.contains(pos) {
                        app.pad_mut()
                            .apply(InputEvent::PointerMoved { pos: to_pad(pos) });
                    } else {
                        // Dragging off the pad ends the stroke where it left.
                        app.pad_mut().apply(InputEvent::PointerLeft);
                    }
                }
            } else if response.drag_stopped() {
                match response.interact_pointer_pos() {
                    Some(pos) if rect.contains(pos) => {
                        app.pad_mut()
                            .apply(InputEvent::PointerReleased { pos: to_pad(pos) });
                    }
                    _ => app.pad_mut().apply(InputEvent::PointerLeft),
                }
            } else if let Some(pos) = response.hover_pos() {
                app.pad_mut()
                    .apply(InputEvent::PointerMoved { pos: to_pad(pos) });
            } else {
                app.pad_mut().apply(InputEvent::PointerLeft);
            }

            let painter = painter.with_clip_rect(rect);
            paint_display_list(&painter, &rect, app.scene());
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::DARK_GRAY));
        });
    });
}
