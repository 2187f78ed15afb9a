use crate::app::{PRESET_STICKERS, SketchpadApp};
use crate::tool::MarkerWidth;

/// The toolbar: marker widths, hue, sticker choices and the history actions.
pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.label("Marker");
            ui.horizontal(|ui| {
                for (width, label) in [(MarkerWidth::Thin, "Thin"), (MarkerWidth::Thick, "Thick")]
                {
                    let is_selected = !app.pad().tools().is_sticker_mode()
                        && app.pad().tools().width() == width;
                    if ui.selectable_label(is_selected, label).clicked() {
                        log::info!("Marker selected from UI: {}", label);
                        app.pad_mut().select_marker(width);
                    }
                }
            });

            let mut hue = app.pad().tools().hue();
            if ui
                .add(egui::Slider::new(&mut hue, 0.0..=360.0).text("Hue"))
                .changed()
            {
                app.pad_mut().select_hue(hue);
            }

            ui.separator();

            ui.label("Stickers");
            // Collect glyphs first to avoid borrowing issues
            let glyphs: Vec<String> = PRESET_STICKERS
                .iter()
                .map(|&glyph| glyph.to_owned())
                .chain(app.custom_stickers().iter().cloned())
                .collect();
            ui.horizontal_wrapped(|ui| {
                for glyph in &glyphs {
                    let is_selected = app.pad().tools().sticker() == Some(glyph.as_str());
                    if ui.selectable_label(is_selected, glyph.as_str()).clicked() {
                        if is_selected {
                            app.pad_mut().clear_sticker();
                        } else {
                            log::info!("Sticker selected from UI: {}", glyph);
                            app.pad_mut().select_sticker(glyph.clone());
                        }
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.text_edit_singleline(app.sticker_draft_mut());
                let ready = !app.sticker_draft().trim().is_empty();
                if ui.add_enabled(ready, egui::Button::new("Add")).clicked() {
                    app.add_custom_sticker();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.pad().can_undo();
                let can_redo = app.pad().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.pad_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.pad_mut().redo();
                }
            });
            ui.horizontal(|ui| {
                let has_content = app.pad().can_undo() || app.pad().can_redo();
                if ui
                    .add_enabled(has_content, egui::Button::new("Clear"))
                    .clicked()
                {
                    app.pad_mut().clear();
                }
                if ui.button("Export PNG").clicked() {
                    app.export_png();
                }
            });
            ui.checkbox(app.export_opaque_mut(), "Opaque background");

            ui.separator();

            let history = app.pad().history();
            ui.label(format!(
                "{} drawn, {} redoable",
                history.committed().len(),
                history.redo_buffer().len()
            ));
        });
}
