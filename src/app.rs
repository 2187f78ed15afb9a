use std::cell::Cell;
use std::rc::Rc;

use egui::Color32;

use crate::panels;
use crate::session::Sketchpad;
use crate::surface::DisplayList;

/// Sticker glyphs the toolbar always offers.
pub const PRESET_STICKERS: &[&str] = &["😀", "🎉", "⭐"];

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchpadApp {
    pad: Sketchpad,
    custom_stickers: Vec<String>,
    sticker_draft: String,
    export_opaque: bool,
    // The recorded scene and its staleness flag are per-run; the session
    // pokes the flag through its change callback.
    #[serde(skip)]
    scene: DisplayList,
    #[serde(skip)]
    scene_stale: Rc<Cell<bool>>,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self {
            pad: Sketchpad::new(),
            custom_stickers: Vec::new(),
            sticker_draft: String::new(),
            export_opaque: true,
            scene: DisplayList::new(),
            scene_stale: Rc::new(Cell::new(true)),
        }
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.wire_change_signal();
        app
    }

    pub fn pad(&self) -> &Sketchpad {
        &self.pad
    }

    pub fn pad_mut(&mut self) -> &mut Sketchpad {
        &mut self.pad
    }

    /// The scene instruction list, replayed fresh if the session changed
    /// since the last frame.
    pub(crate) fn scene(&mut self) -> &DisplayList {
        if self.scene_stale.get() {
            self.pad.render(Some(Color32::WHITE), &mut self.scene);
            self.scene_stale.set(false);
        }
        &self.scene
    }

    pub(crate) fn custom_stickers(&self) -> &[String] {
        &self.custom_stickers
    }

    pub(crate) fn sticker_draft(&self) -> &str {
        &self.sticker_draft
    }

    pub(crate) fn sticker_draft_mut(&mut self) -> &mut String {
        &mut self.sticker_draft
    }

    pub(crate) fn export_opaque_mut(&mut self) -> &mut bool {
        &mut self.export_opaque
    }

    /// Promote the draft text to a sticker choice and select it.
    pub(crate) fn add_custom_sticker(&mut self) {
        let glyph = self.sticker_draft.trim().to_owned();
        if glyph.is_empty() {
            log::warn!("Ignoring empty custom sticker text");
            return;
        }
        log::info!("Custom sticker added: {}", glyph);
        if !self.custom_stickers.contains(&glyph) {
            self.custom_stickers.push(glyph.clone());
        }
        self.pad.select_sticker(glyph);
        self.sticker_draft.clear();
    }

    /// Export the sketch and hand the PNG bytes to the platform save path.
    pub(crate) fn export_png(&mut self) {
        match self.pad.export_png(self.export_opaque) {
            Ok(bytes) => file_ops::save_png(&bytes),
            Err(err) => log::error!("PNG export failed: {}", err),
        }
    }

    fn wire_change_signal(&mut self) {
        let stale = Rc::clone(&self.scene_stale);
        self.pad.set_on_change(move || stale.set(true));
        self.scene_stale.set(true);
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file_ops {
    /// Ask where to save, then write the PNG bytes there.
    pub fn save_png(bytes: &[u8]) {
        let dialog = rfd::FileDialog::new()
            .set_title("Export PNG")
            .set_file_name("sketchpad.png")
            .add_filter("PNG Image", &["png"]);

        if let Some(path) = dialog.save_file() {
            match std::fs::write(&path, bytes) {
                Ok(()) => log::info!("Exported sketch to {:?}", path),
                Err(err) => log::error!("Failed to write {:?}: {}", path, err),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod file_ops {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    /// Trigger a browser download of the PNG bytes.
    pub fn save_png(bytes: &[u8]) {
        if let Err(err) = download_png(bytes) {
            log::error!("Failed to trigger PNG download: {:?}", err);
        }
    }

    fn download_png(bytes: &[u8]) -> Result<(), JsValue> {
        let document = web_sys::window()
            .ok_or("no window")?
            .document()
            .ok_or("no document")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()?;
        anchor.set_href(&url);
        anchor.set_download("sketchpad.png");
        anchor.click();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    }
}
