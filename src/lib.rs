#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod drawable;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod render;
pub mod session;
pub mod surface;
pub mod tool;

pub use app::SketchpadApp;
pub use drawable::{Drawable, MarkerStroke, StickerPlacement, ToolPreview};
pub use export::ExportError;
pub use history::History;
pub use input::InputEvent;
pub use raster::Pixmap;
pub use session::{CANVAS_SIZE, PadState, Sketchpad};
pub use surface::{DisplayList, DrawCmd, DrawSurface};
pub use tool::{MarkerWidth, ToolState};
