use std::io::Cursor;

use egui::Color32;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::drawable::Drawable;
use crate::raster::Pixmap;
use crate::render::replay;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Pixel buffer did not match the requested {width}x{height} size")]
    BufferMismatch { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Replay `drawables` onto a fresh raster of the given size and encode the
/// result as a PNG.
pub fn render_png(
    drawables: &[Drawable],
    width: u32,
    height: u32,
    background: Option<Color32>,
) -> Result<Vec<u8>, ExportError> {
    let mut pixmap = Pixmap::new(width, height);
    replay(drawables, None, background, &mut pixmap);
    encode_png(&pixmap)
}

/// Encode a pixmap's pixels as a PNG byte stream.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let image = RgbaImage::from_raw(width, height, pixmap.to_rgba_bytes())
        .ok_or(ExportError::BufferMismatch { width, height })?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::factory;
    use egui::pos2;

    #[test]
    fn test_png_round_trip() {
        let mut stroke = factory::marker_stroke(pos2(8.0, 32.0), 6.0, Color32::RED);
        stroke.extend(pos2(56.0, 32.0));

        let bytes = render_png(&[stroke], 64, 64, Some(Color32::WHITE)).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (64, 64));
        assert_eq!(decoded.get_pixel(32, 32).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(32, 8).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_empty_export() {
        let bytes = render_png(&[], 16, 16, Some(Color32::WHITE)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert!(decoded.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
}
