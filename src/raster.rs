use ab_glyph::{Font as _, FontArc, PxScale, ScaleFont as _};
use egui::{Color32, FontDefinitions, Pos2, pos2};

use crate::surface::DrawSurface;

/// Glyph sources for the software raster path: every font egui bundles by
/// default (Hack, NotoEmoji, Ubuntu-Light, the emoji icon font), tried in
/// name order until one covers a character.
///
/// With egui's `default_fonts` feature disabled this set is empty and glyphs
/// simply rasterize to nothing — never an error.
#[derive(Clone)]
pub struct GlyphSet {
    fonts: Vec<FontArc>,
}

impl GlyphSet {
    /// Parse the egui-bundled default fonts. Fonts that fail to parse are
    /// skipped.
    pub fn embedded() -> Self {
        let defs = FontDefinitions::default();
        let fonts = defs
            .font_data
            .values()
            .filter_map(|data| FontArc::try_from_vec(data.font.to_vec()).ok())
            .collect();
        Self { fonts }
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// The first font that maps `c` to a real glyph (id 0 is .notdef).
    fn font_for(&self, c: char) -> Option<&FontArc> {
        self.fonts.iter().find(|font| font.glyph_id(c).0 != 0)
    }
}

impl std::fmt::Debug for GlyphSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSet")
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

/// A software RGBA drawing surface.
///
/// Pixels are `Color32` (premultiplied alpha, like everything egui touches);
/// shapes land with analytic edge coverage, so the output is deterministic —
/// replaying the same drawables always yields byte-identical pixels.
pub struct Pixmap {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
    glyphs: GlyphSet,
}

impl Pixmap {
    /// A fully transparent pixmap of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as usize,
            height: height as usize,
            pixels: vec![Color32::TRANSPARENT; width as usize * height as usize],
            glyphs: GlyphSet::embedded(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// The pixel at (x, y). Panics outside the pixmap, like any slice index.
    pub fn pixel(&self, x: u32, y: u32) -> Color32 {
        self.pixels[y as usize * self.width + x as usize]
    }

    /// Straight-alpha RGBA bytes, row-major — the layout PNG wants.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_srgba_unmultiplied());
        }
        bytes
    }

    /// Source-over blend of `color` scaled by `coverage` onto one pixel.
    /// Out-of-bounds coordinates are ignored.
    fn blend(&mut self, x: i32, y: i32, color: Color32, coverage: f32) {
        if coverage <= 0.0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let src = color.gamma_multiply(coverage.min(1.0));
        let index = y * self.width + x;
        let dst = self.pixels[index];
        let inv = 255 - u32::from(src.a());
        let over = |s: u8, d: u8| (u32::from(s) + u32::from(d) * inv / 255).min(255) as u8;
        self.pixels[index] = Color32::from_rgba_premultiplied(
            over(src.r(), dst.r()),
            over(src.g(), dst.g()),
            over(src.b(), dst.b()),
            over(src.a(), dst.a()),
        );
    }

    /// Fill a round-capped, `thickness`-wide band along the segment `a..b`.
    /// `a == b` degenerates to a filled dot.
    fn fill_capsule(&mut self, a: Pos2, b: Pos2, thickness: f32, color: Color32) {
        let half = (thickness / 2.0).max(0.5);
        let pad = half + 1.0;
        let x0 = ((a.x.min(b.x) - pad).floor().max(0.0)) as i32;
        let x1 = ((a.x.max(b.x) + pad).ceil().min(self.width as f32 - 1.0)) as i32;
        let y0 = ((a.y.min(b.y) - pad).floor().max(0.0)) as i32;
        let y1 = ((a.y.max(b.y) + pad).ceil().min(self.height as f32 - 1.0)) as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = pos2(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (half + 0.5 - distance_to_segment(p, a, b)).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    /// Stroke a one-pixel ring around `center`.
    fn stroke_ring(&mut self, center: Pos2, radius: f32, color: Color32) {
        let radius = radius.max(0.5);
        let pad = radius + 1.5;
        let x0 = ((center.x - pad).floor().max(0.0)) as i32;
        let x1 = ((center.x + pad).ceil().min(self.width as f32 - 1.0)) as i32;
        let y0 = ((center.y - pad).floor().max(0.0)) as i32;
        let y1 = ((center.y + pad).ceil().min(self.height as f32 - 1.0)) as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = pos2(x as f32 + 0.5, y as f32 + 0.5);
                let band = ((p - center).length() - radius).abs();
                let coverage = (1.0 - band).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    /// Rasterize a glyph run centered on `center`, `size` pixels tall.
    /// Characters no bundled font covers are skipped.
    fn draw_text_run(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        let glyphs = self.glyphs.clone();
        if glyphs.is_empty() {
            return;
        }
        let scale = PxScale::from(size);

        let mut run_width = 0.0;
        for c in text.chars() {
            if let Some(font) = glyphs.font_for(c) {
                run_width += font.as_scaled(scale).h_advance(font.glyph_id(c));
            }
        }
        if run_width <= 0.0 {
            return;
        }

        let mut pen_x = center.x - run_width / 2.0;
        for c in text.chars() {
            let Some(font) = glyphs.font_for(c) else {
                continue;
            };
            let scaled = font.as_scaled(scale);
            let glyph_id = font.glyph_id(c);
            let baseline = center.y + (scaled.ascent() + scaled.descent()) / 2.0;
            let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(pen_x, baseline));
            pen_x += scaled.h_advance(glyph_id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    self.blend(
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}

impl std::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("glyphs", &self.glyphs)
            .finish()
    }
}

impl DrawSurface for Pixmap {
    fn reset(&mut self, background: Option<Color32>) {
        let fill = background.unwrap_or(Color32::TRANSPARENT);
        self.pixels.fill(fill);
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        match points {
            [] => {}
            [point] => self.fill_capsule(*point, *point, thickness, color),
            _ => {
                for pair in points.windows(2) {
                    self.fill_capsule(pair[0], pair[1], thickness, color);
                }
            }
        }
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.stroke_ring(center, radius, color);
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        self.draw_text_run(center, text, size, color);
    }
}

/// Distance from `p` to the segment `a..b` (the capsule core).
fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return ap.length();
    }
    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}
