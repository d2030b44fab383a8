//! Label measuring and drawing on top of `cosmic-text`.

use std::path::Path;

use cosmic_text::{
    Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight, fontdb,
};
use image::RgbaImage;
use tracing::debug;

use crate::domain::errors::RenderError;

/// DejaVu Sans Bold, shipped so output does not depend on system fonts.
const DEJAVU_SANS_BOLD: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf");

/// A single bold face plus the shaping and rasterization state for it.
///
/// Only the loaded face is in the font database, so measurements are
/// reproducible across machines.
pub struct Typesetter {
    font_system: FontSystem,
    swash_cache: SwashCache,
    family: String,
    face: fontdb::ID,
}

impl std::fmt::Debug for Typesetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typesetter")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl Typesetter {
    /// Uses the bundled bold sans-serif face.
    ///
    /// # Errors
    /// Returns error if the embedded font cannot be parsed.
    pub fn bundled() -> Result<Self, RenderError> {
        Self::from_font_data(DEJAVU_SANS_BOLD.to_vec())
    }

    /// Loads a TrueType/OpenType font file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or holds no usable face.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path)?;
        Self::from_font_data(data)
    }

    /// Loads font data already in memory.
    ///
    /// # Errors
    /// Returns error if the data holds no usable face.
    pub fn from_font_data(data: Vec<u8>) -> Result<Self, RenderError> {
        let mut db = fontdb::Database::new();
        db.load_font_data(data);

        let (face, family) = db
            .faces()
            .find_map(|info| {
                info.families
                    .first()
                    .map(|(name, _)| (info.id, name.clone()))
            })
            .ok_or_else(|| RenderError::font("no usable face in font data"))?;

        debug!(family = %family, "Loaded label font");

        Ok(Self {
            font_system: FontSystem::new_with_locale_and_db("en-US".to_string(), db),
            swash_cache: SwashCache::new(),
            family,
            face,
        })
    }

    /// Family name of the loaded face.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[allow(clippy::cast_precision_loss)]
    fn shape(&mut self, text: &str, size: u32) -> Buffer {
        let px = size as f32;
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(px, px));
        buffer.set_size(&mut self.font_system, None, None);
        let attrs = Attrs::new()
            .family(Family::Name(&self.family))
            .weight(Weight::BOLD);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    /// Advance width of `text` at `size` pixels.
    pub fn measure(&mut self, text: &str, size: u32) -> f32 {
        self.shape(text, size)
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }

    /// Ascent of the face at `size` pixels.
    ///
    /// # Errors
    /// Returns error if the face cannot be resolved or has no em size.
    pub fn ascent(&mut self, size: u32) -> Result<f32, RenderError> {
        let font = self
            .font_system
            .get_font(self.face)
            .ok_or_else(|| RenderError::font(format!("face of {} went missing", self.family)))?;
        let metrics = font.as_swash().metrics(&[]);
        if metrics.units_per_em == 0 {
            return Err(RenderError::font("face reports zero units per em"));
        }
        #[allow(clippy::cast_precision_loss)]
        let px = size as f32;
        Ok(metrics.ascent * px / f32::from(metrics.units_per_em))
    }

    /// Draws `text` with its left edge at `x` and its baseline at `baseline`.
    /// Glyph pixels outside the canvas are clipped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn draw(
        &mut self,
        canvas: &mut RgbaImage,
        text: &str,
        size: u32,
        x: i32,
        baseline: i32,
        color: [u8; 3],
    ) {
        let buffer = self.shape(text, size);
        let line_y = buffer.layout_runs().next().map_or(0.0, |run| run.line_y);
        let top = baseline - line_y.round() as i32;
        let [r, g, b] = color;

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            Color::rgb(r, g, b),
            |gx, gy, w, h, coverage| {
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        blend(canvas, x + gx + dx, top + gy + dy, coverage);
                    }
                }
            },
        );
    }
}

/// Source-over blend of one pixel; out-of-bounds coordinates are ignored.
#[allow(clippy::cast_possible_truncation)]
fn blend(canvas: &mut RgbaImage, x: i32, y: i32, color: Color) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let Some(pixel) = canvas.get_pixel_mut_checked(x, y) else {
        return;
    };
    let alpha = u32::from(color.a());
    if alpha == 0 {
        return;
    }
    let inverse = 255 - alpha;
    let source = [color.r(), color.g(), color.b(), 255];
    for (dst, src) in pixel.0.iter_mut().zip(source) {
        *dst = ((u32::from(src) * alpha + u32::from(*dst) * inverse + 127) / 255) as u8;
    }
}
