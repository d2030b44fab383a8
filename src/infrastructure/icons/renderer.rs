//! Composites container labels onto category templates.

use std::io::Cursor;
use std::sync::Arc;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use parking_lot::Mutex;
use tracing::trace;

use crate::domain::entities::{FormatLabel, IconCategory, LabelLayout, OutputFormat};
use crate::domain::errors::RenderError;
use crate::domain::ports::LabelRendererPort;

use super::template_store::TemplateStore;
use super::typesetter::Typesetter;

/// Default JPEG quality, on the encoder's 1-100 scale.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Renders labels onto the templates of a [`TemplateStore`].
///
/// The shaping state is behind its own lock; templates are only read.
#[derive(Debug)]
pub struct TemplateLabelRenderer {
    templates: Arc<TemplateStore>,
    typesetter: Mutex<Typesetter>,
    layout: LabelLayout,
    jpeg_quality: u8,
}

impl TemplateLabelRenderer {
    /// Creates a renderer with the default layout.
    #[must_use]
    pub fn new(templates: Arc<TemplateStore>, typesetter: Typesetter) -> Self {
        Self {
            templates,
            typesetter: Mutex::new(typesetter),
            layout: LabelLayout::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Bundled templates and font.
    ///
    /// # Errors
    /// Returns error if the bundled font cannot be loaded.
    pub fn bundled() -> Result<Self, RenderError> {
        Ok(Self::new(
            Arc::new(TemplateStore::bundled()),
            Typesetter::bundled()?,
        ))
    }

    /// Overrides the label geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: LabelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Overrides the JPEG quality, clamped to 1-100.
    #[must_use]
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Template store backing this renderer.
    #[must_use]
    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Font size the label would be drawn at.
    ///
    /// # Errors
    /// Returns error if the font cannot be measured.
    pub fn fitted_size(&self, label: &FormatLabel) -> Result<u32, RenderError> {
        let mut typesetter = self.typesetter.lock();
        let (size, _) = self
            .layout
            .fit_size(|size| Ok::<_, RenderError>(typesetter.measure(label.as_str(), size)))?;
        Ok(size)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stamp(&self, canvas: &mut RgbaImage, label: &FormatLabel) -> Result<(), RenderError> {
        let text = label.as_str();
        let mut typesetter = self.typesetter.lock();

        let (size, width) = self
            .layout
            .fit_size(|size| Ok::<_, RenderError>(typesetter.measure(text, size)))?;
        let ascent = typesetter.ascent(size)?;

        let x = self.layout.anchor_x - width.round() as i32 / 2;
        let baseline = self.layout.anchor_y + ascent.round() as i32 / 2;
        trace!(label = %label, size, width, x, baseline, "Stamping label");

        typesetter.draw(canvas, text, size, x, baseline, self.layout.color);
        Ok(())
    }
}

impl LabelRendererPort for TemplateLabelRenderer {
    fn render(
        &self,
        category: IconCategory,
        label: &FormatLabel,
        format: OutputFormat,
    ) -> Result<Bytes, RenderError> {
        let template = self
            .templates
            .template(category)
            .ok_or(RenderError::TemplateUnavailable(category))?;

        let mut canvas = template.to_rgba8();
        self.stamp(&mut canvas, label)?;
        encode(canvas, format, self.jpeg_quality)
    }
}

fn encode(canvas: RgbaImage, format: OutputFormat, jpeg_quality: u8) -> Result<Bytes, RenderError> {
    let mut out = Cursor::new(Vec::new());
    match format {
        OutputFormat::Png => canvas.write_to(&mut out, ImageFormat::Png)?,
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel.
            let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();
            JpegEncoder::new_with_quality(&mut out, jpeg_quality).encode_image(&rgb)?;
        }
    }
    Ok(Bytes::from(out.into_inner()))
}
