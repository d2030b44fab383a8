//! Encoded output format of generated icons.

use super::RendererPreference;

/// Image encoding requested by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Baseline JPEG, for renderers that only accept JPEG thumbnails.
    Jpeg,
    /// PNG with alpha.
    #[default]
    Png,
}

impl OutputFormat {
    /// Resolves the format from an optional renderer preference.
    #[must_use]
    pub fn from_preference(renderer: Option<&RendererPreference>) -> Self {
        match renderer {
            Some(r) if r.force_jpeg_thumbnails => Self::Jpeg,
            _ => Self::Png,
        }
    }

    /// MIME type of the encoded bytes.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl From<OutputFormat> for image::ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Jpeg => Self::Jpeg,
            OutputFormat::Png => Self::Png,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::Png => write!(f, "PNG"),
        }
    }
}
