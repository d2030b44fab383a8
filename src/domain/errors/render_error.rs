//! Icon rendering error types.

use thiserror::Error;

use crate::domain::entities::IconCategory;

/// Rendering error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RenderError {
    #[error("no template loaded for {0} icons")]
    TemplateUnavailable(IconCategory),

    #[error("font error: {message}")]
    Font { message: String },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Creates font error.
    #[must_use]
    pub fn font(message: impl Into<String>) -> Self {
        Self::Font {
            message: message.into(),
        }
    }

    /// Returns whether the failure is expected and permanent for a category,
    /// as opposed to an unexpected graphics or I/O failure.
    #[must_use]
    pub const fn is_missing_template(&self) -> bool {
        matches!(self, Self::TemplateUnavailable(_))
    }
}
