//! Port definition for label rendering.

use bytes::Bytes;

use crate::domain::entities::{FormatLabel, IconCategory, OutputFormat};
use crate::domain::errors::RenderError;

/// Port for compositing a label onto a category template.
/// Implementations must be thread-safe and deterministic for equal inputs.
#[cfg_attr(test, mockall::automock)]
pub trait LabelRendererPort: Send + Sync {
    /// Renders `label` onto the template of `category` and encodes it.
    ///
    /// # Errors
    /// Returns an error if the template is missing or drawing/encoding fails.
    fn render(
        &self,
        category: IconCategory,
        label: &FormatLabel,
        format: OutputFormat,
    ) -> Result<Bytes, RenderError>;
}
