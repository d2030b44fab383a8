//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{
    CacheEntry, FormatLabel, IconCategory, LabelLayout, MediaDescriptor, OutputFormat,
    RendererPreference,
};
pub use errors::RenderError;
pub use ports::LabelRendererPort;
