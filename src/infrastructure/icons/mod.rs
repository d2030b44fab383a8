//! Generic icon generation infrastructure.
//!
//! This module provides:
//! - Category templates loaded once at startup
//! - Label fitting and drawing with a bundled bold face
//! - The template renderer behind `LabelRendererPort`
//! - The unsynchronized two-level label cache

pub mod label_cache;
pub mod renderer;
pub mod template_store;
pub mod typesetter;

pub use label_cache::{CacheStats, LabelCache};
pub use renderer::{DEFAULT_JPEG_QUALITY, TemplateLabelRenderer};
pub use template_store::TemplateStore;
pub use typesetter::Typesetter;
