//! Domain entity definitions.

mod cache_entry;
mod category;
mod label;
mod layout;
mod media;
mod output_format;

pub use cache_entry::CacheEntry;
pub use category::IconCategory;
pub use label::{FormatLabel, SHORT_LABEL_LEN};
pub use layout::LabelLayout;
pub use media::{MediaDescriptor, RendererPreference};
pub use output_format::OutputFormat;
