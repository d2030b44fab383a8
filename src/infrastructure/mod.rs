//! Infrastructure layer with rendering and configuration adapters.

/// Application configuration.
pub mod config;
/// Icon templates, rendering, and caching.
pub mod icons;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use icons::{
    CacheStats, LabelCache, TemplateLabelRenderer, TemplateStore, Typesetter,
};
