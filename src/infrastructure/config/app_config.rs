//! Application configuration.

use crate::domain::entities::LabelLayout;
use crate::infrastructure::icons::DEFAULT_JPEG_QUALITY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "genicons";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory with `{audio,image,video,unknown}.png` replacing the
    /// bundled templates.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// Font file replacing the bundled bold face.
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// JPEG encoder quality (1-100).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Label geometry.
    #[serde(default)]
    pub layout: LabelLayout,
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(templates_dir) = &args.templates_dir {
            self.templates_dir = Some(templates_dir.clone());
        }
        if let Some(font) = &args.font {
            self.font_path = Some(font.clone());
        }
        if let Some(quality) = args.jpeg_quality {
            self.jpeg_quality = quality;
        }
    }

    /// Per-user config directory, e.g. `~/.config/genicons` on Linux.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            templates_dir: None,
            font_path: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            layout: LabelLayout::default(),
        }
    }
}
