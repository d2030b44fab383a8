use super::app_config::LogLevel;
use crate::domain::entities::{IconCategory, MediaDescriptor, RendererPreference};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments of the `genicons` binary.
#[derive(Debug, Parser)]
#[command(
    name = "genicons",
    version,
    about = "Render a generic label-stamped media thumbnail",
    long_about = None
)]
pub struct CliArgs {
    /// Container name to stamp on the icon (e.g. mp3, matroska).
    /// Without it there is no media metadata and no icon.
    #[arg(long, value_name = "NAME")]
    pub container: Option<String>,

    /// Media category.
    #[arg(short, long, value_enum, default_value_t = IconCategory::Unknown)]
    pub kind: IconCategory,

    /// Encode as JPEG instead of PNG.
    #[arg(long)]
    pub force_jpeg: bool,

    /// Output file. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Directory with replacement category templates.
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Font file used for labels.
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// JPEG encoder quality (1-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: Option<u8>,
}

impl CliArgs {
    /// Media descriptor described by the arguments.
    #[must_use]
    pub fn media_descriptor(&self) -> Option<MediaDescriptor> {
        let container = self.container.clone()?;
        Some(match self.kind {
            IconCategory::Audio => MediaDescriptor::audio(container),
            IconCategory::Image => MediaDescriptor::image(container),
            IconCategory::Video => MediaDescriptor::video(container),
            IconCategory::Unknown => MediaDescriptor::unknown(container),
        })
    }

    /// Renderer preference described by the arguments.
    #[must_use]
    pub const fn renderer_preference(&self) -> RendererPreference {
        RendererPreference::new(self.force_jpeg)
    }
}
