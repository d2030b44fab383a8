//! Category icon templates, loaded once and shared read-only.

use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::{debug, warn};

use crate::domain::entities::IconCategory;

const AUDIO_PNG: &[u8] = include_bytes!("../../../assets/formats/audio.png");
const IMAGE_PNG: &[u8] = include_bytes!("../../../assets/formats/image.png");
const VIDEO_PNG: &[u8] = include_bytes!("../../../assets/formats/video.png");
const UNKNOWN_PNG: &[u8] = include_bytes!("../../../assets/formats/unknown.png");

/// One base image per category. A category whose resource was missing or
/// corrupt stays empty for the lifetime of the store.
#[derive(Debug, Default)]
pub struct TemplateStore {
    audio: Option<DynamicImage>,
    image: Option<DynamicImage>,
    video: Option<DynamicImage>,
    unknown: Option<DynamicImage>,
}

impl TemplateStore {
    /// Loads the templates compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::load_with(|category| {
            let data = match category {
                IconCategory::Audio => AUDIO_PNG,
                IconCategory::Image => IMAGE_PNG,
                IconCategory::Video => VIDEO_PNG,
                IconCategory::Unknown => UNKNOWN_PNG,
            };
            image::load_from_memory_with_format(data, ImageFormat::Png)
                .map_err(|e| e.to_string())
        })
    }

    /// Loads `<dir>/{audio,image,video,unknown}.png`.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        Self::load_with(|category| {
            let path = dir.join(format!("{category}.png"));
            image::open(&path).map_err(|e| format!("{}: {e}", path.display()))
        })
    }

    /// Builds a store from already decoded templates.
    #[must_use]
    pub fn from_images(mut images: impl FnMut(IconCategory) -> Option<DynamicImage>) -> Self {
        Self {
            audio: images(IconCategory::Audio),
            image: images(IconCategory::Image),
            video: images(IconCategory::Video),
            unknown: images(IconCategory::Unknown),
        }
    }

    fn load_with(mut load: impl FnMut(IconCategory) -> Result<DynamicImage, String>) -> Self {
        Self::from_images(|category| match load(category) {
            Ok(img) => {
                debug!(
                    %category,
                    width = img.width(),
                    height = img.height(),
                    "Loaded icon template"
                );
                Some(img)
            }
            Err(e) => {
                warn!(%category, error = %e, "Icon template unavailable");
                None
            }
        })
    }

    /// Returns the template of `category`, if it loaded.
    #[must_use]
    pub const fn template(&self, category: IconCategory) -> Option<&DynamicImage> {
        match category {
            IconCategory::Audio => self.audio.as_ref(),
            IconCategory::Image => self.image.as_ref(),
            IconCategory::Video => self.video.as_ref(),
            IconCategory::Unknown => self.unknown.as_ref(),
        }
    }

    /// Number of categories with a usable template.
    #[must_use]
    pub fn loaded(&self) -> usize {
        IconCategory::ALL
            .iter()
            .filter(|c| self.template(**c).is_some())
            .count()
    }
}
