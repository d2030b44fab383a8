//! Inputs supplied by the surrounding media server.

/// What the media server knows about an item lacking a real thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Item is audio.
    pub is_audio: bool,
    /// Item is a still image.
    pub is_image: bool,
    /// Item is video.
    pub is_video: bool,
    /// Container name as probed (e.g. `mp3`, `matroska`).
    pub container: Option<String>,
}

impl MediaDescriptor {
    /// Audio item with the given container.
    #[must_use]
    pub fn audio(container: impl Into<String>) -> Self {
        Self {
            is_audio: true,
            container: Some(container.into()),
            ..Self::default()
        }
    }

    /// Image item with the given container.
    #[must_use]
    pub fn image(container: impl Into<String>) -> Self {
        Self {
            is_image: true,
            container: Some(container.into()),
            ..Self::default()
        }
    }

    /// Video item with the given container.
    #[must_use]
    pub fn video(container: impl Into<String>) -> Self {
        Self {
            is_video: true,
            container: Some(container.into()),
            ..Self::default()
        }
    }

    /// Item of unknown kind with the given container.
    #[must_use]
    pub fn unknown(container: impl Into<String>) -> Self {
        Self {
            container: Some(container.into()),
            ..Self::default()
        }
    }
}

/// Renderer-specific thumbnail preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererPreference {
    /// Renderer only accepts JPEG thumbnails.
    pub force_jpeg_thumbnails: bool,
}

impl RendererPreference {
    /// Creates a preference.
    #[must_use]
    pub const fn new(force_jpeg_thumbnails: bool) -> Self {
        Self {
            force_jpeg_thumbnails,
        }
    }
}
