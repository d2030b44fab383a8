//! Media category used to pick an icon template.

use super::MediaDescriptor;

/// General category of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum IconCategory {
    /// Audio tracks.
    Audio,
    /// Still images.
    Image,
    /// Video files.
    Video,
    /// Anything without usable metadata.
    #[default]
    Unknown,
}

impl IconCategory {
    /// All categories, in template loading order.
    pub const ALL: [Self; 4] = [Self::Audio, Self::Image, Self::Video, Self::Unknown];

    /// Resolves the category of an optional media descriptor.
    ///
    /// Flags are checked audio first, then image, then video.
    #[must_use]
    pub fn from_media(media: Option<&MediaDescriptor>) -> Self {
        match media {
            Some(m) if m.is_audio => Self::Audio,
            Some(m) if m.is_image => Self::Image,
            Some(m) if m.is_video => Self::Video,
            _ => Self::Unknown,
        }
    }

    /// Lower-case name, also used as the template file stem.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Video => "video",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn media(audio: bool, image: bool, video: bool) -> MediaDescriptor {
        MediaDescriptor {
            is_audio: audio,
            is_image: image,
            is_video: video,
            container: None,
        }
    }

    #[test_case(media(true, false, false), IconCategory::Audio ; "audio")]
    #[test_case(media(false, true, false), IconCategory::Image ; "image")]
    #[test_case(media(false, false, true), IconCategory::Video ; "video")]
    #[test_case(media(false, false, false), IconCategory::Unknown ; "no_flags")]
    #[test_case(media(true, false, true), IconCategory::Audio ; "audio_beats_video")]
    #[test_case(media(false, true, true), IconCategory::Image ; "image_beats_video")]
    #[test_case(media(true, true, true), IconCategory::Audio ; "all_flags")]
    fn test_from_media(descriptor: MediaDescriptor, expected: IconCategory) {
        assert_eq!(IconCategory::from_media(Some(&descriptor)), expected);
    }

    #[test]
    fn test_absent_media_is_unknown() {
        assert_eq!(IconCategory::from_media(None), IconCategory::Unknown);
    }

    #[test]
    fn test_display_matches_template_stem() {
        let names: Vec<String> = IconCategory::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["audio", "image", "video", "unknown"]);
    }
}
