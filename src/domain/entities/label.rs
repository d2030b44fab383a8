//! Container labels stamped onto generic icons.

use super::MediaDescriptor;

/// Labels shorter than this many characters are upper-cased.
pub const SHORT_LABEL_LEN: usize = 5;

/// A normalized container label, used both as drawn text and as cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatLabel(String);

impl FormatLabel {
    /// Normalizes a raw container name.
    ///
    /// Short names (`mp3`, `ogg`) become upper-case, all-lower-case longer
    /// names get their first letter capitalized (`matroska` -> `Matroska`),
    /// anything else is kept verbatim.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        if raw.chars().count() < SHORT_LABEL_LEN {
            return Self(raw.to_uppercase());
        }
        if raw.to_lowercase() == raw {
            return Self(capitalize(raw));
        }
        Self(raw.to_owned())
    }

    /// Derives the label of an optional media descriptor.
    ///
    /// Returns `None` when there is no descriptor or it has no container.
    #[must_use]
    pub fn from_media(media: Option<&MediaDescriptor>) -> Option<Self> {
        media
            .and_then(|m| m.container.as_deref())
            .map(Self::normalize)
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::fmt::Display for FormatLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormatLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
