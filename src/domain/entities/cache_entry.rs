//! Cached outcome of one icon generation.

use bytes::Bytes;

/// Result stored for an `(format, category, label)` key.
///
/// A missing map entry means "never requested"; `Unavailable` means
/// generation was attempted and failed, and must not be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// Encoded image bytes.
    Present(Bytes),
    /// Generation failed permanently for this key.
    Unavailable,
}

impl CacheEntry {
    /// Returns the encoded bytes, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Present(bytes) => Some(bytes),
            Self::Unavailable => None,
        }
    }

    /// Returns true if generation failed for this key.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}
