//! Two-level in-memory cache of generated icons.
//!
//! Entries are keyed by `(format, category)` and then by label. Nothing is
//! ever evicted or overwritten: the key space is small and a generated icon
//! is deterministic for its key.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::trace;

use crate::domain::entities::{CacheEntry, FormatLabel, IconCategory, OutputFormat};

type LabelMap = HashMap<FormatLabel, CacheEntry>;

/// Label cache. Not synchronized: the owner wraps it in a single lock held
/// for the whole lookup-render-store sequence.
#[derive(Debug, Default)]
pub struct LabelCache {
    maps: HashMap<(OutputFormat, IconCategory), LabelMap>,
    hits: u64,
    misses: u64,
}

impl LabelCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a key, counting the hit or miss.
    ///
    /// `None` means the key was never stored; `Some(CacheEntry::Unavailable)`
    /// means generation already failed for it.
    pub fn get(
        &mut self,
        format: OutputFormat,
        category: IconCategory,
        label: &FormatLabel,
    ) -> Option<CacheEntry> {
        let entry = self
            .maps
            .get(&(format, category))
            .and_then(|labels| labels.get(label))
            .cloned();
        if entry.is_some() {
            self.hits += 1;
            trace!(%format, %category, %label, "Label cache hit");
        } else {
            self.misses += 1;
            trace!(%format, %category, %label, "Label cache miss");
        }
        entry
    }

    /// Stores an entry unless the key is already present; the first writer
    /// wins. Returns the entry now cached for the key.
    pub fn put(
        &mut self,
        format: OutputFormat,
        category: IconCategory,
        label: FormatLabel,
        entry: CacheEntry,
    ) -> &CacheEntry {
        match self
            .maps
            .entry((format, category))
            .or_default()
            .entry(label)
        {
            Entry::Occupied(existing) => {
                trace!(%format, %category, label = %existing.key(), "Keeping existing entry");
                existing.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entry),
        }
    }

    /// Total number of cached entries, including failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.values().map(HashMap::len).sum()
    }

    /// Returns true if nothing has been cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        let hit_rate = if total > 0 {
            (self.hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        let unavailable = self
            .maps
            .values()
            .flat_map(HashMap::values)
            .filter(|e| e.is_unavailable())
            .count();
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            hit_rate,
            entries: self.len(),
            unavailable,
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached entries.
    pub entries: usize,
    /// Entries recording a failed generation.
    pub unavailable: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} icons ({} unavailable), {:.1}% hit rate ({} hits, {} misses)",
            self.entries, self.unavailable, self.hit_rate, self.hits, self.misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn label(s: &str) -> FormatLabel {
        FormatLabel::normalize(s)
    }

    #[test]
    fn test_put_and_get() {
        let mut cache = LabelCache::new();
        let bytes = Bytes::from_static(b"png");

        cache.put(
            OutputFormat::Png,
            IconCategory::Audio,
            label("mp3"),
            CacheEntry::Present(bytes.clone()),
        );

        let entry = cache.get(OutputFormat::Png, IconCategory::Audio, &label("mp3"));
        assert_eq!(entry, Some(CacheEntry::Present(bytes)));
    }

    #[test]
    fn test_miss_is_distinct_from_unavailable() {
        let mut cache = LabelCache::new();
        assert_eq!(
            cache.get(OutputFormat::Png, IconCategory::Video, &label("avi")),
            None
        );

        cache.put(
            OutputFormat::Png,
            IconCategory::Video,
            label("avi"),
            CacheEntry::Unavailable,
        );
        assert_eq!(
            cache.get(OutputFormat::Png, IconCategory::Video, &label("avi")),
            Some(CacheEntry::Unavailable)
        );
    }

    #[test]
    fn test_first_writer_wins() {
        let mut cache = LabelCache::new();
        let first = CacheEntry::Present(Bytes::from_static(b"first"));

        cache.put(OutputFormat::Jpeg, IconCategory::Image, label("gif"), first.clone());
        let kept = cache.put(
            OutputFormat::Jpeg,
            IconCategory::Image,
            label("gif"),
            CacheEntry::Unavailable,
        );

        assert_eq!(kept, &first);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_separated_by_format_and_category() {
        let mut cache = LabelCache::new();
        cache.put(
            OutputFormat::Png,
            IconCategory::Audio,
            label("ogg"),
            CacheEntry::Unavailable,
        );

        assert!(cache.get(OutputFormat::Jpeg, IconCategory::Audio, &label("ogg")).is_none());
        assert!(cache.get(OutputFormat::Png, IconCategory::Video, &label("ogg")).is_none());
        assert!(cache.get(OutputFormat::Png, IconCategory::Audio, &label("OGG")).is_some());
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = LabelCache::new();
        cache.put(
            OutputFormat::Png,
            IconCategory::Audio,
            label("mp3"),
            CacheEntry::Present(Bytes::from_static(b"x")),
        );
        cache.put(
            OutputFormat::Png,
            IconCategory::Unknown,
            label("bin"),
            CacheEntry::Unavailable,
        );

        // Hit
        let _ = cache.get(OutputFormat::Png, IconCategory::Audio, &label("mp3"));
        // Miss
        let _ = cache.get(OutputFormat::Png, IconCategory::Audio, &label("wav"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.unavailable, 1);
        assert!((stats.hit_rate - 50.0).abs() < f64::EPSILON);
        assert!(!cache.is_empty());
    }
}
