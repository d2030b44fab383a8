//! Entry point for generic media icons.
//!
//! Resolves format, category and label from what the media server knows,
//! then serves the icon from the label cache, rendering it on first request.

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::application::dto::IconStream;
use crate::domain::entities::{
    CacheEntry, FormatLabel, IconCategory, MediaDescriptor, OutputFormat, RendererPreference,
};
use crate::domain::errors::RenderError;
use crate::domain::ports::LabelRendererPort;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::icons::{
    CacheStats, LabelCache, TemplateLabelRenderer, TemplateStore, Typesetter,
};

/// Caching generator of label-stamped placeholder thumbnails.
///
/// Construct one per process and share it by reference. Every lookup,
/// render and store runs under a single cache lock, so a key is rendered at
/// most once and unrelated keys are serialized against each other.
pub struct GenericIconService {
    renderer: Arc<dyn LabelRendererPort>,
    cache: Mutex<LabelCache>,
}

impl std::fmt::Debug for GenericIconService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("GenericIconService");
        // Never block: formatting may happen while a render holds the lock.
        match self.cache.try_lock() {
            Some(cache) => out.field("cache", &*cache),
            None => out.field("cache", &"<locked>"),
        };
        out.finish_non_exhaustive()
    }
}

impl GenericIconService {
    /// Creates a service around any renderer.
    #[must_use]
    pub fn new(renderer: Arc<dyn LabelRendererPort>) -> Self {
        Self {
            renderer,
            cache: Mutex::new(LabelCache::new()),
        }
    }

    /// Builds the template renderer described by `config`.
    ///
    /// Templates that fail to load only disable their category; a font that
    /// fails to load is an error.
    ///
    /// # Errors
    /// Returns error if the configured or bundled font cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, RenderError> {
        let templates = config
            .templates_dir
            .as_deref()
            .map_or_else(TemplateStore::bundled, TemplateStore::from_dir);
        let typesetter = match &config.font_path {
            Some(path) => Typesetter::from_file(path)?,
            None => Typesetter::bundled()?,
        };

        debug!(
            templates = templates.loaded(),
            font = typesetter.family(),
            "Generic icon renderer ready"
        );

        let renderer = TemplateLabelRenderer::new(Arc::new(templates), typesetter)
            .with_layout(config.layout)
            .with_jpeg_quality(config.jpeg_quality);
        Ok(Self::new(Arc::new(renderer)))
    }

    /// Returns a fresh stream over the generic icon for `media`, or `None`
    /// when no icon is available. Callers should then fall back to their own
    /// default thumbnail.
    #[must_use]
    pub fn generic_icon(
        &self,
        media: Option<&MediaDescriptor>,
        renderer: Option<&RendererPreference>,
    ) -> Option<IconStream> {
        let format = OutputFormat::from_preference(renderer);
        let category = IconCategory::from_media(media);
        let label = FormatLabel::from_media(media)?;

        self.icon_bytes(format, category, label).map(IconStream::new)
    }

    /// Async variant of [`Self::generic_icon`], rendering on the blocking pool.
    pub async fn generic_icon_async(
        self: Arc<Self>,
        media: Option<MediaDescriptor>,
        renderer: Option<RendererPreference>,
    ) -> Option<IconStream> {
        tokio::task::spawn_blocking(move || self.generic_icon(media.as_ref(), renderer.as_ref()))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Generic icon task failed");
                None
            })
    }

    /// Cached bytes for a resolved key, rendering and caching on a miss.
    /// Failures are cached too and never retried.
    #[must_use]
    pub fn icon_bytes(
        &self,
        format: OutputFormat,
        category: IconCategory,
        label: FormatLabel,
    ) -> Option<Bytes> {
        let mut cache = self.cache.lock();
        if let Some(entry) = cache.get(format, category, &label) {
            return entry.bytes().cloned();
        }

        debug!(%category, %label, %format, "Creating generic icon");
        let entry = match self.renderer.render(category, &label, format) {
            Ok(bytes) => CacheEntry::Present(bytes),
            Err(e) if e.is_missing_template() => {
                debug!(%category, %label, %format, error = %e, "No generic icon");
                CacheEntry::Unavailable
            }
            Err(e) => {
                warn!(
                    %category, %label, %format, error = %e,
                    "Unexpected error while generating generic icon"
                );
                CacheEntry::Unavailable
            }
        };

        cache.put(format, category, label, entry).bytes().cloned()
    }

    /// Returns label cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockLabelRendererPort;
    use crate::domain::ports::mocks::CountingRenderer;
    use std::io::Read;
    use std::time::Duration;

    fn counting() -> (Arc<CountingRenderer>, GenericIconService) {
        let renderer = Arc::new(CountingRenderer::new());
        let service = GenericIconService::new(renderer.clone());
        (renderer, service)
    }

    fn read_all(mut stream: IconStream) -> Vec<u8> {
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_second_request_is_served_from_cache() {
        let (renderer, service) = counting();
        let media = MediaDescriptor::audio("mp3");

        let first = read_all(service.generic_icon(Some(&media), None).unwrap());
        let second = read_all(service.generic_icon(Some(&media), None).unwrap());

        assert_eq!(first, second);
        assert_eq!(first, b"PNG:audio:MP3");
        assert_eq!(renderer.calls(), 1);
        assert_eq!(service.cache_stats().hits, 1);
    }

    #[test]
    fn test_equivalent_raw_labels_share_an_entry() {
        let (renderer, service) = counting();

        let _ = service.generic_icon(Some(&MediaDescriptor::audio("mp3")), None);
        let _ = service.generic_icon(Some(&MediaDescriptor::audio("MP3")), None);
        let _ = service.generic_icon(Some(&MediaDescriptor::audio("Mp3")), None);

        assert_eq!(renderer.calls(), 1);
        assert_eq!(service.cache_stats().entries, 1);
    }

    #[test]
    fn test_format_and_category_are_part_of_the_key() {
        let (renderer, service) = counting();
        let jpeg = RendererPreference::new(true);

        let png = service.generic_icon(Some(&MediaDescriptor::video("avi")), None);
        let jpg = service.generic_icon(Some(&MediaDescriptor::video("avi")), Some(&jpeg));
        let unknown = service.generic_icon(Some(&MediaDescriptor::unknown("avi")), None);

        assert_eq!(read_all(png.unwrap()), b"PNG:video:AVI");
        assert_eq!(read_all(jpg.unwrap()), b"JPEG:video:AVI");
        assert_eq!(read_all(unknown.unwrap()), b"PNG:unknown:AVI");
        assert_eq!(renderer.calls(), 3);
    }

    #[test]
    fn test_failure_is_cached() {
        let (renderer, service) = counting();
        renderer.set_should_fail(true);
        let media = MediaDescriptor::image("tiff");

        assert!(service.generic_icon(Some(&media), None).is_none());

        // Even once rendering would succeed, the key stays unavailable.
        renderer.set_should_fail(false);
        assert!(service.generic_icon(Some(&media), None).is_none());
        assert_eq!(renderer.calls(), 1);

        let stats = service.cache_stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.unavailable, 1);
    }

    #[test]
    fn test_unexpected_render_error_is_swallowed_and_cached() {
        let mut mock = MockLabelRendererPort::new();
        mock.expect_render()
            .times(1)
            .returning(|_, _, _| Err(RenderError::Io(std::io::Error::other("disk gone"))));
        let service = GenericIconService::new(Arc::new(mock));
        let media = MediaDescriptor::video("mkv");

        assert!(service.generic_icon(Some(&media), None).is_none());
        assert!(service.generic_icon(Some(&media), None).is_none());
    }

    #[test]
    fn test_absent_descriptor_touches_nothing() {
        let mut mock = MockLabelRendererPort::new();
        mock.expect_render().never();
        let service = GenericIconService::new(Arc::new(mock));

        assert!(service.generic_icon(None, None).is_none());
        assert!(service.generic_icon(Some(&MediaDescriptor::default()), None).is_none());

        let stats = service.cache_stats();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.hits + stats.misses, 0);
    }

    #[test]
    fn test_concurrent_requests_render_once() {
        let renderer = Arc::new(CountingRenderer::new().with_delay(Duration::from_millis(20)));
        let service = GenericIconService::new(renderer.clone());
        let media = MediaDescriptor::video("matroska");
        let jpeg = RendererPreference::new(true);

        let results: Vec<Vec<u8>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| service.generic_icon(Some(&media), Some(&jpeg))))
                .collect();
            handles
                .into_iter()
                .map(|h| read_all(h.join().unwrap().unwrap()))
                .collect()
        });

        assert_eq!(renderer.calls(), 1);
        assert_eq!(service.cache_stats().entries, 1);
        assert!(results.iter().all(|r| r.as_slice() == b"JPEG:video:Matroska"));
    }

    #[test]
    fn test_debug_does_not_wait_for_cache_lock() {
        let (_, service) = counting();
        let _ = service.generic_icon(Some(&MediaDescriptor::audio("mp3")), None);
        assert!(format!("{service:?}").contains("LabelCache"));

        let _guard = service.cache.lock();
        assert!(format!("{service:?}").contains("<locked>"));
    }

    #[tokio::test]
    async fn test_async_variant() {
        let renderer = Arc::new(CountingRenderer::new());
        let service = Arc::new(GenericIconService::new(renderer.clone()));

        let first = service
            .clone()
            .generic_icon_async(Some(MediaDescriptor::audio("ogg")), None)
            .await;
        let second = service
            .clone()
            .generic_icon_async(Some(MediaDescriptor::audio("ogg")), None)
            .await;

        assert_eq!(first.unwrap().into_bytes(), second.unwrap().into_bytes());
        assert_eq!(renderer.calls(), 1);
        assert!(service.generic_icon_async(None, None).await.is_none());
    }

    mod end_to_end {
        use super::*;
        use image::ImageFormat;

        fn service() -> GenericIconService {
            GenericIconService::from_config(&AppConfig::default()).unwrap()
        }

        #[test]
        fn test_mp3_audio_png() {
            let service = service();
            let media = MediaDescriptor::audio("mp3");
            let pref = RendererPreference::new(false);

            let bytes = read_all(service.generic_icon(Some(&media), Some(&pref)).unwrap());

            assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
            let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (256, 256));

            let templates = TemplateStore::bundled();
            let audio = templates.template(IconCategory::Audio).unwrap().to_rgba8();
            let stamped = img
                .enumerate_pixels()
                .filter(|&(x, y, p)| (16..80).contains(&y) && audio.get_pixel(x, y) != p)
                .count();
            assert!(stamped > 50);
            assert!(
                img.enumerate_pixels()
                    .filter(|&(_, y, _)| y >= 96)
                    .all(|(x, y, p)| audio.get_pixel(x, y) == p)
            );

            let again = read_all(service.generic_icon(Some(&media), Some(&pref)).unwrap());
            assert_eq!(bytes, again);
        }

        #[test]
        fn test_matroska_video_jpeg() {
            let service = service();
            let media = MediaDescriptor::video("matroska");
            let pref = RendererPreference::new(true);

            let stream = service.generic_icon(Some(&media), Some(&pref)).unwrap();

            assert_eq!(image::guess_format(stream.as_bytes()).unwrap(), ImageFormat::Jpeg);
            let stats = service.cache_stats();
            assert_eq!((stats.entries, stats.misses), (1, 1));
        }

        #[test]
        fn test_absent_descriptor() {
            let service = service();
            assert!(service.generic_icon(None, Some(&RendererPreference::new(true))).is_none());
            assert_eq!(service.cache_stats().entries, 0);
        }

        #[test]
        fn test_missing_templates_dir_yields_absence() {
            let dir = tempfile::TempDir::new().unwrap();
            let config = AppConfig {
                templates_dir: Some(dir.path().to_path_buf()),
                ..AppConfig::default()
            };
            let service = GenericIconService::from_config(&config).unwrap();

            assert!(service.generic_icon(Some(&MediaDescriptor::audio("mp3")), None).is_none());
            assert_eq!(service.cache_stats().unavailable, 1);
        }

        #[test]
        fn test_bad_font_path_fails_construction() {
            let config = AppConfig {
                font_path: Some("/nonexistent/bold.ttf".into()),
                ..AppConfig::default()
            };
            assert!(matches!(
                GenericIconService::from_config(&config),
                Err(RenderError::Io(_))
            ));
        }
    }
}
