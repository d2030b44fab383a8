//! Readable view over a generated icon.

use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};

use bytes::Bytes;

/// An independent stream over cached icon bytes, positioned at the start.
///
/// Cloning the underlying `Bytes` is cheap, so every caller gets its own
/// cursor without copying the image.
#[derive(Debug, Clone)]
pub struct IconStream {
    inner: Cursor<Bytes>,
}

impl IconStream {
    /// Wraps encoded image bytes.
    #[must_use]
    pub fn new(bytes: Bytes) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    /// Total length of the encoded image.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    /// Returns true for a zero-length image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole encoded image, regardless of the read position.
    #[must_use]
    pub fn as_bytes(&self) -> &Bytes {
        self.inner.get_ref()
    }

    /// Consumes the stream, returning the encoded image.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.inner.into_inner()
    }
}

impl Read for IconStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for IconStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
    }
}

impl Seek for IconStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
