// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the decoded-image cache.
//!
//! Downloaded assets are decoded once into GPU-ready RGBA handles and kept
//! in a byte-bounded LRU keyed by URL, so navigating back to an image never
//! refetches or re-decodes it.

use crate::error::Result;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default decoded-image cache budget (32 MB).
pub const DEFAULT_IMAGE_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Maximum number of decoded images to keep regardless of size.
pub const DEFAULT_MAX_IMAGES: usize = 16;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Decoded size in bytes (RGBA).
    fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes raw downloaded bytes into an [`ImageData`].
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Byte-bounded LRU of decoded images, keyed by URL.
pub struct ImageCache {
    cache: LruCache<String, ImageData>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_IMAGES` is zero, which would indicate a build
    /// configuration error.
    pub fn new(max_bytes: usize) -> Self {
        let capacity =
            NonZeroUsize::new(DEFAULT_MAX_IMAGES).expect("DEFAULT_MAX_IMAGES must be non-zero");
        Self {
            cache: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_BYTES)
    }

    pub fn get(&mut self, url: &str) -> Option<ImageData> {
        match self.cache.get(url) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Inserts a decoded image, evicting least recently used entries until
    /// the byte budget holds. Images larger than the whole budget are not
    /// cached at all.
    pub fn insert(&mut self, url: String, image: ImageData) {
        let size = image.size_bytes();
        if size > self.max_bytes {
            return;
        }

        if let Some(previous) = self.cache.pop(&url) {
            self.current_bytes -= previous.size_bytes();
        }

        while self.current_bytes + size > self.max_bytes {
            match self.cache.pop_lru() {
                Some((_, evicted)) => {
                    self.current_bytes -= evicted.size_bytes();
                    self.stats.evictions += 1;
                }
                None => break,
            }
        }

        self.current_bytes += size;
        if let Some((_, evicted)) = self.cache.push(url, image) {
            // Capacity eviction by entry count rather than bytes.
            self.current_bytes -= evicted.size_bytes();
            self.stats.evictions += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_image(width: u32, height: u32) -> ImageData {
        ImageData {
            handle: Handle::from_rgba(width, height, vec![0_u8; (width * height * 4) as usize]),
            width,
            height,
        }
    }

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let image = image_rs::DynamicImage::new_rgba8(width, height);
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("failed to encode test png");
        bytes
    }

    #[test]
    fn decode_image_reads_dimensions() {
        let image = decode_image(&encoded_png(3, 2)).expect("decode failed");
        assert_eq!((image.width, image.height), (3, 2));
    }

    #[test]
    fn decode_image_rejects_garbage() {
        assert!(decode_image(b"not an image").is_err());
    }

    #[test]
    fn cache_returns_inserted_images() {
        let mut cache = ImageCache::with_defaults();
        cache.insert("https://x/1.png".to_string(), test_image(2, 2));

        assert!(cache.get("https://x/1.png").is_some());
        assert!(cache.get("https://x/2.png").is_none());
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn cache_evicts_least_recently_used_over_budget() {
        // Budget of exactly two 4x4 images.
        let mut cache = ImageCache::new(2 * 4 * 4 * 4);
        cache.insert("a".to_string(), test_image(4, 4));
        cache.insert("b".to_string(), test_image(4, 4));
        cache.get("a");
        cache.insert("c".to_string(), test_image(4, 4));

        assert!(cache.get("a").is_some(), "recently used entry survives");
        assert!(cache.get("b").is_none(), "oldest entry was evicted");
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn oversized_image_is_not_cached() {
        let mut cache = ImageCache::new(4);
        cache.insert("big".to_string(), test_image(10, 10));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_same_url_does_not_double_count() {
        let mut cache = ImageCache::new(4 * 4 * 4);
        cache.insert("a".to_string(), test_image(4, 4));
        cache.insert("a".to_string(), test_image(4, 4));
        assert_eq!(cache.len(), 1);
    }
}
