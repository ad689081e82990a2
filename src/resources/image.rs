use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::Result;

// Global Image ID generator (uses u64 for cheap map lookups)
static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
pub struct ImageInner {
    pub id: u64,
    pub label: String,
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows, top row first.
    pub data: Vec<u8>,
}

/// Decoded pixel data, cheap to clone.
#[derive(Debug, Clone)]
pub struct Image(Arc<ImageInner>);

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Image {
    #[must_use]
    pub fn new(label: &str, width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self(Arc::new(ImageInner {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            label: label.to_string(),
            width,
            height,
            data,
        }))
    }

    /// Decodes an encoded image (PNG or JPEG) into RGBA8.
    pub fn decode(label: &str, bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self::new(label, width, height, decoded.into_raw()))
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0.label
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.0.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.0.height
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.0.data
    }

    /// Pixel rows in bottom-to-top order.
    #[must_use]
    pub fn flipped_rows(&self) -> Vec<u8> {
        let row_len = self.0.width as usize * 4;
        if row_len == 0 {
            return Vec::new();
        }
        self.0
            .data
            .chunks_exact(row_len)
            .rev()
            .flatten()
            .copied()
            .collect()
    }
}
