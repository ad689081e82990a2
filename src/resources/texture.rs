use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::resources::image::Image;

/// Shared texture handle. Handles are handed out before the pixels arrive;
/// the draw loop checks [`Texture::is_ready`] before sampling.
pub type TextureHandle = Arc<Texture>;

/// Load progress of a texture's pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The load was issued and has not completed yet.
    Pending,
    /// Pixels are available.
    Ready,
    /// Reading or decoding failed; the texture stays empty.
    Failed,
}

#[derive(Debug)]
enum Slot {
    Pending,
    Ready(Image),
    Failed,
}

// ============================================================================
// Texture Asset
// ============================================================================

#[derive(Debug)]
pub struct Texture {
    pub name: String,

    /// Flip rows at upload time. Defaults to `true`, matching image files
    /// whose first row is the top of the picture.
    flip_y: AtomicBool,
    slot: RwLock<Slot>,

    version: AtomicU64,
}

impl Texture {
    /// Creates a texture whose pixels will be supplied later.
    #[must_use]
    pub fn pending(name: &str) -> Self {
        Self {
            name: name.to_string(),
            flip_y: AtomicBool::new(true),
            slot: RwLock::new(Slot::Pending),
            version: AtomicU64::new(0),
        }
    }

    /// Creates a texture that is immediately ready.
    #[must_use]
    pub fn from_image(name: &str, image: Image) -> Self {
        let texture = Self::pending(name);
        texture.resolve(image);
        texture
    }

    /// 1x1 texture of a single RGBA8 color.
    #[must_use]
    pub fn create_solid_color(name: &str, color: [u8; 4]) -> Self {
        Self::from_image(name, Image::new(name, 1, 1, color.to_vec()))
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        match &*self.slot.read() {
            Slot::Pending => LoadState::Pending,
            Slot::Ready(_) => LoadState::Ready,
            Slot::Failed => LoadState::Failed,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state() == LoadState::Ready
    }

    #[must_use]
    pub fn image(&self) -> Option<Image> {
        match &*self.slot.read() {
            Slot::Ready(image) => Some(image.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn flip_y(&self) -> bool {
        self.flip_y.load(Ordering::Acquire)
    }

    pub fn set_flip_y(&self, flip_y: bool) {
        if self.flip_y.swap(flip_y, Ordering::AcqRel) != flip_y {
            self.needs_update();
        }
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Relaxed)
    }

    pub fn needs_update(&self) {
        self.version.fetch_add(1, Ordering::Relaxed);
    }

    /// Pixel rows as the renderer should upload them, honoring `flip_y`.
    /// `None` while the texture is not ready.
    #[must_use]
    pub fn pixels_for_upload(&self) -> Option<Vec<u8>> {
        let image = self.image()?;
        Some(if self.flip_y() {
            image.flipped_rows()
        } else {
            image.data().to_vec()
        })
    }

    pub(crate) fn resolve(&self, image: Image) {
        *self.slot.write() = Slot::Ready(image);
        self.needs_update();
    }

    pub(crate) fn fail(&self) {
        *self.slot.write() = Slot::Failed;
        self.needs_update();
    }
}
