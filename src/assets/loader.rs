use std::path::Path;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::assets::io::{FileAssetReader, asset_name};
use crate::errors::Result;
use crate::resources::image::Image;
use crate::resources::texture::{Texture, TextureHandle};

fn asset_runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create asset loader runtime"))
}

/// Loads image files into [`Texture`]s.
///
/// [`TextureLoader::load`] returns a handle immediately and fills it from a
/// background task; failures leave the texture in
/// [`LoadState::Failed`](crate::resources::texture::LoadState::Failed) and
/// are only logged. The blocking entry points (`load_blocking`,
/// `wait_idle`) must not be called from inside an async runtime.
pub struct TextureLoader {
    reader: Arc<FileAssetReader>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl TextureLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            reader: Arc::new(FileAssetReader::new(root)),
            pending: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn root_path(&self) -> &Path {
        self.reader.root_path()
    }

    /// Issues a load and returns the still-empty texture.
    pub fn load(&self, uri: &str) -> TextureHandle {
        let texture = Arc::new(Texture::pending(asset_name(uri)));

        let reader = Arc::clone(&self.reader);
        let target = Arc::clone(&texture);
        let uri = uri.to_string();

        let task = asset_runtime().spawn(async move {
            match fetch_image(&reader, &uri).await {
                Ok(image) => {
                    log::debug!("Texture `{uri}` ready ({}x{})", image.width(), image.height());
                    target.resolve(image);
                }
                Err(err) => {
                    log::warn!("Texture `{uri}` failed to load, rendering untextured: {err}");
                    target.fail();
                }
            }
        });

        let mut pending = self.pending.lock();
        pending.retain(|handle| !handle.is_finished());
        pending.push(task);

        texture
    }

    /// Loads and decodes a texture, propagating errors.
    ///
    /// File reads go through tokio, so the future must be driven by the
    /// asset runtime (see [`TextureLoader::load_blocking`]).
    pub async fn load_async(&self, uri: &str) -> Result<TextureHandle> {
        let image = fetch_image(&self.reader, uri).await?;
        Ok(Arc::new(Texture::from_image(asset_name(uri), image)))
    }

    pub fn load_blocking(&self, uri: &str) -> Result<TextureHandle> {
        asset_runtime().block_on(self.load_async(uri))
    }

    /// Number of issued loads that have not settled yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Blocks until every issued load has resolved or failed.
    pub fn wait_idle(&self) {
        let handles = std::mem::take(&mut *self.pending.lock());
        if handles.is_empty() {
            return;
        }

        asset_runtime().block_on(async {
            for result in futures::future::join_all(handles).await {
                if let Err(err) = result {
                    log::warn!("Texture load task aborted: {err}");
                }
            }
        });
    }
}

async fn fetch_image(reader: &FileAssetReader, uri: &str) -> Result<Image> {
    let bytes = reader.read_bytes(uri).await?;
    let label = uri.to_string();
    tokio::task::spawn_blocking(move || Image::decode(&label, &bytes)).await?
}
