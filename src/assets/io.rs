use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{Result, ShowcaseError};

/// Path of a named image under the fixed `/<name>.png` convention.
#[must_use]
pub fn texture_path(name: &str) -> String {
    format!("/{name}.png")
}

/// Bare asset name of a URI: `/Classic.png` becomes `Classic`.
#[must_use]
pub fn asset_name(uri: &str) -> &str {
    let file = uri.rsplit('/').next().unwrap_or(uri);
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}

/// Reads asset bytes from a local directory.
///
/// URIs are resolved against the root the way a web server resolves them
/// against its public directory: `/FalloutBoy.png` maps to
/// `<root>/FalloutBoy.png`.
#[derive(Debug, Clone)]
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    #[must_use]
    pub fn resolve(&self, uri: &str) -> PathBuf {
        self.root_path.join(uri.trim_start_matches('/'))
    }

    /// Reads the whole file. Must run inside the asset runtime.
    pub async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.resolve(uri);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ShowcaseError::AssetNotFound(path.display().to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
