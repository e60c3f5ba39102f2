//! Gallery storage boundary
//!
//! The exporter hands finished PNG bytes to a `Storage` implementation.
//! Platform media indexes, permission prompts, and retry policy live
//! behind this trait; core never branches on OS versions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage failures surfaced to the user.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The host denied the write; surfaced with an actionable prompt,
    /// never retried automatically.
    #[error("permission denied writing {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("storage write failed")]
    Io(#[from] io::Error),
}

/// Persistent destination for exported images.
pub trait Storage {
    /// Persist `bytes` under `suggested_name`, returning the stored path.
    fn store(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf, StorageError>;
}

/// Reference storage: a gallery directory on the local filesystem.
pub struct DiskGallery {
    root: PathBuf,
}

impl DiskGallery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn classify(err: io::Error, path: &Path) -> StorageError {
        if err.kind() == io::ErrorKind::PermissionDenied {
            StorageError::PermissionDenied(path.to_path_buf())
        } else {
            StorageError::Io(err)
        }
    }
}

impl Storage for DiskGallery {
    fn store(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| Self::classify(e, &self.root))?;

        let path = self.root.join(suggested_name);
        fs::write(&path, bytes).map_err(|e| Self::classify(e, &path))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "stored image");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scrawl_storage_{}_{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_store_creates_gallery_and_writes() {
        let root = scratch_dir("store");
        let gallery = DiskGallery::new(&root);

        let path = gallery.store(b"not-really-a-png", "drawing_1.png").unwrap();
        assert_eq!(path, root.join("drawing_1.png"));
        assert_eq!(fs::read(&path).unwrap(), b"not-really-a-png");

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_store_overwrites_same_name() {
        let root = scratch_dir("overwrite");
        let gallery = DiskGallery::new(&root);

        gallery.store(b"first", "drawing.png").unwrap();
        let path = gallery.store(b"second", "drawing.png").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        let _ = fs::remove_dir_all(&root);
    }
}
