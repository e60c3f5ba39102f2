//! Export orchestration
//!
//! Validate, rasterize, encode, store. The exporter consumes a snapshot of
//! the committed strokes; the session it came from is untouched by any
//! failure, so the user can always retry.

use std::path::PathBuf;

use thiserror::Error;

use scrawl_paint::{Color, Stroke};
use scrawl_raster::{rasterize, RasterError};

use crate::encode::encode_png;
use crate::storage::{Storage, StorageError};

/// Export failures, one variant per user-facing message.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Canvas not sized yet; the caller waits and retries.
    #[error("canvas {width}x{height} is not ready to export")]
    InvalidDimensions { width: u32, height: u32 },
    /// Nothing drawn; surfaced as a no-op message, not a crash.
    #[error("nothing to export; draw something first")]
    EmptyDrawing,
    #[error("permission denied writing {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("failed to encode PNG")]
    Encode(#[from] png::EncodingError),
    #[error("storage write failed")]
    Io(#[source] std::io::Error),
}

impl From<RasterError> for ExportError {
    fn from(err: RasterError) -> Self {
        match err {
            RasterError::InvalidDimensions { width, height } => {
                ExportError::InvalidDimensions { width, height }
            }
            RasterError::EmptyInput => ExportError::EmptyDrawing,
        }
    }
}

impl From<StorageError> for ExportError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::PermissionDenied(path) => ExportError::PermissionDenied(path),
            StorageError::Io(err) => ExportError::Io(err),
        }
    }
}

/// What a successful export produced.
#[derive(Clone, Debug)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Turns stroke snapshots into stored PNG images.
pub struct Exporter<S: Storage> {
    storage: S,
}

impl<S: Storage> Exporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Export `strokes` as a PNG of the current canvas size.
    ///
    /// Blocking; a host with an interactive surface runs this on its own
    /// worker. The stroke slice is a snapshot, so concurrent session
    /// mutation is impossible by construction.
    pub fn export(
        &self,
        strokes: &[Stroke],
        width: u32,
        height: u32,
        background: Color,
        density_scale: f32,
        name: &str,
    ) -> Result<ExportReceipt, ExportError> {
        let frame = rasterize(strokes, width, height, background, density_scale)?;
        let bytes = encode_png(&frame)?;
        let path = self.storage.store(&bytes, name)?;

        tracing::info!(path = %path.display(), width, height, "drawing exported");
        Ok(ExportReceipt {
            path,
            width,
            height,
        })
    }
}

/// Conventional export filename: `<prefix>_<stamp>.png`.
///
/// The stamp is caller-provided (typically wall-clock millis); the library
/// itself never reads a clock.
pub fn export_name(prefix: &str, stamp: u64) -> String {
    format!("{prefix}_{stamp}.png")
}
