//! Scrawl Export
//!
//! The path from a stroke snapshot to an image in the gallery:
//!
//! - PNG encoding of rasterized framebuffers
//! - The `Storage` trait boundary (platform media stores plug in here)
//! - `DiskGallery`, a filesystem reference storage
//! - `Exporter` orchestration with typed, user-surfaceable failures

pub mod encode;
pub mod exporter;
pub mod storage;

pub use encode::encode_png;
pub use exporter::{export_name, ExportError, ExportReceipt, Exporter};
pub use storage::{DiskGallery, Storage, StorageError};
