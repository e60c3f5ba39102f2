//! Scrawl Rasterizer
//!
//! CPU rasterization of committed strokes onto an RGBA8 buffer:
//!
//! - Background fill, then strokes composited source-over in commit order
//! - Device-independent widths scaled to pixels by a density factor
//! - Round caps and per-sample discs, anti-aliased via signed distance
//! - Deterministic output for identical input
//!
//! The output `Framebuffer` carries pixel access and diff helpers used by
//! exports and visual assertions.

pub mod framebuffer;
pub mod rasterize;

pub use framebuffer::Framebuffer;
pub use rasterize::{rasterize, RasterError};
