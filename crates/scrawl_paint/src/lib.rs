//! Scrawl Paint Primitives
//!
//! Leaf crate with the drawing vocabulary shared across the workspace:
//!
//! - Points in device pixel space
//! - RGBA colors and the stock ink palette
//! - Strokes (ordered point lists plus style)
//! - Disc/capsule coverage geometry used by the CPU rasterizer

pub mod color;
pub mod geometry;
pub mod stroke;

pub use color::Color;
pub use geometry::{Capsule, Disc, Point};
pub use stroke::{Stroke, StrokeStyle};
