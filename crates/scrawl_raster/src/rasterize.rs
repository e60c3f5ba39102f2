//! Stroke rasterization
//!
//! Converts an ordered stroke list into a `Framebuffer`: background fill,
//! then each stroke composited source-over in commit order. Stroke shape
//! is built from round-capped segments between consecutive samples plus a
//! disc at every sample, which fills the gaps a bare polyline leaves at
//! sharp turns. Coverage comes from a signed-distance evaluation with a
//! one-pixel anti-aliased edge.

use thiserror::Error;

use scrawl_paint::{Capsule, Color, Disc, Point, Stroke};

use crate::framebuffer::Framebuffer;

/// Rasterization failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// The canvas has not been sized yet (or is degenerate).
    #[error("canvas {width}x{height} is too small to rasterize")]
    InvalidDimensions { width: u32, height: u32 },
    /// There is nothing to draw; callers surface this as a no-op message.
    #[error("no strokes to rasterize")]
    EmptyInput,
}

/// Rasterize `strokes` onto a `width` x `height` buffer.
///
/// `density_scale` converts device-independent stroke widths to pixels.
/// Deterministic: identical inputs produce identical buffers.
pub fn rasterize(
    strokes: &[Stroke],
    width: u32,
    height: u32,
    background: Color,
    density_scale: f32,
) -> Result<Framebuffer, RasterError> {
    if width <= 1 || height <= 1 {
        return Err(RasterError::InvalidDimensions { width, height });
    }
    if strokes.is_empty() {
        return Err(RasterError::EmptyInput);
    }

    tracing::debug!(
        stroke_count = strokes.len(),
        width,
        height,
        density_scale,
        "rasterizing strokes"
    );

    let mut frame = Framebuffer::filled(width, height, background);
    for stroke in strokes {
        composite_stroke(&mut frame, stroke, density_scale);
    }
    Ok(frame)
}

/// Composite one stroke onto the frame.
///
/// Coverage is accumulated per stroke (max over its discs and capsules)
/// and blended once, so a translucent stroke does not darken where its own
/// primitives overlap.
fn composite_stroke(frame: &mut Framebuffer, stroke: &Stroke, density_scale: f32) {
    let points = stroke.points();
    if points.is_empty() {
        return;
    }

    let radius = stroke.width_px(density_scale) / 2.0;
    if radius <= 0.0 {
        tracing::debug!("skipping stroke with non-positive width");
        return;
    }

    let Some(mut mask) = CoverageMask::around(points, radius, frame.width(), frame.height())
    else {
        // Entirely off-canvas.
        return;
    };

    if points.len() == 1 {
        mask.add_disc(Disc::new(points[0], radius));
    } else {
        for pair in points.windows(2) {
            mask.add_capsule(Capsule::new(pair[0], pair[1], radius));
        }
        for &point in points {
            mask.add_disc(Disc::new(point, radius));
        }
    }

    mask.composite_onto(frame, stroke.style.color);
}

/// Per-stroke coverage accumulator over the stroke's clipped bounding box.
struct CoverageMask {
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl CoverageMask {
    /// Build a mask covering `points` inflated by `radius` plus the
    /// anti-aliasing ramp, clipped to the frame. `None` when the stroke
    /// lies entirely outside the frame.
    fn around(points: &[Point], radius: f32, frame_width: u32, frame_height: u32) -> Option<Self> {
        let pad = radius + 1.0;
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let x0 = ((min_x - pad).floor().max(0.0)) as u32;
        let y0 = ((min_y - pad).floor().max(0.0)) as u32;
        let x1 = (((max_x + pad).ceil()).min(frame_width as f32)).max(0.0) as u32;
        let y1 = (((max_y + pad).ceil()).min(frame_height as f32)).max(0.0) as u32;
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        let width = x1 - x0;
        let height = y1 - y0;
        Some(Self {
            x0,
            y0,
            width,
            height,
            coverage: vec![0.0; (width * height) as usize],
        })
    }

    fn add_disc(&mut self, disc: Disc) {
        let pad = disc.radius + 1.0;
        self.accumulate(
            disc.center.x - pad,
            disc.center.y - pad,
            disc.center.x + pad,
            disc.center.y + pad,
            |p| disc.coverage(p),
        );
    }

    fn add_capsule(&mut self, capsule: Capsule) {
        let pad = capsule.radius + 1.0;
        self.accumulate(
            capsule.a.x.min(capsule.b.x) - pad,
            capsule.a.y.min(capsule.b.y) - pad,
            capsule.a.x.max(capsule.b.x) + pad,
            capsule.a.y.max(capsule.b.y) + pad,
            |p| capsule.coverage(p),
        );
    }

    /// Max-accumulate a primitive's coverage over its bounding box
    /// intersected with the mask. Pixels are sampled at their centers.
    fn accumulate<F>(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32, coverage_at: F)
    where
        F: Fn(Point) -> f32,
    {
        let x0 = (min_x.floor().max(self.x0 as f32)) as u32;
        let y0 = (min_y.floor().max(self.y0 as f32)) as u32;
        let x1 = (max_x.ceil().min((self.x0 + self.width) as f32)).max(0.0) as u32;
        let y1 = (max_y.ceil().min((self.y0 + self.height) as f32)).max(0.0) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                let sample = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let value = coverage_at(sample);
                if value > 0.0 {
                    let idx = ((y - self.y0) * self.width + (x - self.x0)) as usize;
                    if value > self.coverage[idx] {
                        self.coverage[idx] = value;
                    }
                }
            }
        }
    }

    fn composite_onto(&self, frame: &mut Framebuffer, color: Color) {
        for y in 0..self.height {
            for x in 0..self.width {
                let value = self.coverage[(y * self.width + x) as usize];
                if value > 0.0 {
                    frame.blend_pixel(self.x0 + x, self.y0 + y, color, value);
                }
            }
        }
    }
}
