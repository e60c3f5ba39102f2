//! Geometric primitives for stroke coverage

/// A 2D point in device pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A filled disc (round stamp at a stroke point)
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Disc {
    pub center: Point,
    pub radius: f32,
}

impl Disc {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        (dx * dx + dy * dy) <= (self.radius * self.radius)
    }

    /// Signed distance from `point` to the disc boundary (negative inside).
    pub fn distance(&self, point: Point) -> f32 {
        self.center.distance_to(point) - self.radius
    }

    /// Anti-aliased coverage of the pixel centered at `point`, 0.0..=1.0,
    /// with a one-pixel falloff across the boundary.
    pub fn coverage(&self, point: Point) -> f32 {
        edge_coverage(self.distance(point))
    }
}

/// A round-capped line segment (the body of a stroke between two samples)
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Capsule {
    pub a: Point,
    pub b: Point,
    pub radius: f32,
}

impl Capsule {
    pub const fn new(a: Point, b: Point, radius: f32) -> Self {
        Self { a, b, radius }
    }

    /// Signed distance from `point` to the capsule boundary (negative inside).
    pub fn distance(&self, point: Point) -> f32 {
        let abx = self.b.x - self.a.x;
        let aby = self.b.y - self.a.y;
        let apx = point.x - self.a.x;
        let apy = point.y - self.a.y;

        let len_sq = abx * abx + aby * aby;
        // Degenerate segment collapses to a disc at `a`.
        let t = if len_sq <= f32::EPSILON {
            0.0
        } else {
            ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
        };

        let cx = self.a.x + t * abx;
        let cy = self.a.y + t * aby;
        let dx = point.x - cx;
        let dy = point.y - cy;
        (dx * dx + dy * dy).sqrt() - self.radius
    }

    /// Anti-aliased coverage of the pixel centered at `point`, 0.0..=1.0.
    pub fn coverage(&self, point: Point) -> f32 {
        edge_coverage(self.distance(point))
    }
}

/// Map a signed boundary distance to pixel coverage with a one-pixel ramp.
fn edge_coverage(distance: f32) -> f32 {
    (0.5 - distance).clamp(0.0, 1.0)
}
