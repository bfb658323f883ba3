//! Points and branch segments.

/// A point on the drawing surface.
///
/// Surface coordinates grow rightwards and downwards, so a heading of -90
/// degrees points up the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Project `length` units from this point along `angle_deg`.
    pub fn project(self, angle_deg: f64, length: f64) -> Self {
        let theta = angle_deg.to_radians();
        Self {
            x: self.x + theta.cos() * length,
            y: self.y + theta.sin() * length,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// One straight segment of the fractal tree.
///
/// Parent links are implicit: a branch at depth `d` starts where its parent
/// at depth `d - 1` ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub start: Point,
    pub end: Point,
    /// Stroke width in surface units.
    pub width: f64,
    /// Recursion depth, 0 for the trunk.
    pub depth: u32,
}

impl Branch {
    /// Segment length.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}
