// THEORY:
// The `region` module holds the "dumb" data containers describing what the
// detector finds. A `DiffRegion` is a bounding hull, not a mask: it is the
// minimal axis-aligned rectangle enclosing one connected component of
// differing pixels, and it may well cover pixels that do not differ. The
// containers carry no detection logic of their own; they only know how to
// grow, measure, and test themselves.

/// A 2D pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// The bounding rectangle of one connected component of differing pixels,
/// stored as inclusive bounds. Both dimensions are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRegion {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl DiffRegion {
    /// Creates a 1x1 region covering only the seed pixel.
    pub fn seeded_at(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grows the bounds to include the given pixel.
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Left edge of the region.
    pub fn x(&self) -> u32 {
        self.min_x
    }

    /// Top edge of the region.
    pub fn y(&self) -> u32 {
        self.min_y
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Top-left and bottom-right corners of the region.
    pub fn bounds(&self) -> (Point, Point) {
        (
            Point {
                x: self.min_x,
                y: self.min_y,
            },
            Point {
                x: self.max_x,
                y: self.max_y,
            },
        )
    }

    /// True when (x, y) lies inside the inclusive bounds.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
