//! Integer pixel geometry shared by layout, hit-testing and drag tracking.

/// A point in client (or screen) pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    pub fn offset_from(self, other: Point) -> (i32, i32) {
        (self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle with an exclusive right and bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of the given size anchored at `(left, top)`.
    pub const fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Left/top inclusive, right/bottom exclusive. An empty rectangle contains nothing.
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x < self.right && pt.y >= self.top && pt.y < self.bottom
    }

    /// Horizontal midpoint, rounded toward the left edge.
    pub fn center_x(&self) -> i32 {
        self.left + self.width() / 2
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    /// The leftmost `width` pixels of this rectangle.
    pub fn left_slice(&self, width: i32) -> Rect {
        Rect::new(self.left, self.top, self.left + width, self.bottom)
    }
}
