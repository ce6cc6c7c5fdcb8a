//! Rect: Signed rectangles and the clipping rules shared by every primitive.
//!
//! Requests may start left of or above the origin, so all coordinates are
//! `i32`. Edges are computed in `i64` to stay clear of overflow.

/// A rectangle defined by position and size, in signed cell coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: i32,
    /// Y coordinate (row) of the top-left corner.
    pub y: i32,
    /// Width in columns.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Check if the rectangle is empty (non-positive width or height).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }

    /// Check if this rectangle misses a `width`×`height` grid entirely.
    ///
    /// Negative sizes always miss. A zero size along one axis is treated as a
    /// degenerate span at the origin of that axis, so a zero-height request on
    /// a valid row still counts as touching the grid.
    #[inline]
    pub const fn misses(&self, width: u16, height: u16) -> bool {
        self.x >= width as i32
            || self.y >= height as i32
            || self.width < 0
            || self.height < 0
            || (self.x < 0 && self.right() <= 0)
            || (self.y < 0 && self.bottom() <= 0)
    }

    /// Check if this rectangle lies entirely inside a `width`×`height` grid.
    #[inline]
    pub const fn fits_within(&self, width: u16, height: u16) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= width as i64
            && self.bottom() <= height as i64
    }

    /// Intersect this rectangle with a `width`×`height` grid.
    ///
    /// Returns `None` when the intersection is empty. The result always has
    /// non-negative coordinates and positive size.
    pub fn clip(&self, width: u16, height: u16) -> Option<Self> {
        if self.is_empty() || self.misses(width, height) {
            return None;
        }
        let left = self.x.max(0);
        let top = self.y.max(0);
        let right = self.right().min(i64::from(width));
        let bottom = self.bottom().min(i64::from(height));
        if right <= i64::from(left) || bottom <= i64::from(top) {
            return None;
        }
        // Both edges are bounded by a u16, so the casts are lossless.
        #[allow(clippy::cast_possible_truncation)]
        Some(Self::new(
            left,
            top,
            (right - i64::from(left)) as i32,
            (bottom - i64::from(top)) as i32,
        ))
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
