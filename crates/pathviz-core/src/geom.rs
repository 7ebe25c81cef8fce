//! Grid positions and grid extents.
//!
//! A [`Point`] is `x` = column and `y` = row, both 0-based; pixel positions
//! reuse the type with the same orientation. [`Bounds`] is the `width ×
//! height` block of cells anchored at the origin that a grid covers.

use std::fmt;

/// A cell or pixel position. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours in search order: up, left, down, right.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let Self { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x - 1, y),
            Self::new(x, y + 1),
            Self::new(x + 1, y),
        ]
    }

    /// Top-left pixel of the cell at this position.
    #[inline]
    pub const fn to_pixel(self, cell_size: i32) -> Self {
        Self::new(
            self.x.saturating_mul(cell_size),
            self.y.saturating_mul(cell_size),
        )
    }

    /// Position of the cell containing this pixel. Negative pixels map to
    /// negative positions.
    #[inline]
    pub const fn from_pixel(self, cell_size: i32) -> Self {
        Self::new(self.x.div_euclid(cell_size), self.y.div_euclid(cell_size))
    }
}

/// Row-major: by row first, then by column.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The extent of a grid in cells, from `(0, 0)` inclusive to
/// `(width, height)` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Negative sizes are clamped to zero.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Enough cells of `cell_size` pixels to cover `viewport`, rounding
    /// partial cells up. `cell_size` must be positive.
    pub fn covering(viewport: Point, cell_size: i32) -> Self {
        let cells = |px: i32| {
            if px <= 0 {
                0
            } else {
                (px as u32).div_ceil(cell_size as u32) as i32
            }
        };
        Self::new(cells(viewport.x), cells(viewport.y))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Row-major index of `p`, or `None` outside the bounds.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn point_at(self, index: usize) -> Option<Point> {
        if index >= self.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Point::new((index % w) as i32, (index / w) as i32))
    }

    /// Every position in row-major order.
    pub fn points(self) -> impl ExactSizeIterator<Item = Point> {
        let w = self.width.max(1) as usize;
        (0..self.len()).map(move |i| Point::new((i % w) as i32, (i / w) as i32))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
