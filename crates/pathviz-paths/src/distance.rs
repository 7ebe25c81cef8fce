use pathviz_core::{Cost, Point};

/// Number of single-cell moves between two grid positions when nothing is
/// in the way. Every move costs at least 1, so A* can use this as an
/// admissible `h`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as Cost
}
