//! Grid fixtures shared by the unit tests.

use pathviz_core::{CellId, Grid, GridConfig, Point};

/// An open `cols × rows` grid of 10-pixel cells with the endpoints at the
/// given (x = column, y = row) positions.
pub(crate) fn grid_with(cols: i32, rows: i32, start: Point, target: Point) -> Grid {
    let mut grid = Grid::new(&GridConfig {
        cell_size: 10,
        viewport: Point::new(cols * 10, rows * 10),
    })
    .unwrap();
    let s = grid.id_at(start).unwrap();
    let t = grid.id_at(target).unwrap();
    // Order the moves so neither lands on the other endpoint's old cell.
    if t == grid.start() {
        assert!(grid.set_start(s));
        assert!(grid.set_target(t));
    } else {
        assert!(grid.set_target(t));
        assert!(grid.set_start(s));
    }
    grid
}

/// Id of the cell at 0-based `(row, col)`.
pub(crate) fn at(grid: &Grid, row: i32, col: i32) -> CellId {
    grid.id_at(Point::new(col, row)).unwrap()
}

/// Whether `path` runs from start to target over walkable, adjacent cells.
pub(crate) fn is_valid_path(grid: &Grid, path: &[CellId]) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    first == grid.start()
        && last == grid.target()
        && path
            .iter()
            .all(|&id| grid.cell(id).is_some_and(|c| c.walkable()))
        && path.windows(2).all(|w| {
            grid.cell(w[0])
                .is_some_and(|c| c.neighbors().any(|n| n == w[1]))
        })
}
