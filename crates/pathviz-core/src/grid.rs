//! The [`Grid`] type: owns every [`Cell`], their 4-way adjacency, the
//! start/target endpoints and the wall and weighted-zone sets.
//!
//! The grid is laid over a pixel viewport: it is `ceil(viewport / cell_size)`
//! cells on each axis, stored row-major so that a [`CellId`] is a direct
//! index into the cell table.

use std::collections::BTreeSet;
use std::fmt;

use crate::cell::{Cell, CellId, Terrain};
use crate::geom::{Bounds, Point};

// ---------------------------------------------------------------------------
// GridConfig / GridError
// ---------------------------------------------------------------------------

/// Construction parameters for a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Edge length of a cell in pixels.
    pub cell_size: i32,
    /// Viewport size in pixels.
    pub viewport: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 30,
            viewport: Point::new(1280, 720),
        }
    }
}

/// Upper bound on the number of cells in a grid.
pub const MAX_CELLS: usize = 1 << 24;

/// Errors building or resizing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Cell size must be positive.
    InvalidCellSize(i32),
    /// The viewport yields fewer than two cells, so start and target cannot
    /// be distinct.
    TooSmall { width: i32, height: i32 },
    /// The viewport yields more than [`MAX_CELLS`] cells.
    TooLarge { width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize(s) => write!(f, "grid: invalid cell size {s}"),
            Self::TooSmall { width, height } => {
                write!(f, "grid: {width}x{height} cells is too small, need at least 2")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} cells exceeds the limit of {MAX_CELLS}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of cells with start/target endpoints.
///
/// Invariants: start ≠ target, neither endpoint is a wall or weighted, and
/// `walls` / `weighted` always match the terrain stored on the cells.
#[derive(Debug, Clone)]
pub struct Grid {
    cell_size: i32,
    viewport: Point,
    bounds: Bounds,
    cells: Vec<Cell>,
    start: CellId,
    target: CellId,
    walls: BTreeSet<CellId>,
    weighted: BTreeSet<CellId>,
}

impl Grid {
    /// Build a grid covering `config.viewport` and place the default
    /// endpoints.
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        let bounds = cell_bounds(config.cell_size, config.viewport)?;
        let mut grid = Self {
            cell_size: config.cell_size,
            viewport: config.viewport,
            bounds,
            cells: build_cells(bounds, config.cell_size),
            start: CellId::FIRST,
            target: CellId::FIRST,
            walls: BTreeSet::new(),
            weighted: BTreeSet::new(),
        };
        grid.pick_default_start_and_target();
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Viewport size in pixels.
    #[inline]
    pub fn viewport(&self) -> Point {
        self.viewport
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Extent in cells.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> CellId {
        self.start
    }

    #[inline]
    pub fn target(&self) -> CellId {
        self.target
    }

    /// Whether `id` is the start or the target.
    #[inline]
    pub fn is_endpoint(&self, id: CellId) -> bool {
        id == self.start || id == self.target
    }

    /// Wall ids in ascending order.
    #[inline]
    pub fn walls(&self) -> &BTreeSet<CellId> {
        &self.walls
    }

    /// Weighted-zone ids in ascending order.
    #[inline]
    pub fn weighted(&self) -> &BTreeSet<CellId> {
        &self.weighted
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// O(1) lookup. `None` for id 0 or ids past the last cell.
    #[inline]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index()?)
    }

    /// Mutable lookup, used by search executors to update search state.
    #[inline]
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        let i = id.index()?;
        self.cells.get_mut(i)
    }

    /// The id of the cell at grid position `pos` (x = column, y = row).
    #[inline]
    pub fn id_at(&self, pos: Point) -> Option<CellId> {
        let index = self.bounds.index_of(pos)?;
        Some(CellId(index as u32 + 1))
    }

    /// The cell under pixel `(px, py)`, or `None` outside the grid.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<&Cell> {
        let id = self.id_at(Point::new(px, py).from_pixel(self.cell_size))?;
        self.cell(id)
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// Place the start a quarter across and the target three quarters
    /// across the viewport, both at mid height. Marks on either cell are
    /// cleared.
    pub fn pick_default_start_and_target(&mut self) {
        let last_x = (self.viewport.x - 1).max(0);
        let mid_y = (self.viewport.y / 2).clamp(0, (self.viewport.y - 1).max(0));
        let start_px = Point::new(self.viewport.x / 4, mid_y);
        // ceil(3w / 4), widened so large viewports cannot overflow.
        let three_quarters = ((i64::from(self.viewport.x) * 3 + 3) / 4) as i32;
        let target_px = Point::new(three_quarters.min(last_x), mid_y);

        let start = self
            .cell_at(start_px.x, start_px.y)
            .map_or(CellId::FIRST, Cell::id);
        let mut target = self
            .cell_at(target_px.x, target_px.y)
            .map_or(CellId::FIRST, Cell::id);
        if start == target {
            target = if (start.0 as usize) < self.cells.len() {
                CellId(start.0 + 1)
            } else {
                CellId(start.0 - 1)
            };
        }

        self.clear_mark(start);
        self.clear_mark(target);
        self.start = start;
        self.target = target;
        log::debug!("default endpoints: start {start}, target {target}");
    }

    /// Move the start to `id`. Returns `false` (and changes nothing) if `id`
    /// does not exist or is the target. A mark on `id` is cleared.
    pub fn set_start(&mut self, id: CellId) -> bool {
        if id == self.target || self.cell(id).is_none() {
            return false;
        }
        self.clear_mark(id);
        self.start = id;
        true
    }

    /// Move the target to `id`. Same rules as [`set_start`](Self::set_start).
    pub fn set_target(&mut self, id: CellId) -> bool {
        if id == self.start || self.cell(id).is_none() {
            return false;
        }
        self.clear_mark(id);
        self.target = id;
        true
    }

    // -----------------------------------------------------------------------
    // Marks
    // -----------------------------------------------------------------------

    /// Turn an open or weighted cell into a wall, or with `allow_toggle_off`
    /// turn a wall back into an open cell. Endpoints and unknown ids are
    /// ignored. Returns whether anything changed.
    pub fn toggle_wall(&mut self, id: CellId, allow_toggle_off: bool) -> bool {
        if self.is_endpoint(id) {
            return false;
        }
        let Some(cell) = self.cell_mut(id) else {
            return false;
        };
        match cell.terrain {
            Terrain::Open | Terrain::Weighted => {
                cell.terrain = Terrain::Wall;
                self.weighted.remove(&id);
                self.walls.insert(id);
                true
            }
            Terrain::Wall if allow_toggle_off => {
                cell.terrain = Terrain::Open;
                self.walls.remove(&id);
                true
            }
            Terrain::Wall => false,
        }
    }

    /// Turn an open cell into a weighted zone, or with `allow_toggle_off`
    /// clear an existing one. Walls, endpoints and unknown ids are ignored.
    /// Returns whether anything changed.
    pub fn toggle_weighted(&mut self, id: CellId, allow_toggle_off: bool) -> bool {
        if self.is_endpoint(id) {
            return false;
        }
        let Some(cell) = self.cell_mut(id) else {
            return false;
        };
        match cell.terrain {
            Terrain::Open => {
                cell.terrain = Terrain::Weighted;
                self.weighted.insert(id);
                true
            }
            Terrain::Weighted if allow_toggle_off => {
                cell.terrain = Terrain::Open;
                self.weighted.remove(&id);
                true
            }
            Terrain::Weighted | Terrain::Wall => false,
        }
    }

    /// Restore every cell to open terrain.
    pub fn clear_all_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.terrain = Terrain::Open;
        }
        self.walls.clear();
        self.weighted.clear();
    }

    /// Clear parent/g/h/f on every cell. Terrain is untouched.
    pub fn reset_search_state(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.search = Default::default();
        }
    }

    fn clear_mark(&mut self, id: CellId) {
        if let Some(cell) = self.cell_mut(id) {
            cell.terrain = Terrain::Open;
        }
        self.walls.remove(&id);
        self.weighted.remove(&id);
    }

    fn set_terrain(&mut self, id: CellId, terrain: Terrain) {
        let Some(cell) = self.cell_mut(id) else {
            return;
        };
        cell.terrain = terrain;
        match terrain {
            Terrain::Wall => {
                self.walls.insert(id);
            }
            Terrain::Weighted => {
                self.weighted.insert(id);
            }
            Terrain::Open => {}
        }
    }

    // -----------------------------------------------------------------------
    // Resize
    // -----------------------------------------------------------------------

    /// Rebuild the grid for a new viewport of `width × height` pixels.
    ///
    /// Marks and endpoints are carried over by (row, col); anything that
    /// falls outside the new bounds is dropped. If either endpoint is lost
    /// both are re-placed with
    /// [`pick_default_start_and_target`](Self::pick_default_start_and_target).
    /// On error the grid is left unchanged.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), GridError> {
        let viewport = Point::new(width, height);
        let bounds = cell_bounds(self.cell_size, viewport)?;

        let pos_of = |id: &CellId| self.cell(*id).map(Cell::pos);
        let walls: Vec<Point> = self.walls.iter().filter_map(pos_of).collect();
        let weighted: Vec<Point> = self.weighted.iter().filter_map(pos_of).collect();
        let start = pos_of(&self.start);
        let target = pos_of(&self.target);

        self.viewport = viewport;
        self.bounds = bounds;
        self.cells = build_cells(bounds, self.cell_size);
        self.walls.clear();
        self.weighted.clear();

        for (positions, terrain) in [(walls, Terrain::Wall), (weighted, Terrain::Weighted)] {
            for p in positions {
                if let Some(id) = self.id_at(p) {
                    self.set_terrain(id, terrain);
                }
            }
        }

        match (
            start.and_then(|p| self.id_at(p)),
            target.and_then(|p| self.id_at(p)),
        ) {
            (Some(s), Some(t)) => {
                self.start = s;
                self.target = t;
            }
            _ => self.pick_default_start_and_target(),
        }

        log::debug!(
            "grid resized to {}x{} cells ({} walls, {} weighted)",
            self.width(),
            self.height(),
            self.walls.len(),
            self.weighted.len()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

fn cell_bounds(cell_size: i32, viewport: Point) -> Result<Bounds, GridError> {
    if cell_size <= 0 {
        return Err(GridError::InvalidCellSize(cell_size));
    }
    let bounds = Bounds::covering(viewport, cell_size);
    let (width, height) = (bounds.width(), bounds.height());
    match bounds.len() {
        0 | 1 => Err(GridError::TooSmall { width, height }),
        n if n > MAX_CELLS => Err(GridError::TooLarge { width, height }),
        _ => Ok(bounds),
    }
}

fn build_cells(bounds: Bounds, cell_size: i32) -> Vec<Cell> {
    let id_of = |p: Point| bounds.index_of(p).map(|i| CellId(i as u32 + 1));
    bounds
        .points()
        .enumerate()
        .map(|(i, p)| {
            let adjacent = p.neighbors_4().map(id_of);
            Cell::new(CellId(i as u32 + 1), p, cell_size, adjacent)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Direction;

    fn grid(cols: i32, rows: i32) -> Grid {
        Grid::new(&GridConfig {
            cell_size: 10,
            viewport: Point::new(cols * 10, rows * 10),
        })
        .unwrap()
    }

    #[test]
    fn build_row_major_ids() {
        let g = grid(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        for (i, cell) in g.cells().iter().enumerate() {
            assert_eq!(cell.id(), CellId(i as u32 + 1));
            assert_eq!(g.id_at(cell.pos()), Some(cell.id()));
        }
        let c = g.cell(CellId(6)).unwrap();
        assert_eq!((c.row(), c.col()), (1, 1));
        assert_eq!(c.pixel(), Point::new(10, 10));
    }

    #[test]
    fn partial_viewport_rounds_up() {
        let g = Grid::new(&GridConfig {
            cell_size: 30,
            viewport: Point::new(100, 61),
        })
        .unwrap();
        assert_eq!((g.width(), g.height()), (4, 3));
    }

    #[test]
    fn adjacency_stops_at_boundary() {
        let g = grid(3, 3);
        let corner = g.cell(CellId(1)).unwrap();
        assert_eq!(corner.adjacent(Direction::Up), None);
        assert_eq!(corner.adjacent(Direction::Left), None);
        assert_eq!(corner.adjacent(Direction::Down), Some(CellId(4)));
        assert_eq!(corner.adjacent(Direction::Right), Some(CellId(2)));

        // No wraparound from the end of one row to the start of the next.
        let east = g.cell(CellId(3)).unwrap();
        assert_eq!(east.adjacent(Direction::Right), None);
        let west = g.cell(CellId(4)).unwrap();
        assert_eq!(west.adjacent(Direction::Left), None);

        let center = g.cell(CellId(5)).unwrap();
        assert_eq!(
            center.neighbors().collect::<Vec<_>>(),
            vec![CellId(2), CellId(4), CellId(8), CellId(6)]
        );
    }

    #[test]
    fn invalid_lookups_return_none() {
        let g = grid(3, 3);
        assert!(g.cell(CellId(0)).is_none());
        assert!(g.cell(CellId(10)).is_none());
        assert!(g.cell_at(-1, 5).is_none());
        assert!(g.cell_at(30, 5).is_none());
        assert!(g.id_at(Point::new(3, 0)).is_none());
    }

    #[test]
    fn cell_at_floors_pixels() {
        let g = grid(3, 3);
        assert_eq!(g.cell_at(0, 0).map(Cell::id), Some(CellId(1)));
        assert_eq!(g.cell_at(19, 9).map(Cell::id), Some(CellId(2)));
        assert_eq!(g.cell_at(25, 21).map(Cell::id), Some(CellId(9)));
    }

    #[test]
    fn rejects_degenerate_configs() {
        let bad_size = GridConfig {
            cell_size: 0,
            viewport: Point::new(100, 100),
        };
        assert_eq!(Grid::new(&bad_size).unwrap_err(), GridError::InvalidCellSize(0));
        let one_cell = GridConfig {
            cell_size: 10,
            viewport: Point::new(10, 10),
        };
        assert!(matches!(
            Grid::new(&one_cell),
            Err(GridError::TooSmall { width: 1, height: 1 })
        ));
    }

    #[test]
    fn huge_viewports_are_rejected_or_coarse() {
        let huge = Point::new(i32::MAX, i32::MAX);
        let fine = GridConfig {
            cell_size: 1,
            viewport: huge,
        };
        assert!(matches!(
            Grid::new(&fine),
            Err(GridError::TooLarge { .. })
        ));
        let one_cell = GridConfig {
            cell_size: i32::MAX,
            viewport: huge,
        };
        assert!(matches!(
            Grid::new(&one_cell),
            Err(GridError::TooSmall { width: 1, height: 1 })
        ));

        // A wide viewport with coarse cells still places its endpoints.
        let mut g = Grid::new(&GridConfig {
            cell_size: 1 << 28,
            viewport: Point::new(i32::MAX, 100),
        })
        .unwrap();
        assert_eq!((g.width(), g.height()), (8, 1));
        assert_eq!(g.cell(g.start()).unwrap().pos(), Point::new(1, 0));
        assert_eq!(g.cell(g.target()).unwrap().pos(), Point::new(6, 0));

        g.resize(i32::MAX, i32::MAX).unwrap();
        assert_eq!((g.width(), g.height()), (8, 8));

        let mut g = grid(4, 4);
        assert!(matches!(
            g.resize(i32::MAX, i32::MAX),
            Err(GridError::TooLarge { .. })
        ));
        assert_eq!((g.width(), g.height()), (4, 4));
    }

    #[test]
    fn default_endpoints_quarter_and_three_quarters() {
        let g = grid(8, 5);
        let s = g.cell(g.start()).unwrap();
        let t = g.cell(g.target()).unwrap();
        assert_eq!(s.pos(), Point::new(2, 2));
        assert_eq!(t.pos(), Point::new(6, 2));
    }

    #[test]
    fn default_endpoints_distinct_on_narrow_grid() {
        let g = grid(1, 2);
        assert_ne!(g.start(), g.target());
        assert_eq!(g.start(), CellId(2));
        assert_eq!(g.target(), CellId(1));

        let g = grid(1, 3);
        assert_eq!(g.start(), CellId(2));
        assert_eq!(g.target(), CellId(3));
    }

    #[test]
    fn default_endpoints_clear_marks() {
        let mut g = grid(8, 5);
        let (s, t) = (g.start(), g.target());
        g.set_start(CellId(1));
        g.set_target(CellId(2));
        g.toggle_wall(s, true);
        g.toggle_weighted(t, true);
        g.pick_default_start_and_target();
        assert_eq!((g.start(), g.target()), (s, t));
        assert!(g.walls().is_empty());
        assert!(g.weighted().is_empty());
        assert!(g.cell(s).unwrap().walkable());
        assert!(!g.cell(t).unwrap().weighted());
    }

    #[test]
    fn toggle_wall_and_back() {
        let mut g = grid(5, 5);
        let id = CellId(1);
        assert!(g.toggle_wall(id, true));
        assert!(!g.cell(id).unwrap().walkable());
        assert!(g.walls().contains(&id));

        // Dragging over an existing wall leaves it.
        assert!(!g.toggle_wall(id, false));
        assert!(g.walls().contains(&id));

        assert!(g.toggle_wall(id, true));
        assert!(g.cell(id).unwrap().walkable());
        assert!(g.walls().is_empty());
    }

    #[test]
    fn wall_replaces_weighted() {
        let mut g = grid(5, 5);
        let id = CellId(3);
        assert!(g.toggle_weighted(id, true));
        assert!(g.weighted().contains(&id));
        assert!(g.toggle_wall(id, true));
        assert_eq!(g.cell(id).unwrap().terrain(), Terrain::Wall);
        assert!(g.weighted().is_empty());
        assert!(g.walls().contains(&id));
    }

    #[test]
    fn weighted_ignores_walls() {
        let mut g = grid(5, 5);
        let id = CellId(3);
        g.toggle_wall(id, true);
        assert!(!g.toggle_weighted(id, true));
        assert_eq!(g.cell(id).unwrap().terrain(), Terrain::Wall);
        assert!(g.weighted().is_empty());
    }

    #[test]
    fn weighted_toggle_off_needs_permission() {
        let mut g = grid(5, 5);
        let id = CellId(4);
        g.toggle_weighted(id, true);
        assert!(!g.toggle_weighted(id, false));
        assert!(g.cell(id).unwrap().weighted());
        assert!(g.toggle_weighted(id, true));
        assert!(!g.cell(id).unwrap().weighted());
        assert!(g.weighted().is_empty());
    }

    #[test]
    fn endpoints_cannot_be_marked() {
        let mut g = grid(5, 5);
        let (s, t) = (g.start(), g.target());
        assert!(!g.toggle_wall(s, true));
        assert!(!g.toggle_wall(t, true));
        assert!(!g.toggle_weighted(s, true));
        assert!(!g.toggle_weighted(t, true));
        assert!(g.walls().is_empty());
        assert!(g.weighted().is_empty());
    }

    #[test]
    fn set_endpoint_rules() {
        let mut g = grid(5, 5);
        let t = g.target();
        assert!(!g.set_start(t));
        assert!(!g.set_start(CellId(0)));
        assert!(!g.set_target(CellId(26)));

        g.toggle_wall(CellId(1), true);
        assert!(g.set_start(CellId(1)));
        assert_eq!(g.start(), CellId(1));
        assert!(g.cell(CellId(1)).unwrap().walkable());
        assert!(g.walls().is_empty());
    }

    #[test]
    fn clear_all_marks_restores_open_board() {
        let mut g = grid(5, 5);
        g.toggle_wall(CellId(1), true);
        g.toggle_weighted(CellId(2), true);
        g.clear_all_marks();
        assert!(g.walls().is_empty());
        assert!(g.weighted().is_empty());
        assert!(g.cells().iter().all(|c| c.terrain() == Terrain::Open));
    }

    #[test]
    fn reset_search_state_keeps_terrain() {
        let mut g = grid(5, 5);
        g.toggle_wall(CellId(1), true);
        {
            let c = g.cell_mut(CellId(2)).unwrap();
            c.search.g = 3;
            c.search.h = Some(2);
            c.search.f = 5;
            c.search.parent = Some(CellId(3));
        }
        g.reset_search_state();
        assert_eq!(g.cell(CellId(2)).unwrap().search, Default::default());
        assert!(g.walls().contains(&CellId(1)));
    }

    #[test]
    fn resize_migrates_by_position() {
        let mut g = grid(6, 6);
        g.set_start(CellId(1));
        g.set_target(CellId(2));
        // (row 1, col 1) survives, (row 4, col 5) is dropped.
        let kept_wall = g.id_at(Point::new(1, 1)).unwrap();
        let lost_wall = g.id_at(Point::new(5, 4)).unwrap();
        let kept_weight = g.id_at(Point::new(2, 3)).unwrap();
        g.toggle_wall(kept_wall, true);
        g.toggle_wall(lost_wall, true);
        g.toggle_weighted(kept_weight, true);

        g.resize(40, 50).unwrap();
        assert_eq!((g.width(), g.height()), (4, 5));

        let wall = g.id_at(Point::new(1, 1)).unwrap();
        let weight = g.id_at(Point::new(2, 3)).unwrap();
        assert_eq!(wall, CellId(6));
        assert_eq!(weight, CellId(15));
        assert_eq!(g.walls().iter().copied().collect::<Vec<_>>(), vec![wall]);
        assert_eq!(g.weighted().iter().copied().collect::<Vec<_>>(), vec![weight]);
        assert!(!g.cell(wall).unwrap().walkable());
        assert!(g.cell(weight).unwrap().weighted());
        assert_eq!(g.cells().iter().filter(|c| !c.walkable()).count(), 1);

        assert_eq!(g.start(), CellId(1));
        assert_eq!(g.target(), CellId(2));
    }

    #[test]
    fn resize_wider_renumbers_cells() {
        let mut g = grid(3, 3);
        g.set_start(CellId(1));
        g.set_target(CellId(9));
        g.toggle_wall(CellId(5), true);
        g.resize(50, 30).unwrap();
        // (2, 2) is id 13 on a 5-wide grid.
        assert_eq!(g.target(), CellId(13));
        assert!(g.walls().contains(&CellId(7)));
    }

    #[test]
    fn resize_re_picks_lost_endpoints() {
        let mut g = grid(8, 8);
        let far = g.id_at(Point::new(7, 7)).unwrap();
        g.set_target(far);
        g.resize(40, 40).unwrap();
        let s = g.cell(g.start()).unwrap().pos();
        let t = g.cell(g.target()).unwrap().pos();
        assert_eq!(s, Point::new(1, 2));
        assert_eq!(t, Point::new(3, 2));
    }

    #[test]
    fn resize_error_leaves_grid_untouched() {
        let mut g = grid(4, 4);
        g.toggle_wall(CellId(1), true);
        assert!(g.resize(5, 5).is_err());
        assert_eq!(g.len(), 16);
        assert!(g.walls().contains(&CellId(1)));
    }
}
