//! The [`Cell`] type, one node of the search graph.

use std::fmt;

use crate::geom::Point;

/// Path cost unit. Every move costs at least 1.
pub type Cost = i32;

/// Sentinel cost meaning "not reached yet" (+infinity).
pub const UNREACHABLE: Cost = Cost::MAX;

/// A 1-based cell identifier, unique within the current grid layout.
///
/// For a grid `width` cells wide the id of the cell at 0-based
/// `(row, col)` is `row * width + col + 1`. Ids are invalidated by
/// [`Grid::resize`](crate::Grid::resize).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub u32);

impl CellId {
    /// The first cell of every grid.
    pub const FIRST: Self = Self(1);

    /// Zero-based index into the grid's cell table. `None` for the invalid
    /// id 0.
    #[inline]
    pub fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What occupies a cell. The three states are mutually exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Open,
    Wall,
    /// Walkable, but entering it costs the weight multiplier when
    /// weighting is enabled.
    Weighted,
}

/// Adjacency directions, in the fixed order searches enumerate them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions in search order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];
}

/// Transient per-run search fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    /// Predecessor on the best known path.
    pub parent: Option<CellId>,
    /// Best known cost from the start.
    pub g: Cost,
    /// Heuristic estimate to the target, computed at most once per run.
    pub h: Option<Cost>,
    /// `g + h`.
    pub f: Cost,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            parent: None,
            g: UNREACHABLE,
            h: None,
            f: UNREACHABLE,
        }
    }
}

/// A single grid cell.
///
/// Terrain is only changed through the owning [`Grid`](crate::Grid) so that
/// the grid's wall and weighted sets stay in sync.
#[derive(Clone, Debug)]
pub struct Cell {
    id: CellId,
    pos: Point,
    pixel: Point,
    size: i32,
    pub(crate) terrain: Terrain,
    adjacent: [Option<CellId>; 4],
    pub search: SearchState,
}

impl Cell {
    pub(crate) fn new(
        id: CellId,
        pos: Point,
        size: i32,
        adjacent: [Option<CellId>; 4],
    ) -> Self {
        Self {
            id,
            pos,
            pixel: pos.to_pixel(size),
            size,
            terrain: Terrain::Open,
            adjacent,
            search: SearchState::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Grid position: `x` is the column, `y` the row (both 0-based).
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.x
    }

    /// Top-left pixel corner.
    #[inline]
    pub fn pixel(&self) -> Point {
        self.pixel
    }

    /// Edge length in pixels.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    #[inline]
    pub fn walkable(&self) -> bool {
        self.terrain != Terrain::Wall
    }

    #[inline]
    pub fn weighted(&self) -> bool {
        self.terrain == Terrain::Weighted
    }

    /// The neighbour in direction `dir`, absent at the grid boundary.
    #[inline]
    pub fn adjacent(&self, dir: Direction) -> Option<CellId> {
        self.adjacent[dir as usize]
    }

    /// Existing neighbours in search order (up, left, down, right).
    pub fn neighbors(&self) -> impl Iterator<Item = CellId> + '_ {
        self.adjacent.iter().flatten().copied()
    }
}
