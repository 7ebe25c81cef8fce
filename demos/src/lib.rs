//! Text front end for the pathviz demo.
//!
//! Renders a [`Grid`] and the state of a search run as rows of ASCII
//! glyphs, and scatters random walls and weighted zones over a session so
//! there is something to search around.

use std::collections::HashSet;
use std::fmt::Write as _;

use pathviz_core::{CellId, Grid, Terrain};
use pathviz_paths::{Executor, Search, Session, SessionError, Status};
use rand::{Rng, RngExt};

pub const GLYPH_OPEN: char = ' ';
pub const GLYPH_WALL: char = '#';
pub const GLYPH_WEIGHTED: char = '~';
pub const GLYPH_START: char = 'S';
pub const GLYPH_TARGET: char = 'T';
pub const GLYPH_VISITED: char = '.';
pub const GLYPH_FRONTIER: char = 'o';
pub const GLYPH_PATH: char = '*';

/// Logger for the demo binary: `info` by default, with `filters` (the
/// value of `RUST_LOG`, when set) applied on top.
pub fn log_builder(filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// What a cell looks like in the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Open,
    Wall,
    Weighted,
    Start,
    Target,
    Visited,
    Frontier,
    Path,
}

impl Category {
    pub fn glyph(self) -> char {
        match self {
            Self::Open => GLYPH_OPEN,
            Self::Wall => GLYPH_WALL,
            Self::Weighted => GLYPH_WEIGHTED,
            Self::Start => GLYPH_START,
            Self::Target => GLYPH_TARGET,
            Self::Visited => GLYPH_VISITED,
            Self::Frontier => GLYPH_FRONTIER,
            Self::Path => GLYPH_PATH,
        }
    }
}

/// Per-frame lookup of the run's visited cells, frontier and path.
struct Overlay {
    visited: HashSet<CellId>,
    frontier: HashSet<CellId>,
    path: HashSet<CellId>,
}

impl Overlay {
    fn new(search: Option<&Search>) -> Self {
        match search {
            Some(s) => Self {
                visited: s.visited().iter().copied().collect(),
                frontier: s.frontier().into_iter().collect(),
                path: s.path().iter().copied().collect(),
            },
            None => Self {
                visited: HashSet::new(),
                frontier: HashSet::new(),
                path: HashSet::new(),
            },
        }
    }

    fn category(&self, grid: &Grid, id: CellId) -> Category {
        if id == grid.start() {
            return Category::Start;
        }
        if id == grid.target() {
            return Category::Target;
        }
        let terrain = grid.cell(id).map_or(Terrain::Open, |c| c.terrain());
        if terrain == Terrain::Wall {
            Category::Wall
        } else if self.path.contains(&id) {
            Category::Path
        } else if self.frontier.contains(&id) {
            Category::Frontier
        } else if self.visited.contains(&id) {
            Category::Visited
        } else if terrain == Terrain::Weighted {
            Category::Weighted
        } else {
            Category::Open
        }
    }
}

/// Category of every cell in row-major order.
pub fn categorize(grid: &Grid, search: Option<&Search>) -> Vec<Category> {
    let overlay = Overlay::new(search);
    grid.cells()
        .iter()
        .map(|c| overlay.category(grid, c.id()))
        .collect()
}

/// Draw the grid inside a one-character border, one line per row.
pub fn render(grid: &Grid, search: Option<&Search>) -> String {
    let width = grid.width().max(0) as usize;
    let border: String = std::iter::repeat_n('-', width).collect();
    let mut out = String::with_capacity((width + 3) * (grid.height().max(0) as usize + 2));
    let _ = writeln!(out, "+{border}+");
    for row in categorize(grid, search).chunks(width.max(1)) {
        out.push('|');
        out.extend(row.iter().map(|c| c.glyph()));
        out.push_str("|\n");
    }
    let _ = writeln!(out, "+{border}+");
    out
}

/// One-line result of a run: status, path length, transit time, cells
/// visited and time spent searching.
pub fn summary(search: &Search) -> String {
    let stats = search.stats();
    let outcome = match search.status() {
        Status::Success => format!(
            "path of {} moves, transit time {}",
            stats.path_len, stats.path_cost
        ),
        Status::Failure => "no path".to_string(),
        Status::Running => "still running".to_string(),
        Status::Idle => "idle".to_string(),
    };
    format!(
        "{}: {outcome}; {} cells visited in {} steps ({:.2?})",
        search.algorithm(),
        stats.visited,
        stats.steps,
        stats.elapsed
    )
}

// ---------------------------------------------------------------------------
// Scenery
// ---------------------------------------------------------------------------

/// Probabilities, in percent, used by [`scatter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scatter {
    pub wall_pct: u32,
    pub weighted_pct: u32,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            wall_pct: 25,
            weighted_pct: 10,
        }
    }
}

/// Mark random cells as walls or weighted zones. Endpoints are skipped by
/// the grid itself. Returns how many cells changed.
pub fn scatter<R: Rng>(
    session: &mut Session,
    rng: &mut R,
    odds: Scatter,
) -> Result<usize, SessionError> {
    let ids: Vec<CellId> = session.grid().cells().iter().map(|c| c.id()).collect();
    let mut changed = 0;
    for id in ids {
        let roll = rng.random_range(0..100);
        let hit = if roll < odds.wall_pct {
            session.toggle_wall(id, false)?
        } else if roll < odds.wall_pct + odds.weighted_pct {
            session.toggle_weighted(id, false)?
        } else {
            false
        };
        if hit {
            changed += 1;
        }
    }
    log::info!(
        "scattered {} walls and {} weighted cells",
        session.grid().walls().len(),
        session.grid().weighted().len()
    );
    Ok(changed)
}
