//! Shared search-run state and the [`Executor`] interface both algorithms
//! implement.

use std::fmt;
use std::time::Duration;

use pathviz_core::{CellId, Cost, Grid};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::config::{ConfigError, SearchOptions};

/// Which search to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => f.write_str("breadth-first search"),
            Self::AStar => f.write_str("A*"),
        }
    }
}

/// Run status. `Success` and `Failure` are terminal; failure just means no
/// path exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Idle,
    Running,
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

/// What a single [`Executor::step`] changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub status: Status,
    /// Cells appended to the visited list by this step.
    pub newly_visited: Vec<CellId>,
    /// Current frontier (BFS) or open set (A*) contents.
    pub frontier: Vec<CellId>,
}

/// End-of-run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Path length in edges; 0 unless the run succeeded.
    pub path_len: usize,
    /// Sum of move costs along the path, start excluded.
    pub path_cost: Cost,
    pub visited: usize,
    pub steps: usize,
    /// Time spent inside `step` calls.
    pub elapsed: Duration,
}

/// Status, visited list, path and counters of one run.
#[derive(Clone, Debug, Default)]
pub struct Progress {
    status: Status,
    visited: Vec<CellId>,
    path: Vec<CellId>,
    path_cost: Cost,
    steps: usize,
    elapsed: Duration,
}

impl Progress {
    pub(crate) fn running() -> Self {
        Self {
            status: Status::Running,
            ..Default::default()
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Expanded cells in expansion order.
    #[inline]
    pub fn visited(&self) -> &[CellId] {
        &self.visited
    }

    /// Ids from start to target inclusive; empty unless the run succeeded.
    #[inline]
    pub fn path(&self) -> &[CellId] {
        &self.path
    }

    #[inline]
    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            path_len: self.path.len().saturating_sub(1),
            path_cost: self.path_cost,
            visited: self.visited.len(),
            steps: self.steps,
            elapsed: self.elapsed,
        }
    }

    pub(crate) fn visit(&mut self, id: CellId) {
        self.visited.push(id);
    }

    pub(crate) fn succeed(&mut self, path: Vec<CellId>, grid: &Grid, options: &SearchOptions) {
        self.path_cost = path
            .iter()
            .skip(1)
            .filter_map(|&id| grid.cell(id))
            .map(|cell| options.move_cost(cell))
            .sum();
        self.path = path;
        self.status = Status::Success;
        log::debug!(
            "path found: {} edges, cost {}, {} cells visited",
            self.path.len().saturating_sub(1),
            self.path_cost,
            self.visited.len()
        );
    }

    pub(crate) fn fail(&mut self) {
        self.status = Status::Failure;
        log::debug!("no path found after visiting {} cells", self.visited.len());
    }

    /// Account for one finished step and build its report.
    pub(crate) fn finish_step(
        &mut self,
        visited_before: usize,
        elapsed: Duration,
        frontier: Vec<CellId>,
    ) -> StepReport {
        self.steps += 1;
        self.elapsed += elapsed;
        log::trace!("step {}: {:?}", self.steps, self.status);
        self.report(visited_before, frontier)
    }

    pub(crate) fn report(&self, visited_before: usize, frontier: Vec<CellId>) -> StepReport {
        StepReport {
            status: self.status,
            newly_visited: self.visited[visited_before.min(self.visited.len())..].to_vec(),
            frontier,
        }
    }
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

/// A step-wise search over a [`Grid`].
///
/// Executors never loop or sleep on their own: each call to
/// [`step`](Self::step) expands at most one cell and returns. Stepping a
/// finished run is a no-op that repeats its terminal status.
///
/// The grid passed to `step` must be the one the run was started on, with
/// unchanged topology.
pub trait Executor {
    fn step(&mut self, grid: &mut Grid) -> StepReport;

    /// Cells currently waiting to be expanded.
    fn frontier(&self) -> Vec<CellId>;

    fn progress(&self) -> &Progress;

    #[inline]
    fn status(&self) -> Status {
        self.progress().status()
    }

    #[inline]
    fn visited(&self) -> &[CellId] {
        self.progress().visited()
    }

    #[inline]
    fn visited_count(&self) -> usize {
        self.progress().visited().len()
    }

    #[inline]
    fn path(&self) -> &[CellId] {
        self.progress().path()
    }

    #[inline]
    fn path_cost(&self) -> Cost {
        self.progress().path_cost()
    }

    #[inline]
    fn stats(&self) -> SearchStats {
        self.progress().stats()
    }
}

/// One search run of either algorithm.
#[derive(Debug, Clone)]
pub enum Search {
    Bfs(Bfs),
    AStar(AStar),
}

impl Search {
    /// Reset the grid's search state and start `algorithm` from the grid's
    /// start cell. `options` are validated first; on error the grid is left
    /// untouched.
    pub fn start(
        algorithm: Algorithm,
        grid: &mut Grid,
        options: SearchOptions,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        log::debug!(
            "running {algorithm} from {} to {}",
            grid.start(),
            grid.target()
        );
        Ok(match algorithm {
            Algorithm::Bfs => Self::Bfs(Bfs::start(grid, options)),
            Algorithm::AStar => Self::AStar(AStar::start(grid, options)),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bfs(_) => Algorithm::Bfs,
            Self::AStar(_) => Algorithm::AStar,
        }
    }

    /// Step until the run reaches a terminal status.
    pub fn run_to_end(&mut self, grid: &mut Grid) -> Status {
        while self.status() == Status::Running {
            self.step(grid);
        }
        self.status()
    }
}

impl Executor for Search {
    fn step(&mut self, grid: &mut Grid) -> StepReport {
        match self {
            Self::Bfs(s) => s.step(grid),
            Self::AStar(s) => s.step(grid),
        }
    }

    fn frontier(&self) -> Vec<CellId> {
        match self {
            Self::Bfs(s) => s.frontier(),
            Self::AStar(s) => s.frontier(),
        }
    }

    fn progress(&self) -> &Progress {
        match self {
            Self::Bfs(s) => s.progress(),
            Self::AStar(s) => s.progress(),
        }
    }
}
