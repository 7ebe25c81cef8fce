use std::collections::HashSet;
use std::time::Instant;

use pathviz_core::{CellId, Cost, Direction, Grid, Point};

use crate::config::SearchOptions;
use crate::distance::manhattan;
use crate::heap::{Keyed, PriorityQueue};
use crate::search::{Executor, Progress, StepReport};

/// Open-set entry: a cell id with a copy of its `f` at insertion/update time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenNode {
    pub id: CellId,
    pub f: Cost,
}

impl Keyed for OpenNode {
    type Id = CellId;

    #[inline]
    fn id(&self) -> CellId {
        self.id
    }

    #[inline]
    fn key(&self) -> Cost {
        self.f
    }

    #[inline]
    fn set_key(&mut self, key: Cost) {
        self.f = key;
    }
}

/// Step-wise A* with a Manhattan heuristic.
///
/// `g`, `h`, `f` and the parent pointer live on the grid's cells. Every
/// move costs at least 1, so the Manhattan distance in cells never
/// overestimates and the first expansion of the target yields a cheapest
/// path.
#[derive(Debug, Clone)]
pub struct AStar {
    open: PriorityQueue<OpenNode>,
    closed: HashSet<CellId>,
    target: CellId,
    target_pos: Point,
    options: SearchOptions,
    progress: Progress,
}

impl AStar {
    /// Reset the grid's search state and open the start cell with `g = 0`.
    ///
    /// `options` must pass [`SearchOptions::validate`]; a multiplier below 1
    /// makes the heuristic overestimate. [`Search::start`](crate::Search::start)
    /// checks this for you.
    pub fn start(grid: &mut Grid, options: SearchOptions) -> Self {
        debug_assert!(options.validate().is_ok(), "invalid search options");
        grid.reset_search_state();
        let start = grid.start();
        let target = grid.target();
        let target_pos = grid.cell(target).map_or(Point::ZERO, |c| c.pos());

        let mut open = PriorityQueue::new();
        if let Some(cell) = grid.cell_mut(start) {
            let h = manhattan(cell.pos(), target_pos);
            cell.search.g = 0;
            cell.search.h = Some(h);
            cell.search.f = h;
            open.insert(OpenNode { id: start, f: h });
        }

        Self {
            open,
            closed: HashSet::new(),
            target,
            target_pos,
            options,
            progress: Progress::running(),
        }
    }

    /// Whether `id` has been expanded.
    pub fn is_closed(&self, id: CellId) -> bool {
        self.closed.contains(&id)
    }

    /// Relax the edges out of `current`.
    fn expand(&mut self, grid: &mut Grid, current: CellId) {
        let Some(cell) = grid.cell(current) else {
            return;
        };
        let current_g = cell.search.g;
        let neighbors = Direction::ALL.map(|d| cell.adjacent(d));

        for id in neighbors.into_iter().flatten() {
            if self.closed.contains(&id) {
                continue;
            }
            let Some(next) = grid.cell_mut(id) else {
                continue;
            };
            if !next.walkable() {
                continue;
            }

            let tentative_g = current_g + self.options.move_cost(next);
            let in_open = self.open.contains(id);
            if in_open && tentative_g >= next.search.g {
                continue;
            }

            let pos = next.pos();
            let h = *next
                .search
                .h
                .get_or_insert_with(|| manhattan(pos, self.target_pos));
            next.search.g = tentative_g;
            next.search.f = tentative_g + h;
            next.search.parent = Some(current);

            let f = next.search.f;
            if in_open {
                self.open.update(id, f);
            } else {
                self.open.insert(OpenNode { id, f });
            }
        }
    }

    fn trace(grid: &Grid, target: CellId) -> Vec<CellId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = grid.cell(current).and_then(|c| c.search.parent) {
            // Parent chains are acyclic; the bound only guards corrupt state.
            if path.len() > grid.len() {
                break;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

impl Executor for AStar {
    fn step(&mut self, grid: &mut Grid) -> StepReport {
        let visited_before = self.progress.visited().len();
        if self.progress.status().is_terminal() {
            return self.progress.report(visited_before, self.frontier());
        }
        let timer = Instant::now();

        match self.open.extract_min() {
            None => self.progress.fail(),
            Some(OpenNode { id: current, .. }) => {
                self.closed.insert(current);
                self.progress.visit(current);
                if current == self.target {
                    let path = Self::trace(grid, current);
                    self.progress.succeed(path, grid, &self.options);
                } else {
                    self.expand(grid, current);
                    if self.open.is_empty() {
                        self.progress.fail();
                    }
                }
            }
        }

        let frontier = self.frontier();
        self.progress
            .finish_step(visited_before, timer.elapsed(), frontier)
    }

    fn frontier(&self) -> Vec<CellId> {
        self.open.iter().map(|n| n.id).collect()
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }
}
