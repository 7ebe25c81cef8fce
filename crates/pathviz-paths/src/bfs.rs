use std::collections::HashMap;
use std::time::Instant;

use pathviz_core::{Cell, CellId, Grid};

use crate::config::SearchOptions;
use crate::queue::FifoQueue;
use crate::search::{Executor, Progress, StepReport};

/// Step-wise breadth-first search.
///
/// Every edge counts as one step, so the first time the target is dequeued
/// its predecessor chain is a shortest path by edge count. Neighbours are
/// enumerated up, left, down, right, which fixes the visit order.
#[derive(Debug, Clone)]
pub struct Bfs {
    frontier: FifoQueue<CellId>,
    /// Predecessor of every discovered cell; the start maps to `None`.
    came_from: HashMap<CellId, Option<CellId>>,
    target: CellId,
    options: SearchOptions,
    progress: Progress,
}

impl Bfs {
    /// Reset the grid's search state and seed the frontier with the start
    /// cell. `options` only affects the reported path cost.
    pub fn start(grid: &mut Grid, options: SearchOptions) -> Self {
        grid.reset_search_state();
        let start = grid.start();
        let mut frontier = FifoQueue::new();
        frontier.enqueue(start);
        let mut came_from = HashMap::new();
        came_from.insert(start, None);
        Self {
            frontier,
            came_from,
            target: grid.target(),
            options,
            progress: Progress::running(),
        }
    }

    /// Predecessor recorded for `id`, if it has been discovered.
    pub fn came_from(&self, id: CellId) -> Option<Option<CellId>> {
        self.came_from.get(&id).copied()
    }

    fn trace(&self, target: CellId) -> Vec<CellId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(&Some(prev)) = self.came_from.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

impl Executor for Bfs {
    fn step(&mut self, grid: &mut Grid) -> StepReport {
        let visited_before = self.progress.visited().len();
        if self.progress.status().is_terminal() {
            return self.progress.report(visited_before, self.frontier());
        }
        let timer = Instant::now();

        match self.frontier.dequeue() {
            None => self.progress.fail(),
            Some(current) if current == self.target => {
                let path = self.trace(current);
                self.progress.succeed(path, grid, &self.options);
            }
            Some(current) => {
                if let Some(cell) = grid.cell(current) {
                    for next in cell.neighbors() {
                        let walkable = grid.cell(next).is_some_and(Cell::walkable);
                        if walkable && !self.came_from.contains_key(&next) {
                            self.frontier.enqueue(next);
                            self.came_from.insert(next, Some(current));
                        }
                    }
                }
                self.progress.visit(current);
                if self.frontier.is_empty() {
                    self.progress.fail();
                }
            }
        }

        let frontier = self.frontier();
        self.progress
            .finish_step(visited_before, timer.elapsed(), frontier)
    }

    fn frontier(&self) -> Vec<CellId> {
        self.frontier.iter().copied().collect()
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }
}
