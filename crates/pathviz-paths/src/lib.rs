//! Step-wise grid searches for the pathviz visualiser.
//!
//! Two executors run over a [`pathviz_core::Grid`]:
//!
//! - **BFS** ([`Bfs`]) explores in rings from the start and finds a path
//!   with the fewest edges.
//! - **A\*** ([`AStar`]) orders its open set by `f = g + h` with a
//!   Manhattan heuristic and finds a cheapest path, optionally pricing
//!   weighted cells at [`SearchOptions::weight_multiplier`].
//!
//! Executors never block. Each [`Executor::step`] expands at most one cell
//! and returns a [`StepReport`]; the caller decides how fast to step.
//! [`Session`] bundles a grid, its settings and the current run, and
//! refuses grid edits while a run is in progress.
//!
//! The supporting containers are public too: [`FifoQueue`] for the BFS
//! frontier and [`PriorityQueue`] for the A* open set.

mod astar;
mod bfs;
mod config;
mod distance;
mod heap;
mod queue;
mod search;
mod session;

#[cfg(test)]
mod testutil;

pub use astar::{AStar, OpenNode};
pub use bfs::Bfs;
pub use config::{ConfigError, SearchOptions, SessionConfig};
pub use distance::manhattan;
pub use heap::{Keyed, PriorityQueue};
pub use queue::FifoQueue;
pub use search::{Algorithm, Executor, Progress, Search, SearchStats, Status, StepReport};
pub use session::{Session, SessionError};
