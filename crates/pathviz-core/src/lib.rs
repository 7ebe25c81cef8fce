//! **pathviz-core**: the grid model behind the pathviz search visualiser.
//!
//! This crate provides geometry primitives, the [`Cell`] search node and
//! the [`Grid`] that owns every cell, wires 4-directional adjacency and
//! keeps the start/target endpoints and wall / weighted-zone marks
//! consistent across edits and resizes.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellId, Cost, Direction, SearchState, Terrain, UNREACHABLE};
pub use geom::{Bounds, Point};
pub use grid::{Grid, GridConfig, GridError, MAX_CELLS};
