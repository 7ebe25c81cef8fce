//! A [`Session`] owns one grid and at most one search run over it.

use std::fmt;
use std::time::Duration;

use pathviz_core::{Cell, CellId, Cost, Grid, GridError};

use crate::config::{ConfigError, SessionConfig};
use crate::search::{Algorithm, Executor, Search, Status, StepReport};

/// Errors reported by [`Session`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Config(ConfigError),
    Grid(GridError),
    /// The grid cannot be edited while a search is running.
    SearchRunning,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::SearchRunning => f.write_str("session: a search is running"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::SearchRunning => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Grid, settings and the current search run.
///
/// The session never sleeps or schedules: callers drive a run with
/// [`step`](Self::step) and wait [`step_interval`](Self::step_interval)
/// between calls if they want an animation. Edits that change terrain,
/// endpoints or size are refused while a run is [`Status::Running`]; a
/// finished run is discarded (and the cells' search state cleared) by the
/// first edit that changes the grid.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    search: Option<Search>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let grid = Grid::new(&config.grid)?;
        log::debug!(
            "session: {}x{} grid, start {}, target {}",
            grid.width(),
            grid.height(),
            grid.start(),
            grid.target()
        );
        Ok(Self {
            config,
            grid,
            search: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current run, finished or not.
    #[inline]
    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// Status of the current run; [`Status::Idle`] when there is none.
    pub fn status(&self) -> Status {
        self.search.as_ref().map_or(Status::Idle, |s| s.status())
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status() == Status::Running
    }

    /// Cell under pixel `(px, py)`.
    #[inline]
    pub fn cell_at(&self, px: i32, py: i32) -> Option<&Cell> {
        self.grid.cell_at(px, py)
    }

    // -----------------------------------------------------------------------
    // Runs
    // -----------------------------------------------------------------------

    /// Discard any previous run and start `algorithm` from the grid's start
    /// cell.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<Status, SessionError> {
        let search = Search::start(algorithm, &mut self.grid, self.config.search)?;
        self.search = Some(search);
        Ok(self.status())
    }

    /// Advance the current run by one step. Without a run this reports
    /// [`Status::Idle`] and changes nothing.
    pub fn step(&mut self) -> StepReport {
        match self.search.as_mut() {
            Some(search) => search.step(&mut self.grid),
            None => StepReport::default(),
        }
    }

    /// Step the current run until it finishes.
    pub fn run_to_end(&mut self) -> Status {
        match self.search.as_mut() {
            Some(search) => search.run_to_end(&mut self.grid),
            None => Status::Idle,
        }
    }

    /// Drop the current run and clear every cell's search state. Marks and
    /// endpoints stay.
    pub fn reset(&mut self) {
        if let Some(search) = self.search.take() {
            log::debug!("session: discarding {} run", search.algorithm());
        }
        self.grid.reset_search_state();
    }

    /// [`reset`](Self::reset) and remove every wall and weighted zone.
    pub fn clear(&mut self) {
        self.reset();
        self.grid.clear_all_marks();
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    fn ensure_editable(&self) -> Result<(), SessionError> {
        if self.is_running() {
            return Err(SessionError::SearchRunning);
        }
        Ok(())
    }

    /// Drop a finished run once an edit has actually changed the grid.
    fn edited(&mut self, changed: bool) -> bool {
        if changed && self.search.is_some() {
            self.reset();
        }
        changed
    }

    /// See [`Grid::toggle_wall`].
    pub fn toggle_wall(&mut self, id: CellId, allow_toggle_off: bool) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        let changed = self.grid.toggle_wall(id, allow_toggle_off);
        Ok(self.edited(changed))
    }

    /// See [`Grid::toggle_weighted`].
    pub fn toggle_weighted(
        &mut self,
        id: CellId,
        allow_toggle_off: bool,
    ) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        let changed = self.grid.toggle_weighted(id, allow_toggle_off);
        Ok(self.edited(changed))
    }

    /// Move the start to `id`. Returns whether it moved; see
    /// [`Grid::set_start`] for the cells that are refused.
    pub fn set_start(&mut self, id: CellId) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        let changed = id != self.grid.start() && self.grid.set_start(id);
        Ok(self.edited(changed))
    }

    /// Move the target to `id`. Returns whether it moved.
    pub fn set_target(&mut self, id: CellId) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        let changed = id != self.grid.target() && self.grid.set_target(id);
        Ok(self.edited(changed))
    }

    pub fn clear_all_marks(&mut self) -> Result<(), SessionError> {
        self.ensure_editable()?;
        let changed = !self.grid.walls().is_empty() || !self.grid.weighted().is_empty();
        self.grid.clear_all_marks();
        self.edited(changed);
        Ok(())
    }

    /// Rebuild the grid for a `width × height` pixel viewport. See
    /// [`Grid::resize`]. On error the grid and any finished run are kept.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.grid.resize(width, height)?;
        self.config.grid.viewport = self.grid.viewport();
        self.edited(true);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Turn weighted move costs on or off for subsequent runs.
    pub fn set_weighting(&mut self, on: bool) {
        self.config.search.weighting = on;
    }

    /// Set the cost of entering a weighted cell for subsequent runs.
    pub fn set_weight_multiplier(&mut self, multiplier: Cost) -> Result<(), SessionError> {
        if multiplier < 1 {
            return Err(ConfigError::InvalidWeightMultiplier(multiplier).into());
        }
        self.config.search.weight_multiplier = multiplier;
        Ok(())
    }

    #[inline]
    pub fn step_interval(&self) -> Duration {
        self.config.step_interval()
    }

    pub fn set_step_interval(&mut self, interval: Duration) {
        self.config.step_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{GridConfig, Point, Terrain};

    fn session(cols: i32, rows: i32) -> Session {
        Session::new(SessionConfig {
            grid: GridConfig {
                cell_size: 10,
                viewport: Point::new(cols * 10, rows * 10),
            },
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut cfg = SessionConfig::default();
        cfg.search.weight_multiplier = 0;
        assert_eq!(
            Session::new(cfg).unwrap_err(),
            SessionError::Config(ConfigError::InvalidWeightMultiplier(0))
        );

        let mut cfg = SessionConfig::default();
        cfg.grid.viewport = Point::new(30, 10);
        cfg.grid.cell_size = 30;
        assert!(matches!(
            Session::new(cfg),
            Err(SessionError::Grid(GridError::TooSmall { .. }))
        ));
    }

    #[test]
    fn idle_without_run() {
        let mut s = session(6, 4);
        assert_eq!(s.status(), Status::Idle);
        assert!(s.search().is_none());
        let report = s.step();
        assert_eq!(report, StepReport::default());
        assert_eq!(s.run_to_end(), Status::Idle);
    }

    #[test]
    fn run_steps_to_success() {
        let mut s = session(8, 5);
        assert_eq!(s.run(Algorithm::Bfs), Ok(Status::Running));
        assert!(s.is_running());
        let first = s.step();
        assert_eq!(first.newly_visited, vec![s.grid().start()]);
        assert_eq!(s.run_to_end(), Status::Success);
        let search = s.search().unwrap();
        assert_eq!(search.algorithm(), Algorithm::Bfs);
        // Default endpoints sit on the middle row, 4 columns apart.
        assert_eq!(search.stats().path_len, 4);
    }

    #[test]
    fn edits_refused_while_running() {
        let mut s = session(8, 5);
        let id = s.grid().id_at(Point::new(0, 0)).unwrap();
        s.run(Algorithm::AStar).unwrap();
        assert_eq!(s.toggle_wall(id, true), Err(SessionError::SearchRunning));
        assert_eq!(s.toggle_weighted(id, true), Err(SessionError::SearchRunning));
        assert_eq!(s.set_start(id), Err(SessionError::SearchRunning));
        assert_eq!(s.set_target(id), Err(SessionError::SearchRunning));
        assert_eq!(s.clear_all_marks(), Err(SessionError::SearchRunning));
        assert_eq!(s.resize(100, 100), Err(SessionError::SearchRunning));
        assert!(s.grid().walls().is_empty());
        assert!(s.is_running());
    }

    #[test]
    fn edit_after_finish_discards_run() {
        let mut s = session(8, 5);
        s.run(Algorithm::AStar).unwrap();
        s.run_to_end();
        let target = s.grid().target();
        assert_eq!(s.grid().cell(target).unwrap().search.g, 4);

        let id = s.grid().id_at(Point::new(0, 0)).unwrap();
        assert_eq!(s.toggle_wall(id, true), Ok(true));
        assert_eq!(s.status(), Status::Idle);
        assert!(s.grid().cells().iter().all(|c| c.search.parent.is_none()));
        assert_eq!(s.grid().cell(id).unwrap().terrain(), Terrain::Wall);
    }

    #[test]
    fn ignored_edit_keeps_finished_run() {
        let mut s = session(8, 5);
        s.run(Algorithm::Bfs).unwrap();
        assert_eq!(s.run_to_end(), Status::Success);
        let start = s.grid().start();
        let target = s.grid().target();

        assert_eq!(s.toggle_wall(start, true), Ok(false));
        assert_eq!(s.toggle_weighted(target, true), Ok(false));
        assert_eq!(s.set_start(start), Ok(false));
        assert_eq!(s.set_target(start), Ok(false));
        assert_eq!(s.clear_all_marks(), Ok(()));
        assert!(s.resize(10, 10).is_err());

        assert_eq!(s.status(), Status::Success);
        assert_eq!(s.search().unwrap().path().len(), 5);
        assert_eq!(s.grid().start(), start);
    }

    #[test]
    fn resize_after_finish_discards_run() {
        let mut s = session(8, 5);
        s.run(Algorithm::AStar).unwrap();
        s.run_to_end();
        s.resize(120, 60).unwrap();
        assert_eq!(s.status(), Status::Idle);
        assert!(s.search().is_none());
    }

    #[test]
    fn reset_keeps_marks_and_clear_removes_them() {
        let mut s = session(8, 5);
        let wall = s.grid().id_at(Point::new(0, 0)).unwrap();
        let slow = s.grid().id_at(Point::new(1, 0)).unwrap();
        s.toggle_wall(wall, true).unwrap();
        s.toggle_weighted(slow, true).unwrap();
        s.run(Algorithm::Bfs).unwrap();

        s.reset();
        assert_eq!(s.status(), Status::Idle);
        assert!(s.grid().walls().contains(&wall));
        assert!(s.grid().weighted().contains(&slow));

        s.run(Algorithm::Bfs).unwrap();
        s.clear();
        assert_eq!(s.status(), Status::Idle);
        assert!(s.grid().walls().is_empty());
        assert!(s.grid().weighted().is_empty());
    }

    #[test]
    fn running_again_replaces_previous_run() {
        let mut s = session(8, 5);
        s.run(Algorithm::Bfs).unwrap();
        s.run_to_end();
        s.run(Algorithm::AStar).unwrap();
        assert!(s.is_running());
        assert_eq!(s.search().unwrap().algorithm(), Algorithm::AStar);
        assert_eq!(s.search().unwrap().visited_count(), 0);
    }

    #[test]
    fn weighting_settings_apply_to_next_run() {
        let mut s = session(5, 3);
        // Endpoints at columns 1 and 3 of the middle row; weight between.
        let mid = s.grid().id_at(Point::new(2, 1)).unwrap();
        s.toggle_weighted(mid, true).unwrap();

        s.run(Algorithm::AStar).unwrap();
        s.run_to_end();
        assert_eq!(s.search().unwrap().path_cost(), 2);

        s.set_weighting(true);
        s.set_weight_multiplier(5).unwrap();
        s.run(Algorithm::AStar).unwrap();
        s.run_to_end();
        // Going around costs 4, through the weight 6.
        assert_eq!(s.search().unwrap().path_cost(), 4);

        assert_eq!(
            s.set_weight_multiplier(0),
            Err(SessionError::Config(ConfigError::InvalidWeightMultiplier(0)))
        );
        assert_eq!(s.config().search.weight_multiplier, 5);
    }

    #[test]
    fn resize_updates_viewport() {
        let mut s = session(8, 5);
        s.resize(120, 60).unwrap();
        assert_eq!(s.grid().width(), 12);
        assert_eq!(s.grid().height(), 6);
        assert_eq!(s.config().grid.viewport, Point::new(120, 60));
        assert!(matches!(s.resize(10, 10), Err(SessionError::Grid(_))));
        assert_eq!(s.grid().width(), 12);
    }

    #[test]
    fn step_interval_round_trip() {
        let mut s = session(4, 4);
        assert_eq!(s.step_interval(), Duration::from_millis(7));
        s.set_step_interval(Duration::from_millis(25));
        assert_eq!(s.step_interval(), Duration::from_millis(25));
    }

    #[test]
    fn cell_at_maps_pixels() {
        let s = session(4, 4);
        let cell = s.cell_at(25, 35).unwrap();
        assert_eq!(cell.pos(), Point::new(2, 3));
        assert!(s.cell_at(-1, 0).is_none());
        assert!(s.cell_at(40, 0).is_none());
    }
}
