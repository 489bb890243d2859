//! The autosolve state machine.
//!
//! ```text
//!            toggle on               path found
//!   Idle ───────────────▶ Solving ───────────────▶ Stepping ◀─┐
//!    ▲                      │ no path                │  │      │ replanned
//!    ├──────────────────────┘                        │  ▼      │
//!    ├──────────── path consumed ────────────────────┘ Blocked ┘
//!    └──────────── replan failed / toggle off ─────────────┘
//! ```
//!
//! Solving and Blocked are passed through within a single call; they show
//! up in the [`SolverEvent::StateChanged`] stream rather than between calls.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use labyrinth_core::{Cell, Grid};
use labyrinth_paths::{AlgorithmKind, GridPather, PathFinder};

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::event::SolverEvent;

/// Where the controller is in its solve/step cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerState {
    Idle,
    Solving,
    Stepping,
    Blocked,
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Solving => "solving",
            Self::Stepping => "stepping",
            Self::Blocked => "blocked",
        })
    }
}

/// Drives the player along a planned path, one cell per step interval.
#[derive(Debug)]
pub struct AutoSolver {
    config: SolverConfig,
    state: ControllerState,
    algorithm: Option<AlgorithmKind>,
    /// Cells still to visit; the player's own cell is not included.
    path: VecDeque<Cell>,
    finder: PathFinder,
    last_step: Duration,
    solving_steps: usize,
    events: Vec<SolverEvent>,
}

impl Default for AutoSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl AutoSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            state: ControllerState::Idle,
            algorithm: None,
            path: VecDeque::new(),
            finder: PathFinder::new(),
            last_step: Duration::ZERO,
            solving_steps: 0,
            events: Vec::new(),
        }
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether autosolve is switched on.
    pub fn is_active(&self) -> bool {
        self.state != ControllerState::Idle
    }

    /// The algorithm the next solve will use.
    pub fn algorithm(&self) -> Option<AlgorithmKind> {
        self.algorithm
    }

    /// Cells still to be visited, next cell first.
    pub fn path(&self) -> &VecDeque<Cell> {
        &self.path
    }

    pub fn remaining(&self) -> usize {
        self.path.len()
    }

    /// Number of moves in the path planned by the last successful solve.
    pub fn solving_steps(&self) -> usize {
        self.solving_steps
    }

    /// Cells expanded by the most recent search, in expansion order.
    pub fn explored(&self) -> &[Cell] {
        self.finder.explored()
    }

    /// Take every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<SolverEvent> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------
    // Triggers
    // -------------------------------------------------------------------

    /// Choose the algorithm for the next solve. A path that is already being
    /// followed is not affected.
    pub fn select_algorithm(&mut self, kind: AlgorithmKind) {
        if self.algorithm != Some(kind) {
            log::debug!("autosolve algorithm set to {kind}");
        }
        self.algorithm = Some(kind);
    }

    /// Switch autosolve off when it is on, or on (planning from `player`)
    /// when it is off.
    pub fn toggle(&mut self, grid: &Grid, player: Cell) -> Result<(), SolveError> {
        if self.is_active() {
            self.stop();
            Ok(())
        } else {
            self.start(grid, player)
        }
    }

    /// Plan a path from `player` to the grid's goal with the selected
    /// algorithm and start following it. Does nothing if autosolve is
    /// already on.
    ///
    /// On failure autosolve stays off and the error is also recorded as a
    /// [`SolverEvent::Failed`].
    pub fn start(&mut self, grid: &Grid, player: Cell) -> Result<(), SolveError> {
        if self.is_active() {
            return Ok(());
        }
        let Some(kind) = self.algorithm else {
            log::warn!("autosolve requested without an algorithm");
            return Err(SolveError::NoAlgorithmSelected);
        };

        self.transition(ControllerState::Solving);
        match self.plan(kind, grid, player) {
            Some(steps) => {
                log::info!("{kind} planned {steps} steps from {player} to {}", grid.goal());
                self.solving_steps = steps;
                self.events.push(SolverEvent::Solved {
                    algorithm: kind,
                    steps,
                });
                self.transition(ControllerState::Stepping);
                if self.path.is_empty() {
                    self.finish();
                }
                Ok(())
            }
            None => Err(self.fail(kind)),
        }
    }

    /// Switch autosolve off and drop the remaining path.
    pub fn stop(&mut self) {
        if !self.is_active() {
            return;
        }
        log::info!("autosolve stopped with {} steps left", self.path.len());
        self.path.clear();
        self.events.push(SolverEvent::Stopped);
        self.transition(ControllerState::Idle);
    }

    /// Forget the current path, timer and metrics, as for a fresh level.
    /// The selected algorithm and the configuration are kept.
    pub fn reset(&mut self) {
        self.state = ControllerState::Idle;
        self.path.clear();
        self.last_step = Duration::ZERO;
        self.solving_steps = 0;
        self.events.clear();
    }

    // -------------------------------------------------------------------
    // Stepping
    // -------------------------------------------------------------------

    /// Advance autosolve at game time `now`.
    ///
    /// Once more than the step delay has passed since the previous step, the
    /// next path cell is checked against the grid's current enemies. A safe
    /// cell is returned as the player's new position. An unsafe cell
    /// triggers an immediate re-plan from `player` with the configured
    /// replan algorithm; no move happens in that interval.
    pub fn tick(&mut self, now: Duration, grid: &Grid, player: Cell) -> Option<Cell> {
        if self.state != ControllerState::Stepping {
            return None;
        }
        if now.saturating_sub(self.last_step) <= self.config.step_delay {
            return None;
        }
        self.last_step = now;

        let Some(&next) = self.path.front() else {
            self.finish();
            return None;
        };

        if grid.is_safe(next) {
            self.path.pop_front();
            log::debug!("autosolve step to {next}, {} left", self.path.len());
            self.events.push(SolverEvent::Moved(next));
            if self.path.is_empty() {
                self.finish();
            }
            return Some(next);
        }

        log::warn!("step to {next} blocked by an enemy, replanning from {player}");
        self.events.push(SolverEvent::Blocked { at: next });
        self.transition(ControllerState::Blocked);
        self.path.clear();

        let kind = self.config.replan_algorithm;
        match self.plan(kind, grid, player) {
            Some(steps) => {
                log::info!("{kind} replanned {steps} steps from {player}");
                self.events.push(SolverEvent::Replanned {
                    algorithm: kind,
                    steps,
                });
                self.transition(ControllerState::Stepping);
                if self.path.is_empty() {
                    self.finish();
                }
            }
            None => {
                self.fail(kind);
            }
        }
        None
    }

    // -------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------

    /// Search from `player` to the goal and store the path without the
    /// player's own cell. Returns the number of moves, or `None` when the
    /// goal cannot be reached safely.
    fn plan(&mut self, kind: AlgorithmKind, grid: &Grid, player: Cell) -> Option<usize> {
        debug_assert!(
            grid.is_traversable(grid.goal()),
            "goal {} must be an open cell",
            grid.goal()
        );
        let full = self
            .finder
            .find_path(kind, &GridPather::new(grid), player, grid.goal());
        if full.is_empty() {
            self.path.clear();
            return None;
        }
        let steps = full.len() - 1;
        self.path = full.into_iter().skip(1).collect();
        Some(steps)
    }

    fn fail(&mut self, kind: AlgorithmKind) -> SolveError {
        let err = SolveError::NoPathFound { algorithm: kind };
        log::warn!("{err}; autosolve switched off");
        self.path.clear();
        self.events.push(SolverEvent::Failed(err));
        self.transition(ControllerState::Idle);
        err
    }

    fn finish(&mut self) {
        log::info!("autosolve path completed");
        self.events.push(SolverEvent::Finished);
        self.transition(ControllerState::Idle);
    }

    fn transition(&mut self, to: ControllerState) {
        if self.state == to {
            return;
        }
        log::trace!("autosolve {} -> {to}", self.state);
        self.events.push(SolverEvent::StateChanged {
            from: self.state,
            to,
        });
        self.state = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Range;

    const S: i32 = 40;
    const DELAY: Duration = Duration::from_millis(150);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn corridor(len: i32) -> Grid {
        Grid::new(S, Cell::ZERO, Cell::new(len * S, 0))
            .with_bounds(Range::new(0, 0, (len + 1) * S, S))
    }

    fn solver(kind: AlgorithmKind) -> AutoSolver {
        let mut s = AutoSolver::new(SolverConfig::default().with_step_delay(DELAY));
        s.select_algorithm(kind);
        s
    }

    #[test]
    fn toggle_without_algorithm_is_an_error() {
        let mut s = AutoSolver::default();
        let grid = corridor(2);
        assert_eq!(s.toggle(&grid, grid.start()), Err(SolveError::NoAlgorithmSelected));
        assert_eq!(s.state(), ControllerState::Idle);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn start_records_metrics_and_drops_player_cell() {
        let mut s = solver(AlgorithmKind::BreadthFirst);
        let grid = corridor(3);
        s.start(&grid, grid.start()).unwrap();
        assert_eq!(s.state(), ControllerState::Stepping);
        assert_eq!(s.solving_steps(), 3);
        assert_eq!(s.remaining(), 3);
        assert_eq!(s.path().front(), Some(&Cell::new(S, 0)));
    }

    #[test]
    fn no_step_until_delay_strictly_elapsed() {
        let mut s = solver(AlgorithmKind::AStar);
        let grid = corridor(2);
        s.start(&grid, grid.start()).unwrap();
        assert_eq!(s.tick(ms(100), &grid, grid.start()), None);
        assert_eq!(s.tick(DELAY, &grid, grid.start()), None);
        assert_eq!(s.tick(ms(151), &grid, grid.start()), Some(Cell::new(S, 0)));
        // The interval restarts from the last step.
        assert_eq!(s.tick(ms(300), &grid, Cell::new(S, 0)), None);
        assert_eq!(s.tick(ms(302), &grid, Cell::new(S, 0)), Some(Cell::new(2 * S, 0)));
        assert_eq!(s.state(), ControllerState::Idle);
    }

    #[test]
    fn stop_discards_path() {
        let mut s = solver(AlgorithmKind::DepthFirst);
        let grid = corridor(4);
        s.toggle(&grid, grid.start()).unwrap();
        s.drain_events();
        s.toggle(&grid, grid.start()).unwrap();
        assert_eq!(s.state(), ControllerState::Idle);
        assert_eq!(s.remaining(), 0);
        assert_eq!(
            s.drain_events(),
            vec![
                SolverEvent::Stopped,
                SolverEvent::StateChanged {
                    from: ControllerState::Stepping,
                    to: ControllerState::Idle,
                },
            ]
        );
        assert_eq!(s.tick(ms(1000), &grid, grid.start()), None);
    }

    #[test]
    fn already_on_goal_finishes_immediately() {
        let mut s = solver(AlgorithmKind::GreedyBestFirst);
        let grid = corridor(0);
        s.start(&grid, grid.start()).unwrap();
        assert_eq!(s.state(), ControllerState::Idle);
        assert_eq!(s.solving_steps(), 0);
        let events = s.drain_events();
        assert!(events.contains(&SolverEvent::Finished));
    }

    #[test]
    fn selecting_algorithm_keeps_current_path() {
        let mut s = solver(AlgorithmKind::BreadthFirst);
        let grid = corridor(3);
        s.start(&grid, grid.start()).unwrap();
        let before = s.path().clone();
        s.select_algorithm(AlgorithmKind::DepthFirst);
        assert_eq!(s.path(), &before);
        assert_eq!(s.algorithm(), Some(AlgorithmKind::DepthFirst));
    }

    #[test]
    fn reset_returns_to_idle_and_keeps_selection() {
        let mut s = solver(AlgorithmKind::AStar);
        let grid = corridor(3);
        s.start(&grid, grid.start()).unwrap();
        s.tick(ms(500), &grid, grid.start());
        s.reset();
        assert_eq!(s.state(), ControllerState::Idle);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.solving_steps(), 0);
        assert!(s.drain_events().is_empty());
        assert_eq!(s.algorithm(), Some(AlgorithmKind::AStar));
        // Timer restarted: a fresh start steps at the first interval again.
        s.start(&grid, grid.start()).unwrap();
        assert_eq!(s.tick(ms(151), &grid, grid.start()), Some(Cell::new(S, 0)));
    }

    #[test]
    fn state_display() {
        assert_eq!(ControllerState::Blocked.to_string(), "blocked");
    }
}
