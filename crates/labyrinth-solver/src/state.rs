use std::time::Duration;

use labyrinth_core::{Cell, Direction, Grid, Level};
use labyrinth_paths::AlgorithmKind;

use crate::config::SolverConfig;
use crate::controller::AutoSolver;
use crate::error::SolveError;

/// Everything the solver needs about one running level: the grid snapshot,
/// where the player stands, and the autosolve controller.
#[derive(Debug)]
pub struct MazeState {
    grid: Grid,
    player: Cell,
    solver: AutoSolver,
}

impl MazeState {
    pub fn new(level: &Level, config: SolverConfig) -> Self {
        Self {
            grid: level.grid(),
            player: level.player(),
            solver: AutoSolver::new(config),
        }
    }

    /// Start `level` afresh. Only the grid, the player and the controller
    /// are rebuilt; the selected algorithm survives.
    pub fn reset(&mut self, level: &Level) {
        self.grid = level.grid();
        self.player = level.player();
        self.solver.reset();
        log::info!("level reset, player at {}", self.player);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn solver(&self) -> &AutoSolver {
        &self.solver
    }

    pub fn solver_mut(&mut self) -> &mut AutoSolver {
        &mut self.solver
    }

    /// Replace the enemy positions. Call between controller updates.
    pub fn set_enemies(&mut self, enemies: impl IntoIterator<Item = Cell>) {
        self.grid.set_occupied(enemies);
    }

    /// Put the player on the block containing pixel position `at`, as after
    /// losing a life.
    pub fn place_player(&mut self, at: Cell) {
        self.player = self.grid.align(at);
    }

    pub fn select_algorithm(&mut self, kind: AlgorithmKind) {
        self.solver.select_algorithm(kind);
    }

    pub fn toggle_autosolve(&mut self) -> Result<(), SolveError> {
        self.solver.toggle(&self.grid, self.player)
    }

    /// Run one controller tick at game time `now` and apply any move.
    pub fn update(&mut self, now: Duration) -> Option<Cell> {
        let moved = self.solver.tick(now, &self.grid, self.player);
        if let Some(c) = moved {
            self.player = c;
        }
        moved
    }

    /// Move the player one block by hand. Refused while autosolve is on,
    /// and into walls or off the map.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        if self.solver.is_active() {
            return false;
        }
        let next = self.player.step(dir, self.grid.block_size());
        if !self.grid.is_traversable(next) {
            return false;
        }
        self.player = next;
        true
    }

    pub fn reached_goal(&self) -> bool {
        self.player == self.grid.goal()
    }

    /// Whether an enemy stands on the player's cell.
    pub fn caught(&self) -> bool {
        !self.grid.is_safe(self.player)
    }
}
