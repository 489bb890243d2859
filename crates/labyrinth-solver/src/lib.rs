//! Autosolve controller for Labyrinth.
//!
//! [`AutoSolver`] owns the selected [`AlgorithmKind`](labyrinth_paths::AlgorithmKind),
//! the path being followed, and the step timer. It walks the player along
//! the path one cell per step interval, re-checks each cell against the
//! enemies' current positions, and re-plans when the next step has become
//! unsafe. [`MazeState`] bundles the grid, the player and the controller so
//! a game loop can drive everything through one value.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod state;

pub use config::SolverConfig;
pub use controller::{AutoSolver, ControllerState};
pub use error::SolveError;
pub use event::SolverEvent;
pub use state::MazeState;
