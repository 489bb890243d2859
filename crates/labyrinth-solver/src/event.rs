use labyrinth_core::Cell;
use labyrinth_paths::AlgorithmKind;

use crate::controller::ControllerState;
use crate::error::SolveError;

/// Something observable the controller did, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverEvent {
    StateChanged {
        from: ControllerState,
        to: ControllerState,
    },
    /// A path was planned; `steps` is its length minus the start cell.
    Solved { algorithm: AlgorithmKind, steps: usize },
    /// The player was moved one cell along the path.
    Moved(Cell),
    /// The next cell became occupied after planning.
    Blocked { at: Cell },
    /// A blocked path was replaced by a fresh one.
    Replanned { algorithm: AlgorithmKind, steps: usize },
    /// The last planned cell was reached.
    Finished,
    /// Autosolve switched itself off.
    Failed(SolveError),
    /// Autosolve was switched off by the user.
    Stopped,
}
