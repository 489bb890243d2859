use labyrinth_paths::AlgorithmKind;
use thiserror::Error;

/// Why an autosolve request could not be carried out.
///
/// Both cases are recoverable: the controller is left idle with autosolve
/// off and manual control available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The search exhausted its frontier without reaching the goal.
    #[error("no safe path found ({algorithm})")]
    NoPathFound { algorithm: AlgorithmKind },
    /// Autosolve was switched on before an algorithm was chosen.
    #[error("no search algorithm selected")]
    NoAlgorithmSelected,
}
