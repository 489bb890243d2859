//! Controller tuning.

use std::time::Duration;

use labyrinth_paths::AlgorithmKind;

/// Default interval between automatic steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(150);

/// Configuration for an [`AutoSolver`](crate::AutoSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Minimum time between two automatic steps. A step happens only once
    /// strictly more than this has elapsed since the previous one.
    pub step_delay: Duration,
    /// Search used to re-plan when the next step is blocked by an enemy.
    pub replan_algorithm: AlgorithmKind,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            replan_algorithm: AlgorithmKind::AStar,
        }
    }
}

impl SolverConfig {
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    pub fn with_replan_algorithm(mut self, kind: AlgorithmKind) -> Self {
        self.replan_algorithm = kind;
        self
    }
}
