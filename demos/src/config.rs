use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use labyrinth_paths::AlgorithmKind;
use labyrinth_solver::SolverConfig;
use serde::Deserialize;

/// Settings for a headless run, read from an optional TOML file.
///
/// Every key is optional:
///
/// ```toml
/// block_size = 40
/// step_delay_ms = 150
/// enemy_delay_ms = 500
/// frame_ms = 16
/// max_ticks = 20000
/// seed = 7
/// algorithm = "bfs"
/// replan_algorithm = "astar"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub block_size: i32,
    pub step_delay_ms: u64,
    pub enemy_delay_ms: u64,
    pub frame_ms: u64,
    pub max_ticks: u64,
    pub seed: Option<u64>,
    pub algorithm: String,
    pub replan_algorithm: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            block_size: 40,
            step_delay_ms: 150,
            enemy_delay_ms: 500,
            frame_ms: 16,
            max_ticks: 20_000,
            seed: None,
            algorithm: "astar".to_string(),
            replan_algorithm: "astar".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse demo config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn algorithm(&self) -> Result<AlgorithmKind> {
        Ok(self.algorithm.parse()?)
    }

    /// The controller settings this config describes.
    pub fn solver_config(&self) -> Result<SolverConfig> {
        let replan: AlgorithmKind = self
            .replan_algorithm
            .parse()
            .context("invalid replan_algorithm")?;
        Ok(SolverConfig::default()
            .with_step_delay(Duration::from_millis(self.step_delay_ms))
            .with_replan_algorithm(replan))
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    pub fn enemy_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(DemoConfig::from_toml("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn partial_file_overrides_some_keys() {
        let cfg =
            DemoConfig::from_toml("step_delay_ms = 20\nalgorithm = \"DFS\"\nseed = 3").unwrap();
        assert_eq!(cfg.step_delay_ms, 20);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.block_size, 40);
        assert_eq!(cfg.algorithm().unwrap(), AlgorithmKind::DepthFirst);
        assert_eq!(
            cfg.solver_config().unwrap().step_delay,
            Duration::from_millis(20)
        );
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(DemoConfig::from_toml("stepdelay = 3").is_err());
        let cfg = DemoConfig::from_toml("replan_algorithm = \"dijkstra\"").unwrap();
        assert!(cfg.solver_config().is_err());
    }
}
