//! Headless game loop: a frame clock, wandering enemies and autosolve.

use std::time::Duration;

use anyhow::Result;
use labyrinth_core::{Cell, Level};
use labyrinth_paths::AlgorithmKind;
use labyrinth_solver::{MazeState, SolverEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DemoConfig;
use crate::enemies::EnemyWalker;

/// How a run ended and what happened along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub reached_goal: bool,
    pub ticks: u64,
    pub elapsed: Duration,
    /// Length of the first planned path, in moves.
    pub planned_steps: usize,
    pub moves: usize,
    pub replans: usize,
    pub failures: usize,
    pub catches: usize,
    /// Every cell the player was moved to, in order.
    pub trail: Vec<Cell>,
}

pub struct Simulation {
    level: Level,
    state: MazeState,
    walker: EnemyWalker,
    rng: StdRng,
    frame: Duration,
    enemy_delay: Duration,
    max_ticks: u64,
    now: Duration,
    last_enemy_move: Duration,
    outcome: RunOutcome,
}

impl Simulation {
    pub fn new(
        level: Level,
        cfg: &DemoConfig,
        algorithm: AlgorithmKind,
        seed: u64,
    ) -> Result<Self> {
        let mut state = MazeState::new(&level, cfg.solver_config()?);
        state.select_algorithm(algorithm);
        let walker = EnemyWalker::new(level.enemies().iter().copied(), seed);
        Ok(Self {
            level,
            state,
            walker,
            // Separate stream so respawns don't perturb enemy motion.
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            frame: cfg.frame(),
            enemy_delay: cfg.enemy_delay(),
            max_ticks: cfg.max_ticks,
            now: Duration::ZERO,
            last_enemy_move: Duration::ZERO,
            outcome: RunOutcome::default(),
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn state(&self) -> &MazeState {
        &self.state
    }

    pub fn enemies(&self) -> &[Cell] {
        self.walker.positions()
    }

    /// Run until the player reaches the goal or the tick budget runs out.
    /// `on_move` is called after every autosolve step.
    pub fn run(mut self, mut on_move: impl FnMut(&Self)) -> RunOutcome {
        self.engage();
        self.drain_events();
        for tick in 1..=self.max_ticks {
            self.now += self.frame;
            self.outcome.ticks = tick;

            if self.now.saturating_sub(self.last_enemy_move) > self.enemy_delay {
                self.walker.step(self.state.grid());
                self.state.set_enemies(self.walker.positions().iter().copied());
                self.last_enemy_move = self.now;
                // Autosolve switches itself off when it finds no safe path;
                // try again now that the enemies have moved.
                if !self.state.solver().is_active() && !self.state.caught() {
                    self.engage();
                }
            }

            let moved = self.state.update(self.now);
            self.drain_events();
            if moved.is_some() {
                on_move(&self);
            }

            if self.state.reached_goal() {
                self.outcome.reached_goal = true;
                break;
            }
            if self.state.caught() && !self.respawn() {
                break;
            }
        }
        self.outcome.elapsed = self.now;
        tracing::info!(
            reached_goal = self.outcome.reached_goal,
            ticks = self.outcome.ticks,
            moves = self.outcome.moves,
            "run finished"
        );
        self.outcome
    }

    fn engage(&mut self) {
        match self.state.toggle_autosolve() {
            Ok(()) => {
                if self.outcome.planned_steps == 0 {
                    self.outcome.planned_steps = self.state.solver().solving_steps();
                }
            }
            Err(err) => tracing::debug!(%err, "autosolve not engaged"),
        }
    }

    /// Put a caught player on a random enemy-free floor cell and plan again
    /// from there. Returns false, with autosolve stopped, when every floor
    /// cell is taken.
    fn respawn(&mut self) -> bool {
        self.outcome.catches += 1;
        let grid = self.state.grid();
        let safe: Vec<Cell> = self
            .level
            .floor()
            .iter()
            .copied()
            .filter(|&c| grid.is_safe(c))
            .collect();
        if safe.is_empty() {
            tracing::warn!("caught with nowhere safe to respawn");
            self.state.solver_mut().stop();
            self.drain_events();
            return false;
        }
        let at = safe[self.rng.random_range(0..safe.len())];
        tracing::info!(%at, "player caught, respawning");
        self.state.solver_mut().stop();
        self.state.place_player(at);
        self.engage();
        self.drain_events();
        true
    }

    fn drain_events(&mut self) {
        for ev in self.state.solver_mut().drain_events() {
            match ev {
                SolverEvent::Moved(c) => {
                    self.outcome.moves += 1;
                    self.outcome.trail.push(c);
                }
                SolverEvent::Replanned { algorithm, steps } => {
                    self.outcome.replans += 1;
                    tracing::info!(%algorithm, steps, "replanned around an enemy");
                }
                SolverEvent::Failed(err) => {
                    self.outcome.failures += 1;
                    tracing::warn!(%err, "autosolve gave up");
                }
                SolverEvent::Solved { algorithm, steps } => {
                    tracing::info!(%algorithm, steps, "path planned");
                }
                SolverEvent::Blocked { at } => tracing::debug!(%at, "next step blocked"),
                SolverEvent::StateChanged { from, to } => tracing::trace!(%from, %to, "controller"),
                SolverEvent::Finished | SolverEvent::Stopped => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = include_str!("../levels/corridor.txt");
    const SEALED: &str = include_str!("../levels/sealed.txt");
    const LEVEL1: &str = include_str!("../levels/level1.txt");

    fn config() -> DemoConfig {
        DemoConfig {
            max_ticks: 5_000,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn enemy_free_level_is_walked_as_planned() {
        let level = Level::parse(CORRIDOR, 40).unwrap();
        for kind in AlgorithmKind::ALL {
            let sim = Simulation::new(level.clone(), &config(), kind, 1).unwrap();
            let out = sim.run(|_| {});
            assert!(out.reached_goal, "{kind}");
            assert_eq!(out.moves, out.planned_steps, "{kind}");
            assert_eq!(out.replans, 0);
            assert_eq!(out.trail.last(), Some(&level.goal()));
        }
    }

    #[test]
    fn sealed_goal_times_out() {
        let level = Level::parse(SEALED, 40).unwrap();
        let cfg = DemoConfig {
            max_ticks: 200,
            ..DemoConfig::default()
        };
        let out = Simulation::new(level, &cfg, AlgorithmKind::BreadthFirst, 1)
            .unwrap()
            .run(|_| {});
        assert!(!out.reached_goal);
        assert_eq!(out.ticks, 200);
        assert_eq!(out.moves, 0);
    }

    #[test]
    fn caught_with_no_free_floor_ends_the_run() {
        // Floor cells are the player start and the enemy start only.
        let level = Level::parse("#####\n#PME#\n#####", 40).unwrap();
        let mut sim = Simulation::new(level, &config(), AlgorithmKind::AStar, 1).unwrap();
        sim.state.set_enemies([Cell::new(40, 40), Cell::new(80, 40)]);
        let out = sim.run(|_| {});
        assert!(!out.reached_goal);
        assert_eq!(out.catches, 1);
        assert_eq!(out.ticks, 1);
    }

    #[test]
    fn runs_are_reproducible() {
        let level = Level::parse(LEVEL1, 40).unwrap();
        let a = Simulation::new(level.clone(), &config(), AlgorithmKind::AStar, 5)
            .unwrap()
            .run(|_| {});
        let b = Simulation::new(level, &config(), AlgorithmKind::AStar, 5)
            .unwrap()
            .run(|_| {});
        assert_eq!(a, b);
    }

    #[test]
    fn on_move_sees_every_step() {
        let level = Level::parse(CORRIDOR, 40).unwrap();
        let mut seen = Vec::new();
        let out = Simulation::new(level, &config(), AlgorithmKind::AStar, 1)
            .unwrap()
            .run(|sim| seen.push(sim.state().player()));
        assert_eq!(seen, out.trail);
    }
}
