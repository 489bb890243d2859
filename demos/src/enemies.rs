//! Random-walk enemy motion.

use labyrinth_core::{Cell, Direction, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Moves every enemy one block in a random direction per step.
///
/// A move into a wall or off the map leaves the enemy in place. After all
/// enemies have picked a move, any enemy whose new cell matches another
/// enemy's new cell goes back to where it was. Starting cells must be
/// distinct.
#[derive(Debug, Clone)]
pub struct EnemyWalker {
    positions: Vec<Cell>,
    rng: StdRng,
}

impl EnemyWalker {
    pub fn new(positions: impl IntoIterator<Item = Cell>, seed: u64) -> Self {
        Self {
            positions: positions.into_iter().collect(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    /// Advance every enemy once. Returns the number that actually moved.
    pub fn step(&mut self, grid: &Grid) -> usize {
        let bs = grid.block_size();
        let mut next: Vec<Cell> = self
            .positions
            .iter()
            .map(|&p| {
                let dir = Direction::CANONICAL[self.rng.random_range(0..4)];
                let q = p.step(dir, bs);
                if grid.is_traversable(q) { q } else { p }
            })
            .collect();

        // A revert can land on a cell another enemy just moved into, so
        // repeat until no two enemies share a cell.
        loop {
            let mut reverted = false;
            for i in 0..next.len() {
                let clash = (0..next.len()).any(|j| j != i && next[j] == next[i]);
                if clash && next[i] != self.positions[i] {
                    next[i] = self.positions[i];
                    reverted = true;
                }
            }
            if !reverted {
                break;
            }
        }

        let moved = next
            .iter()
            .zip(&self.positions)
            .filter(|(a, b)| a != b)
            .count();
        self.positions = next;
        moved
    }
}
