use labyrinth_core::{Cell, Grid};

use crate::distance::euclidean;
use crate::traits::{HeuristicPather, Pather, WeightedPather};

/// The game's pather over a [`Grid`] snapshot.
///
/// Neighbours come in canonical order (Down, Right, Up, Left) and must be
/// traversable and, unless built with [`ignoring_enemies`](Self::ignoring_enemies),
/// free of enemies. Every step costs one block; the estimate is the
/// straight-line distance, which never overestimates on a 4-way grid.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    avoid_enemies: bool,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            avoid_enemies: true,
        }
    }

    /// A pather that only avoids walls, as if the maze had no enemies.
    pub fn ignoring_enemies(grid: &'a Grid) -> Self {
        Self {
            grid,
            avoid_enemies: false,
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
        for n in self.grid.neighbors(p) {
            let keep = if self.avoid_enemies {
                self.grid.is_passable(n)
            } else {
                self.grid.is_traversable(n)
            };
            if keep {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _from: Cell, _to: Cell) -> i32 {
        self.grid.block_size()
    }
}

impl HeuristicPather for GridPather<'_> {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        euclidean(from, to)
    }
}
