use std::collections::BinaryHeap;

use labyrinth_core::Cell;

use crate::PathFinder;
use crate::finder::GreedyRef;
use crate::traits::HeuristicPather;

impl PathFinder {
    /// Find a path from `from` to `to` with greedy best-first search.
    ///
    /// Always expands the open cell that looks closest to the goal, ignoring
    /// the distance already travelled, so the path is usually found quickly
    /// but may be longer than necessary. Equal estimates are broken by the
    /// smaller `(x, y)` pair. Returns an empty vector when `to` is
    /// unreachable.
    pub fn greedy_path<P: HeuristicPather>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Vec<Cell> {
        self.clear();

        let mut open: BinaryHeap<GreedyRef> = BinaryHeap::new();
        open.push(GreedyRef {
            cell: from,
            h: pather.estimate(from, to),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(GreedyRef { cell: current, .. }) = open.pop() else {
                break 'search false;
            };

            if current == to {
                self.explored.push(current);
                break 'search true;
            }

            // Skip duplicates of already-expanded cells.
            if !self.closed.insert(current) {
                continue;
            }
            self.explored.push(current);

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                if self.closed.contains(&n) {
                    continue;
                }
                // Latest discoverer wins until the cell is expanded.
                self.came_from.insert(n, current);
                open.push(GreedyRef {
                    cell: n,
                    h: pather.estimate(n, to),
                });
            }
        };

        self.nbuf = nbuf;

        if found {
            self.reconstruct(from, to)
        } else {
            Vec::new()
        }
    }
}
