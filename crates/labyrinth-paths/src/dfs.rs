use labyrinth_core::Cell;

use crate::PathFinder;
use crate::traits::Pather;

impl PathFinder {
    /// Find a path from `from` to `to` with depth-first search.
    ///
    /// Neighbours are pushed in the pather's order, so the last one pushed
    /// is explored first. The result is any path, not necessarily a short
    /// one. Returns an empty vector when `to` is unreachable.
    pub fn dfs_path<P: Pather>(&mut self, pather: &P, from: Cell, to: Cell) -> Vec<Cell> {
        self.clear();

        let mut stack: Vec<(Cell, Option<Cell>)> = vec![(from, None)];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some((current, parent)) = stack.pop() else {
                break false;
            };
            if !self.closed.insert(current) {
                continue;
            }
            if let Some(parent) = parent {
                self.came_from.insert(current, parent);
            }
            self.explored.push(current);

            if current == to {
                break true;
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                if !self.closed.contains(&n) {
                    stack.push((n, Some(current)));
                }
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
