use std::collections::VecDeque;

use labyrinth_core::Cell;

use crate::PathFinder;
use crate::traits::Pather;

impl PathFinder {
    /// Find a path from `from` to `to` with breadth-first search.
    ///
    /// Every step counts the same, so the result has the fewest possible
    /// cells. Among equally short paths, the one discovered first in the
    /// pather's neighbour order wins. Returns an empty vector when `to` is
    /// unreachable.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Cell, to: Cell) -> Vec<Cell> {
        self.clear();

        let mut queue: VecDeque<(Cell, Option<Cell>)> = VecDeque::new();
        queue.push_back((from, None));
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some((current, parent)) = queue.pop_front() else {
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
                    queue.push_back((n, Some(current)));
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
