use std::collections::BinaryHeap;

use labyrinth_core::Cell;

use crate::PathFinder;
use crate::finder::{Node, NodeRef};
use crate::traits::{HeuristicPather, WeightedPather};

impl PathFinder {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Open cells are ordered by `f = g + h`; among equal `f`, the cell
    /// pushed earliest is expanded first, so results are reproducible and,
    /// for neighbours of one expansion, follow the pather's order. A cell
    /// reached again by a strictly cheaper route is re-opened. Returns an
    /// empty vector when `to` is unreachable.
    pub fn astar_path<P: WeightedPather + HeuristicPather>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Vec<Cell> {
        self.clear();

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        self.nodes.insert(
            from,
            Node {
                g: 0,
                seq,
                open: true,
            },
        );
        open.push(NodeRef {
            cell: from,
            f: pather.estimate(from, to),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let cp = current.cell;

            // Skip stale entries.
            let Some(node) = self.nodes.get_mut(&cp) else {
                continue;
            };
            if !node.open || node.seq != current.seq {
                continue;
            }
            node.open = false;
            let current_g = node.g;
            self.explored.push(cp);

            if cp == to {
                break 'search true;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let tentative_g = current_g + pather.cost(cp, np);
                if let Some(n) = self.nodes.get(&np) {
                    if tentative_g >= n.g {
                        continue;
                    }
                }

                seq += 1;
                self.nodes.insert(
                    np,
                    Node {
                        g: tentative_g,
                        seq,
                        open: true,
                    },
                );
                self.came_from.insert(np, cp);
                open.push(NodeRef {
                    cell: np,
                    f: f64::from(tentative_g) + pather.estimate(np, to),
                    seq,
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
