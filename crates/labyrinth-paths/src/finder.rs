use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use labyrinth_core::Cell;

// ---------------------------------------------------------------------------
// Heap entries
// ---------------------------------------------------------------------------

/// Live A* bookkeeping for one discovered cell.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    /// Sequence number of the heap entry that currently represents the node.
    pub(crate) seq: u64,
    pub(crate) open: bool,
}

/// A* open-list entry. Pops the smallest `f` first; among equal `f`, the
/// entry pushed earliest wins.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) cell: Cell,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Greedy best-first frontier entry. Pops the smallest heuristic first;
/// ties go to the smaller `(x, y)` pair.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GreedyRef {
    pub(crate) cell: Cell,
    pub(crate) h: f64,
}

impl Ord for GreedyRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .h
            .total_cmp(&self.h)
            .then_with(|| (other.cell.x, other.cell.y).cmp(&(self.cell.x, self.cell.y)))
    }
}

impl PartialOrd for GreedyRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GreedyRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GreedyRef {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Runs maze searches, keeping its scratch maps between queries.
///
/// A search never mutates the grid it reads; the only state carried from one
/// call to the next is allocated capacity and the [`explored`](Self::explored)
/// record of the most recent search.
#[derive(Debug, Default)]
pub struct PathFinder {
    pub(crate) came_from: HashMap<Cell, Cell>,
    pub(crate) closed: HashSet<Cell>,
    pub(crate) nodes: HashMap<Cell, Node>,
    pub(crate) explored: Vec<Cell>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Cell>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
            ..Self::default()
        }
    }

    /// Cells expanded by the last search, in expansion order. The start
    /// cell comes first; the goal comes last when it was reached.
    pub fn explored(&self) -> &[Cell] {
        &self.explored
    }

    pub(crate) fn clear(&mut self) {
        self.came_from.clear();
        self.closed.clear();
        self.nodes.clear();
        self.explored.clear();
    }

    /// Walk parent pointers back from `to` and return the path `from..=to`.
    pub(crate) fn reconstruct(&self, from: Cell, to: Cell) -> Vec<Cell> {
        let mut path = vec![to];
        let mut c = to;
        while c != from {
            let Some(&parent) = self.came_from.get(&c) else {
                debug_assert!(false, "broken parent chain at {c}");
                return Vec::new();
            };
            path.push(parent);
            c = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn node_ref_pops_lowest_f_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef {
            cell: Cell::new(0, 0),
            f: 3.0,
            seq: 0,
        });
        heap.push(NodeRef {
            cell: Cell::new(1, 0),
            f: 1.0,
            seq: 2,
        });
        heap.push(NodeRef {
            cell: Cell::new(2, 0),
            f: 1.0,
            seq: 1,
        });
        let order: Vec<Cell> = std::iter::from_fn(|| heap.pop().map(|n| n.cell)).collect();
        assert_eq!(order, vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)]);
    }

    #[test]
    fn greedy_ref_breaks_ties_by_x_then_y() {
        let mut heap = BinaryHeap::new();
        heap.push(GreedyRef {
            cell: Cell::new(40, 0),
            h: 5.0,
        });
        heap.push(GreedyRef {
            cell: Cell::new(0, 80),
            h: 5.0,
        });
        heap.push(GreedyRef {
            cell: Cell::new(0, 40),
            h: 5.0,
        });
        heap.push(GreedyRef {
            cell: Cell::new(80, 80),
            h: 2.0,
        });
        let order: Vec<Cell> = std::iter::from_fn(|| heap.pop().map(|n| n.cell)).collect();
        assert_eq!(
            order,
            vec![
                Cell::new(80, 80),
                Cell::new(0, 40),
                Cell::new(0, 80),
                Cell::new(40, 0),
            ]
        );
    }

    #[test]
    fn reconstruct_single_cell() {
        let pf = PathFinder::new();
        assert_eq!(pf.reconstruct(Cell::ZERO, Cell::ZERO), vec![Cell::ZERO]);
    }

    #[test]
    fn reconstruct_walks_parents() {
        let mut pf = PathFinder::new();
        pf.came_from.insert(Cell::new(0, 40), Cell::ZERO);
        pf.came_from.insert(Cell::new(40, 40), Cell::new(0, 40));
        assert_eq!(
            pf.reconstruct(Cell::ZERO, Cell::new(40, 40)),
            vec![Cell::ZERO, Cell::new(0, 40), Cell::new(40, 40)]
        );
    }
}
