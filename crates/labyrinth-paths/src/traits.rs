use labyrinth_core::Cell;

/// Minimal search interface: enumerates the cells reachable in one step.
pub trait Pather {
    /// Append the passable neighbours of `p` into `buf`, in the order they
    /// should be considered. The caller clears `buf` before calling.
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>);
}

/// Pather with positive edge costs.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to the adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> i32;
}

/// Pather with a distance estimate towards a target.
pub trait HeuristicPather: Pather {
    /// Estimated remaining cost from `from` to `to`. For A* to stay optimal
    /// it must never overestimate.
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}
