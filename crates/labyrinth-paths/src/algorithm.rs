//! Run-time algorithm selection.

use std::fmt;
use std::str::FromStr;

use labyrinth_core::{Cell, Grid};
use thiserror::Error;

use crate::PathFinder;
use crate::pather::GridPather;
use crate::traits::{HeuristicPather, WeightedPather};

/// The four interchangeable maze searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    DepthFirst,
    BreadthFirst,
    GreedyBestFirst,
    AStar,
}

impl AlgorithmKind {
    /// Every algorithm, in menu order.
    pub const ALL: [AlgorithmKind; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::GreedyBestFirst,
        Self::AStar,
    ];

    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
            Self::GreedyBestFirst => "Greedy",
            Self::AStar => "A*",
        }
    }

    /// The next algorithm in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::DepthFirst => Self::BreadthFirst,
            Self::BreadthFirst => Self::GreedyBestFirst,
            Self::GreedyBestFirst => Self::AStar,
            Self::AStar => Self::DepthFirst,
        }
    }

    /// Whether the algorithm always returns a path with the fewest cells.
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::BreadthFirst | Self::AStar)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search algorithm \u{201c}{0}\u{201d} (expected dfs, bfs, greedy or astar)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for AlgorithmKind {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depthfirst" => Ok(Self::DepthFirst),
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Self::BreadthFirst),
            "greedy" | "best-first" | "greedybestfirst" => Ok(Self::GreedyBestFirst),
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

impl PathFinder {
    /// Run the search selected by `kind`.
    pub fn find_path<P: WeightedPather + HeuristicPather>(
        &mut self,
        kind: AlgorithmKind,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Vec<Cell> {
        let path = match kind {
            AlgorithmKind::DepthFirst => self.dfs_path(pather, from, to),
            AlgorithmKind::BreadthFirst => self.bfs_path(pather, from, to),
            AlgorithmKind::GreedyBestFirst => self.greedy_path(pather, from, to),
            AlgorithmKind::AStar => self.astar_path(pather, from, to),
        };
        log::debug!(
            "{kind} search {from} -> {to}: {} cells, {} explored",
            path.len(),
            self.explored.len()
        );
        path
    }
}

/// Search `grid` from its start to its goal, avoiding walls and enemies.
///
/// Returns the path with both endpoints, or an empty vector when no safe
/// path exists.
pub fn solve(kind: AlgorithmKind, grid: &Grid) -> Vec<Cell> {
    debug_assert!(
        grid.is_traversable(grid.start()) && grid.is_traversable(grid.goal()),
        "start and goal must be open cells"
    );
    PathFinder::new().find_path(kind, &GridPather::new(grid), grid.start(), grid.goal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Range;

    const S: i32 = 40;

    #[test]
    fn parse_labels_and_aliases() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.label().parse::<AlgorithmKind>(), Ok(kind));
        }
        assert_eq!("AStar".parse::<AlgorithmKind>(), Ok(AlgorithmKind::AStar));
        assert_eq!(" bfs ".parse::<AlgorithmKind>(), Ok(AlgorithmKind::BreadthFirst));
        assert_eq!(
            "Depth-First".parse::<AlgorithmKind>(),
            Ok(AlgorithmKind::DepthFirst)
        );
        assert!("dijkstra".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn next_cycles_through_all() {
        let mut k = AlgorithmKind::DepthFirst;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(k);
            k = k.next();
        }
        assert_eq!(seen, AlgorithmKind::ALL);
        assert_eq!(k, AlgorithmKind::DepthFirst);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(AlgorithmKind::AStar.to_string(), "A*");
        assert_eq!(AlgorithmKind::GreedyBestFirst.to_string(), "Greedy");
    }

    #[test]
    fn solve_uses_grid_endpoints() {
        let grid = Grid::new(S, Cell::ZERO, Cell::new(0, 2 * S))
            .with_bounds(Range::new(0, 0, S, 3 * S));
        for kind in AlgorithmKind::ALL {
            assert_eq!(
                solve(kind, &grid),
                vec![Cell::ZERO, Cell::new(0, S), Cell::new(0, 2 * S)],
                "{kind}"
            );
        }
    }

    #[test]
    fn find_path_records_explored() {
        let grid = Grid::new(S, Cell::ZERO, Cell::new(S, 0))
            .with_bounds(Range::new(0, 0, 2 * S, S));
        let mut pf = PathFinder::new();
        let path = pf.find_path(
            AlgorithmKind::BreadthFirst,
            &GridPather::new(&grid),
            grid.start(),
            grid.goal(),
        );
        assert_eq!(path.len(), 2);
        assert_eq!(pf.explored(), &[Cell::ZERO, Cell::new(S, 0)]);
    }
}
