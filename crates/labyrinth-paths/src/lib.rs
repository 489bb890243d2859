//! Maze search algorithms for Labyrinth grids.
//!
//! Four interchangeable searches compute a path from the player's cell to
//! the goal while treating enemy-occupied cells as forbidden:
//!
//! - **Depth-first** ([`PathFinder::dfs_path`]), stack frontier, no
//!   optimality guarantee
//! - **Breadth-first** ([`PathFinder::bfs_path`]), shortest in steps
//! - **Greedy best-first** ([`PathFinder::greedy_path`]), straight-line
//!   heuristic only
//! - **A\*** ([`PathFinder::astar_path`]), shortest with a Euclidean
//!   heuristic
//!
//! All searches run through [`PathFinder`], which reuses its scratch maps
//! between queries, and return either the full path (both endpoints
//! included) or an empty vector when no safe path exists. Pick one at run
//! time with [`AlgorithmKind`] and [`PathFinder::find_path`], or call
//! [`solve`] for a one-off search on a [`Grid`](labyrinth_core::Grid).
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS |
//! | [`HeuristicPather`] : [`Pather`] | greedy best-first |
//! | [`WeightedPather`] : [`Pather`] | A* (with [`HeuristicPather`]) |

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod finder;
mod greedy;
mod pather;
mod traits;

pub use algorithm::{AlgorithmKind, ParseAlgorithmError, solve};
pub use distance::{euclidean, manhattan};
pub use finder::PathFinder;
pub use pather::GridPather;
pub use traits::{HeuristicPather, Pather, WeightedPather};
