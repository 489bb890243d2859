use labyrinth_core::{Cell, Level};
use labyrinth_paths::{AlgorithmKind, GridPather, PathFinder};

/// One algorithm's answer on a level, with enemies on their start cells.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub algorithm: AlgorithmKind,
    pub path: Vec<Cell>,
    pub explored: Vec<Cell>,
}

impl Comparison {
    /// Moves on the path, or `None` when no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Solve `level` with every algorithm, reusing one finder.
pub fn compare(level: &Level) -> Vec<Comparison> {
    let grid = level.grid();
    let pather = GridPather::new(&grid);
    let mut finder = PathFinder::new();
    AlgorithmKind::ALL
        .into_iter()
        .map(|algorithm| {
            let path = finder.find_path(algorithm, &pather, grid.start(), grid.goal());
            Comparison {
                algorithm,
                path,
                explored: finder.explored().to_vec(),
            }
        })
        .collect()
}
