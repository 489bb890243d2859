//! ASCII level maps.
//!
//! Each character of a level file stands for one block of `block_size`
//! pixels:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `M` | enemy starting cell |
//! | `P` | player start |
//! | `E` | exit (goal) |
//! | `.` | floor |
//! | `C` | coin |
//! | `U` | power-up |
//!
//! Any other character is open background. Lines must all have the same
//! width once trailing whitespace is removed; blank lines before and after
//! the map are ignored.

use std::path::Path;

use thiserror::Error;

use crate::geom::{Cell, Range};
use crate::grid::Grid;

/// Errors that can occur when loading a level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("cannot read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("block size must be positive, got {0}")]
    InvalidBlockSize(i32),
    #[error("line {line} is {found} blocks wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("level has no player start ('P')")]
    MissingPlayer,
    #[error("level has no exit ('E')")]
    MissingGoal,
    #[error("second player start at {0}")]
    DuplicatePlayer(Cell),
    #[error("second exit at {0}")]
    DuplicateGoal(Cell),
    #[error("{columns}x{rows} blocks of {block_size} pixels overflow the coordinate range")]
    TooLarge {
        columns: usize,
        rows: usize,
        block_size: i32,
    },
}

/// A parsed level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    block_size: i32,
    columns: i32,
    rows: i32,
    walls: Vec<Cell>,
    enemies: Vec<Cell>,
    player: Cell,
    goal: Cell,
    floor: Vec<Cell>,
    collectibles: Vec<Cell>,
    power_ups: Vec<Cell>,
}

impl Level {
    /// Parse a level from its textual map.
    pub fn parse(text: &str, block_size: i32) -> Result<Self, LevelError> {
        if block_size <= 0 {
            return Err(LevelError::InvalidBlockSize(block_size));
        }

        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let last = lines.iter().rposition(|l| !l.is_empty()).map_or(first, |i| i + 1);
        let lines = &lines[first..last];

        // Every row must match the first one, so its width bounds them all.
        let columns = lines.first().map_or(0, |l| l.chars().count());
        if !fits(columns, lines.len(), block_size) {
            return Err(LevelError::TooLarge {
                columns,
                rows: lines.len(),
                block_size,
            });
        }

        let mut walls = Vec::new();
        let mut enemies = Vec::new();
        let mut floor = Vec::new();
        let mut collectibles = Vec::new();
        let mut power_ups = Vec::new();
        let mut player = None;
        let mut goal = None;
        let mut width: Option<usize> = None;

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LevelError::InconsistentWidth {
                        line: first + y + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }

            for (x, ch) in line.chars().enumerate() {
                // In range: x < columns and y < rows were checked above.
                let c = Cell::new(x as i32 * block_size, y as i32 * block_size);
                match ch {
                    '#' => walls.push(c),
                    'M' => enemies.push(c),
                    'P' => {
                        if player.replace(c).is_some() {
                            return Err(LevelError::DuplicatePlayer(c));
                        }
                    }
                    'E' => {
                        if goal.replace(c).is_some() {
                            return Err(LevelError::DuplicateGoal(c));
                        }
                    }
                    '.' => floor.push(c),
                    'C' => collectibles.push(c),
                    'U' => power_ups.push(c),
                    _ => {}
                }
            }
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;
        let goal = goal.ok_or(LevelError::MissingGoal)?;

        // Respawn candidates: plain floor plus every starting position.
        floor.push(player);
        floor.extend(enemies.iter().copied());

        Ok(Self {
            block_size,
            columns: width.unwrap_or(0) as i32,
            rows: lines.len() as i32,
            walls,
            enemies,
            player,
            goal,
            floor,
            collectibles,
            power_ups,
        })
    }

    /// Read and parse a level file.
    pub fn load(path: impl AsRef<Path>, block_size: i32) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, block_size)
    }

    /// Build the search grid for this level, with enemies on their starting
    /// cells.
    pub fn grid(&self) -> Grid {
        Grid::new(self.block_size, self.player, self.goal)
            .with_walls(self.walls.iter().copied())
            .with_occupied(self.enemies.iter().copied())
            .with_bounds(self.bounds())
    }

    /// Pixel extent of the map.
    pub fn bounds(&self) -> Range {
        Range::new(
            0,
            0,
            self.columns.saturating_mul(self.block_size),
            self.rows.saturating_mul(self.block_size),
        )
    }

    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    /// Map size in blocks as (columns, rows).
    pub fn size(&self) -> (i32, i32) {
        (self.columns, self.rows)
    }

    pub fn walls(&self) -> &[Cell] {
        &self.walls
    }

    /// Enemy starting cells, in map order.
    pub fn enemies(&self) -> &[Cell] {
        &self.enemies
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Open cells a player can be respawned on: floor plus the player and
    /// enemy starting cells.
    pub fn floor(&self) -> &[Cell] {
        &self.floor
    }

    pub fn collectibles(&self) -> &[Cell] {
        &self.collectibles
    }

    pub fn power_ups(&self) -> &[Cell] {
        &self.power_ups
    }
}

/// Whether every cell of a `columns` x `rows` map, and the neighbours of its
/// border cells, have pixel coordinates that fit in an `i32`.
fn fits(columns: usize, rows: usize, block_size: i32) -> bool {
    let extent = |n: usize| {
        i32::try_from(n)
            .ok()?
            .checked_add(1)?
            .checked_mul(block_size)
    };
    extent(columns).is_some() && extent(rows).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
#####
#P.M#
#.#.#
#C.E#
#####";

    #[test]
    fn parse_roles() {
        let lvl = Level::parse(MAP, 40).unwrap();
        assert_eq!(lvl.size(), (5, 5));
        assert_eq!(lvl.player(), Cell::new(40, 40));
        assert_eq!(lvl.goal(), Cell::new(120, 120));
        assert_eq!(lvl.enemies(), &[Cell::new(120, 40)]);
        assert_eq!(lvl.collectibles(), &[Cell::new(40, 120)]);
        assert!(lvl.power_ups().is_empty());
        assert_eq!(lvl.walls().len(), 17);
        assert_eq!(lvl.bounds(), Range::new(0, 0, 200, 200));
    }

    #[test]
    fn floor_includes_starting_cells() {
        let lvl = Level::parse(MAP, 40).unwrap();
        let floor = lvl.floor();
        assert!(floor.contains(&Cell::new(80, 40)));
        assert!(floor.contains(&lvl.player()));
        assert!(floor.contains(&Cell::new(120, 40)));
        assert!(!floor.contains(&lvl.goal()));
    }

    #[test]
    fn grid_carries_walls_enemies_and_bounds() {
        let lvl = Level::parse(MAP, 40).unwrap();
        let g = lvl.grid();
        assert_eq!(g.start(), lvl.player());
        assert_eq!(g.goal(), lvl.goal());
        assert!(g.is_wall(Cell::ZERO));
        assert!(!g.is_safe(Cell::new(120, 40)));
        assert!(!g.is_traversable(Cell::new(200, 40)));
    }

    #[test]
    fn blank_lines_around_map_are_ignored() {
        let text = format!("\n\n{MAP}\n\n");
        let lvl = Level::parse(&text, 20).unwrap();
        assert_eq!(lvl.size(), (5, 5));
        assert_eq!(lvl.player(), Cell::new(20, 20));
    }

    #[test]
    fn crlf_line_endings() {
        let text = MAP.replace('\n', "\r\n");
        let lvl = Level::parse(&text, 40).unwrap();
        assert_eq!(lvl.size(), (5, 5));
    }

    #[test]
    fn missing_player_is_an_error() {
        let err = Level::parse("#E#", 40).unwrap_err();
        assert!(matches!(err, LevelError::MissingPlayer));
    }

    #[test]
    fn missing_goal_is_an_error() {
        let err = Level::parse("#P#", 40).unwrap_err();
        assert!(matches!(err, LevelError::MissingGoal));
    }

    #[test]
    fn duplicate_player_is_an_error() {
        let err = Level::parse("PPE", 40).unwrap_err();
        assert!(matches!(err, LevelError::DuplicatePlayer(c) if c == Cell::new(40, 0)));
    }

    #[test]
    fn ragged_lines_are_rejected() {
        let err = Level::parse("#P#\n#E", 40).unwrap_err();
        match err {
            LevelError::InconsistentWidth {
                line,
                expected,
                found,
            } => {
                assert_eq!((line, expected, found), (2, 3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_block_size() {
        assert!(matches!(
            Level::parse(MAP, 0),
            Err(LevelError::InvalidBlockSize(0))
        ));
    }

    #[test]
    fn huge_block_size_is_an_error() {
        let err = Level::parse("P.E", 1_500_000_000).unwrap_err();
        match err {
            LevelError::TooLarge {
                columns,
                rows,
                block_size,
            } => assert_eq!((columns, rows, block_size), (3, 1, 1_500_000_000)),
            other => panic!("unexpected error: {other}"),
        }
        // The largest block size that still fits parses fine.
        let lvl = Level::parse("P.E", i32::MAX / 4).unwrap();
        assert_eq!(lvl.goal(), Cell::new(2 * (i32::MAX / 4), 0));
        assert_eq!(lvl.bounds().max.x, 3 * (i32::MAX / 4));
    }

    #[test]
    fn load_missing_file() {
        let err = Level::load("/nonexistent/labyrinth/level.txt", 40).unwrap_err();
        assert!(matches!(err, LevelError::Io(_)));
    }
}
