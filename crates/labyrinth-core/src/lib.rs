//! **labyrinth-core**: core types for the Labyrinth maze game.
//!
//! This crate provides the value types shared by the search engine and the
//! autosolve controller: block-aligned [`Cell`] positions, the four
//! canonical [`Direction`]s, the [`Grid`] snapshot (walls, enemy-occupied
//! cells, start and goal) with its traversability and safety predicates,
//! and the ASCII [`Level`] format the game's maps are written in.

pub mod geom;
pub mod grid;
pub mod level;

pub use geom::{Cell, Direction, Range};
pub use grid::Grid;
pub use level::{Level, LevelError};
