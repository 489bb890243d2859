//! Geometry primitives: [`Cell`], [`Direction`] and [`Range`].
//!
//! Maze coordinates are pixel positions of block top-left corners, so every
//! cell the game produces is a multiple of the level's block size.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A block-aligned maze position. X grows right, Y grows down.
///
/// Cells are plain values: equality and hashing are exact integer
/// comparisons.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one block away in direction `dir`.
    #[inline]
    pub fn step(self, dir: Direction, block_size: i32) -> Self {
        self + dir.delta(block_size)
    }

    /// Snap an arbitrary pixel position to the top-left corner of the block
    /// containing it.
    #[inline]
    pub fn align(self, block_size: i32) -> Self {
        Self::new(
            self.x.div_euclid(block_size) * block_size,
            self.y.div_euclid(block_size) * block_size,
        )
    }

    /// Whether both coordinates are multiples of `block_size`.
    #[inline]
    pub fn is_aligned(self, block_size: i32) -> bool {
        self.x.rem_euclid(block_size) == 0 && self.y.rem_euclid(block_size) == 0
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Cell {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four axis-aligned moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Canonical neighbour order. Every search expands neighbours in this
    /// order, so it decides which of several equal paths wins.
    pub const CANONICAL: [Direction; 4] = [Self::Down, Self::Right, Self::Up, Self::Left];

    /// Offset of one step of `block_size` pixels in this direction.
    #[inline]
    pub const fn delta(self, block_size: i32) -> Cell {
        match self {
            Self::Down => Cell::new(0, block_size),
            Self::Right => Cell::new(block_size, 0),
            Self::Up => Cell::new(0, -block_size),
            Self::Left => Cell::new(-block_size, 0),
        }
    }

    /// The direction leading from `from` to the adjacent cell `to`, if they
    /// are exactly one block apart on one axis.
    pub fn between(from: Cell, to: Cell, block_size: i32) -> Option<Self> {
        Self::CANONICAL
            .into_iter()
            .find(|d| from + d.delta(block_size) == to)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open pixel rectangle \[min, max). `min` is inclusive, `max` is
/// exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Cell,
    pub max: Cell,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Cell::new(x0.min(x1), y0.min(y1)),
            max: Cell::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Cell) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}
