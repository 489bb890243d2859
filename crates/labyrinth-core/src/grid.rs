//! The maze graph seen by the search engine.
//!
//! A [`Grid`] is a snapshot of one level: the static wall set, the cells
//! currently held by enemies, the start and goal cells, and the block size
//! that separates neighbouring cells. Searches borrow it immutably; the enemy
//! tick refreshes the occupied set between controller steps.

use std::collections::HashSet;

use crate::geom::{Cell, Direction, Range};

/// Maze snapshot: walls, enemy-occupied cells, start and goal.
#[derive(Debug, Clone)]
pub struct Grid {
    block_size: i32,
    walls: HashSet<Cell>,
    occupied: HashSet<Cell>,
    start: Cell,
    goal: Cell,
    bounds: Option<Range>,
}

impl Grid {
    /// Create an empty, unbounded grid with the given block size.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is not positive.
    pub fn new(block_size: i32, start: Cell, goal: Cell) -> Self {
        assert!(block_size > 0, "block size must be positive");
        debug_assert!(
            start.is_aligned(block_size) && goal.is_aligned(block_size),
            "start {start} and goal {goal} must be multiples of {block_size}"
        );
        Self {
            block_size,
            walls: HashSet::new(),
            occupied: HashSet::new(),
            start,
            goal,
            bounds: None,
        }
    }

    /// Replace the wall set.
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Cell>) -> Self {
        self.walls = walls.into_iter().collect();
        self
    }

    /// Replace the occupied set.
    pub fn with_occupied(mut self, occupied: impl IntoIterator<Item = Cell>) -> Self {
        self.set_occupied(occupied);
        self
    }

    /// Restrict traversable cells to `bounds`.
    pub fn with_bounds(mut self, bounds: Range) -> Self {
        self.bounds = Some(bounds);
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Distance in pixels between neighbouring cells.
    #[inline]
    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn bounds(&self) -> Option<Range> {
        self.bounds
    }

    pub fn walls(&self) -> &HashSet<Cell> {
        &self.walls
    }

    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    pub fn set_start(&mut self, start: Cell) {
        debug_assert!(start.is_aligned(self.block_size), "unaligned start {start}");
        self.start = start;
    }

    pub fn set_goal(&mut self, goal: Cell) {
        debug_assert!(goal.is_aligned(self.block_size), "unaligned goal {goal}");
        self.goal = goal;
    }

    /// Replace the enemy-occupied cells with a fresh snapshot.
    pub fn set_occupied(&mut self, occupied: impl IntoIterator<Item = Cell>) {
        self.occupied.clear();
        self.occupied.extend(occupied);
    }

    // -----------------------------------------------------------------------
    // Graph queries
    // -----------------------------------------------------------------------

    /// The four neighbours of `c` in canonical order: Down, Right, Up, Left.
    #[inline]
    pub fn neighbors(&self, c: Cell) -> [Cell; 4] {
        Direction::CANONICAL.map(|d| c.step(d, self.block_size))
    }

    #[inline]
    pub fn is_wall(&self, c: Cell) -> bool {
        self.walls.contains(&c)
    }

    /// Whether `c` can be walked on at all: not a wall, and inside the
    /// bounds when the grid has any.
    #[inline]
    pub fn is_traversable(&self, c: Cell) -> bool {
        if let Some(b) = self.bounds {
            if !b.contains(c) {
                return false;
            }
        }
        !self.is_wall(c)
    }

    /// Whether no enemy currently stands on `c`.
    #[inline]
    pub fn is_safe(&self, c: Cell) -> bool {
        !self.occupied.contains(&c)
    }

    /// Traversable and safe: the predicate every search expands with.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.is_traversable(c) && self.is_safe(c)
    }

    /// Snap a pixel position to this grid's blocks.
    #[inline]
    pub fn align(&self, p: Cell) -> Cell {
        p.align(self.block_size)
    }
}
