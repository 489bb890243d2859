use labyrinth_core::Cell;

/// Straight-line (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    f64::from(b.x - a.x).hypot(f64::from(b.y - a.y))
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_345() {
        assert_eq!(euclidean(Cell::new(0, 0), Cell::new(120, 160)), 200.0);
        assert_eq!(euclidean(Cell::new(40, 40), Cell::new(40, 40)), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let a = Cell::new(-40, 80);
        let b = Cell::new(200, -120);
        assert!(euclidean(a, b) <= f64::from(manhattan(a, b)));
    }
}
