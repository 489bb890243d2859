//! Plain-text maze rendering.

use labyrinth_core::{Cell, Level};

/// What to draw on top of the level's static layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overlay<'a> {
    pub player: Option<Cell>,
    pub enemies: &'a [Cell],
    pub path: &'a [Cell],
    pub explored: &'a [Cell],
}

/// Draw `level` one character per block.
///
/// Layers, lowest first: level layout, explored cells (`,`), path cells
/// (`*`), enemies (`M`), player (`P`). Walls and the goal always win over
/// the search layers.
pub fn render(level: &Level, overlay: &Overlay<'_>) -> String {
    let bs = level.block_size();
    let (cols, rows) = level.size();
    let mut canvas = vec![vec![' '; cols as usize]; rows as usize];

    let mut put = |c: Cell, ch: char| {
        let (x, y) = (c.x / bs, c.y / bs);
        if (0..cols).contains(&x) && (0..rows).contains(&y) {
            canvas[y as usize][x as usize] = ch;
        }
    };

    for &c in level.floor() {
        put(c, '.');
    }
    for &c in level.collectibles() {
        put(c, 'C');
    }
    for &c in level.power_ups() {
        put(c, 'U');
    }
    for &c in overlay.explored {
        put(c, ',');
    }
    for &c in overlay.path {
        put(c, '*');
    }
    for &c in overlay.enemies {
        put(c, 'M');
    }
    if let Some(p) = overlay.player {
        put(p, 'P');
    }
    put(level.goal(), 'E');
    for &c in level.walls() {
        put(c, '#');
    }

    let mut out = String::with_capacity(((cols + 1) * rows) as usize);
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: i32 = 40;
    const MAP: &str = "\
#####
#P.C#
#.#.#
#M.E#
#####";

    #[test]
    fn bare_level_round_trips() {
        let level = Level::parse(MAP, S).unwrap();
        let overlay = Overlay {
            player: Some(level.player()),
            enemies: level.enemies(),
            ..Overlay::default()
        };
        assert_eq!(render(&level, &overlay), format!("{MAP}\n"));
    }

    #[test]
    fn path_is_drawn_under_the_player() {
        let level = Level::parse(MAP, S).unwrap();
        let path = [
            Cell::new(S, S),
            Cell::new(2 * S, S),
            Cell::new(3 * S, S),
            Cell::new(3 * S, 2 * S),
            Cell::new(3 * S, 3 * S),
        ];
        let overlay = Overlay {
            player: Some(level.player()),
            path: &path,
            ..Overlay::default()
        };
        let text = render(&level, &overlay);
        assert_eq!(text.lines().nth(1), Some("#P**#"));
        assert_eq!(text.lines().nth(2), Some("#.#*#"));
        assert_eq!(text.lines().nth(3), Some("#..E#"));
    }
}
