//! Terminal drawing of a grid with a path overlay.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridstar_core::{Grid, Position};

const COL_WALL: Color = Color::Rgb { r: 100, g: 100, b: 130 };
const COL_FLOOR: Color = Color::Rgb { r: 60, g: 55, b: 50 };
const COL_PATH: Color = Color::Rgb { r: 50, g: 180, b: 255 };
const COL_START: Color = Color::Rgb { r: 80, g: 200, b: 80 };
const COL_GOAL: Color = Color::Rgb { r: 255, g: 220, b: 80 };

/// Draw `grid` row by row: `#` blocked, `.` open, `*` on the path, `S` and
/// `G` for the endpoints. Colours are emitted only when `color` is set.
pub fn render_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    start: Position,
    goal: Position,
    path: Option<&[Position]>,
    color: bool,
) -> io::Result<()> {
    let on_path: HashSet<Position> = path.into_iter().flatten().copied().collect();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let p = Position::new(row, col);
            let (ch, fg) = if p == start {
                ('S', COL_START)
            } else if p == goal {
                ('G', COL_GOAL)
            } else if on_path.contains(&p) {
                ('*', COL_PATH)
            } else if grid.is_open(p) {
                ('.', COL_FLOOR)
            } else {
                ('#', COL_WALL)
            };
            if color {
                queue!(out, SetForegroundColor(fg), Print(ch))?;
            } else {
                queue!(out, Print(ch))?;
            }
        }
        if color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(grid: &Grid, path: Option<&[Position]>, color: bool) -> String {
        let mut buf = Vec::new();
        render_grid(&mut buf, grid, Position::new(0, 0), Position::new(2, 2), path, color).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_overlay() {
        let g = Grid::parse("...\n.#.\n...").unwrap();
        let path = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 2), Position::new(2, 2)];
        assert_eq!(render(&g, Some(&path), false), "S*.\n.#*\n..G\n");
    }

    #[test]
    fn without_path() {
        let g = Grid::parse("..#\n...\n#..").unwrap();
        assert_eq!(render(&g, None, false), "S.#\n...\n#.G\n");
    }

    #[test]
    fn colour_adds_escapes() {
        let g = Grid::parse("...\n...\n...").unwrap();
        let out = render(&g, None, true);
        assert!(out.contains('\u{1b}'));
        assert!(out.contains('S') && out.contains('G'));
    }
}
