//! Built-in grids with default endpoints.

use gridstar_core::{Grid, GridError, Position, Range};

const SERPENTINE: &str = "\
..........
#########.
..........
.#########
..........
#########.
..........
.#########
..........
#########.";

/// A named built-in grid.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 10×10 with a wall down column 4, open only at row 5 and row 9.
    Wall,
    /// 10×10 with no obstacles.
    Open,
    /// 10×10 corridor that doubles back on itself.
    Serpentine,
}

impl Preset {
    pub fn grid(self) -> Result<Grid, GridError> {
        match self {
            Self::Wall => Ok(Grid::new(10, 10)?
                .with_blocked_range(Range::new(0, 4, 5, 5))
                .with_blocked_range(Range::new(6, 4, 9, 5))),
            Self::Open => Grid::new(10, 10),
            Self::Serpentine => Grid::parse(SERPENTINE),
        }
    }

    pub fn start(self) -> Position {
        Position::new(0, 0)
    }

    pub fn goal(self) -> Position {
        match self {
            Self::Wall => Position::new(7, 6),
            Self::Open => Position::new(4, 4),
            Self::Serpentine => Position::new(8, 8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::search;

    const ALL: [Preset; 3] = [Preset::Wall, Preset::Open, Preset::Serpentine];

    #[test]
    fn endpoints_are_open() {
        for p in ALL {
            let g = p.grid().unwrap();
            assert_eq!((g.rows(), g.cols()), (10, 10), "{p:?}");
            assert!(g.is_open(p.start()), "{p:?}");
            assert!(g.is_open(p.goal()), "{p:?}");
        }
    }

    #[test]
    fn wall_layout() {
        let g = Preset::Wall.grid().unwrap();
        let blocked: Vec<_> = g.iter().filter(|(_, c)| !c.is_open()).map(|(p, _)| p).collect();
        assert_eq!(blocked.len(), 8);
        assert!(blocked.iter().all(|p| p.col == 4));
        assert!(g.is_open(Position::new(5, 4)));
        assert!(g.is_open(Position::new(9, 4)));
    }

    #[test]
    fn every_preset_is_solvable() {
        for p in ALL {
            let g = p.grid().unwrap();
            let path = search(&g, p.start(), p.goal()).unwrap();
            assert!(path.is_some(), "{p:?}");
        }
    }

    #[test]
    fn wall_path_goes_through_gap() {
        let g = Preset::Wall.grid().unwrap();
        let path = search(&g, Preset::Wall.start(), Preset::Wall.goal()).unwrap().unwrap();
        assert!(path.contains(&Position::new(5, 4)));
        assert_eq!(path.len(), 8);
    }
}
