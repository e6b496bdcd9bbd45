//! Grid loading from files and random generation.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use gridstar_core::{Grid, GridError, Position};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Errors that can occur when loading a grid.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Grid(GridError),
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading grid: {e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "grid: invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Read a grid from `path`.
///
/// Files ending in `.json` must hold an array of rows of integer markers;
/// anything else is read with [`Grid::parse`].
pub fn load_grid(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(&text)?)
    } else {
        Ok(Grid::parse(&text)?)
    }
}

/// Generate a `rows × cols` grid where each cell is blocked with
/// probability `density`, then reopen every position in `keep_open`.
///
/// The same seed always produces the same grid.
pub fn random_grid(
    rows: i32,
    cols: i32,
    density: f64,
    seed: u64,
    keep_open: &[Position],
) -> Result<Grid, GridError> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = Grid::new(rows, cols)?;
    let grid = grid.bounds().iter().fold(grid, |g, p| {
        if rng.random_bool(density) { g.with_blocked(p) } else { g }
    });
    Ok(keep_open.iter().fold(grid, |g, &p| g.with_open(p)))
}

/// Parse a position written as `row,col`.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = r.trim().parse().map_err(|e| format!("bad row \u{201c}{r}\u{201d}: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad column \u{201c}{c}\u{201d}: {e}"))?;
    Ok(Position::new(row, col))
}

/// Parse a grid size written as `ROWSxCOLS`.
pub fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (r, c) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got \u{201c}{s}\u{201d}"))?;
    let rows: i32 = r.trim().parse().map_err(|e| format!("bad rows \u{201c}{r}\u{201d}: {e}"))?;
    let cols: i32 = c.trim().parse().map_err(|e| format!("bad columns \u{201c}{c}\u{201d}: {e}"))?;
    if rows <= 0 || cols <= 0 {
        return Err(format!("grid size must be positive, got {rows}x{cols}"));
    }
    Ok((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Scratch directory removed on drop.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new(test: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("gridstar-load-{}-{test}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn file(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.0.join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn loads_text_grid() {
        let tmp = TempDir::new("text");
        let path = tmp.file("room.txt", "..#\n...\n");
        let g = load_grid(&path).unwrap();
        assert_eq!(g.rows(), 2);
        assert!(!g.is_open(Position::new(0, 2)));
    }

    #[test]
    fn loads_json_grid() {
        let tmp = TempDir::new("json");
        let path = tmp.file("room.JSON", "[[0, 0, 3], [0, 0, 0]]");
        let g = load_grid(&path).unwrap();
        assert_eq!(g.cols(), 3);
        assert!(!g.is_open(Position::new(0, 2)));
    }

    #[test]
    fn scratch_dir_is_removed() {
        let tmp = TempDir::new("cleanup");
        let dir = tmp.0.clone();
        tmp.file("a.txt", ".");
        drop(tmp);
        assert!(!dir.exists());
    }

    #[test]
    fn load_errors() {
        let missing = std::env::temp_dir().join("gridstar-definitely-missing.txt");
        assert!(matches!(load_grid(&missing), Err(LoadError::Io(_))));
        let tmp = TempDir::new("errors");
        let ragged = tmp.file("ragged.txt", "...\n..");
        assert!(matches!(
            load_grid(&ragged),
            Err(LoadError::Grid(GridError::InconsistentWidth { .. }))
        ));
        let bad_json = tmp.file("bad.json", "[[0, 1], [0]]");
        assert!(matches!(load_grid(&bad_json), Err(LoadError::Json(_))));
    }

    #[test]
    fn random_grid_is_seeded() {
        let keep = [Position::new(0, 0), Position::new(7, 9)];
        let a = random_grid(8, 10, 0.4, 42, &keep).unwrap();
        let b = random_grid(8, 10, 0.4, 42, &keep).unwrap();
        assert_eq!(a, b);
        assert!(a.is_open(Position::new(0, 0)));
        assert!(a.is_open(Position::new(7, 9)));
    }

    #[test]
    fn random_grid_density_extremes() {
        assert_eq!(random_grid(4, 4, 0.0, 1, &[]).unwrap().count_open(), 16);
        assert_eq!(random_grid(4, 4, 1.0, 1, &[]).unwrap().count_open(), 0);
        assert_eq!(random_grid(4, 4, f64::NAN, 1, &[]).unwrap().count_open(), 16);
        assert_eq!(random_grid(0, 4, 0.5, 1, &[]), Err(GridError::Empty));
    }

    #[test]
    fn random_grid_rejects_oversized() {
        assert!(matches!(
            random_grid(50_000, 50_000, 0.3, 1, &[]),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn positions_and_sizes() {
        assert_eq!(parse_position("7,6"), Ok(Position::new(7, 6)));
        assert_eq!(parse_position(" 0 , -1 "), Ok(Position::new(0, -1)));
        assert!(parse_position("7").is_err());
        assert!(parse_position("a,1").is_err());
        assert_eq!(parse_size("10x12"), Ok((10, 12)));
        assert_eq!(parse_size("3X4"), Ok((3, 4)));
        assert!(parse_size("0x4").is_err());
        assert!(parse_size("10").is_err());
    }
}
