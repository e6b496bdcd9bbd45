//! An immutable grid of [`Cell`]s.
//!
//! A [`Grid`] owns a row-major cell buffer whose dimensions are fixed at
//! construction. It has no interior mutability, so a `&Grid` can be read
//! from several threads at once.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Position, Range};

/// A rectangular 2D grid of open and blocked cells.
///
/// With the `serde` feature a grid serializes as an array of rows of
/// integer markers, and deserialization goes through [`Grid::from_markers`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell open.
    ///
    /// Fails with [`GridError::Empty`] if either dimension is not positive.
    /// Fails with [`GridError::TooLarge`] if it would hold more than
    /// `i32::MAX` cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Open; len],
        })
    }

    /// Create a grid from a row-major cell buffer.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Cell>) -> Result<Self, GridError> {
        let expected = cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from rows of integer markers (`0` open, else blocked).
    ///
    /// Every row must have the same length as the first one.
    pub fn from_markers<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InconsistentWidth {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&m| Cell::from_marker(m)));
        }
        let (nrows, ncols) = dims(rows.len(), width)?;
        Self::from_cells(nrows, ncols, cells)
    }

    /// Parse a grid from text.
    ///
    /// Each non-blank line is a row and each significant character a cell:
    /// `.` and `0` are open, `#` and `1`–`9` are blocked. Spaces, tabs,
    /// commas and square brackets are ignored, so `[0, 1, 0]` is a valid
    /// row.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0usize;

        for line in s.lines() {
            let start = cells.len();
            for ch in line.chars() {
                let cell = match ch {
                    ' ' | '\t' | '\r' | ',' | '[' | ']' => continue,
                    '.' | '0' => Cell::Open,
                    '#' | '1'..='9' => Cell::Blocked,
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            row: rows,
                            col: cells.len() - start,
                        });
                    }
                };
                cells.push(cell);
            }
            let found = cells.len() - start;
            if found == 0 {
                continue;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::InconsistentWidth {
                        row: rows,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(width) = width else {
            return Err(GridError::Empty);
        };
        let (nrows, ncols) = dims(rows, width)?;
        Self::from_cells(nrows, ncols, cells)
    }

    /// Return a copy of this grid with `p` blocked. Off-grid positions are
    /// ignored.
    pub fn with_blocked(mut self, p: Position) -> Self {
        if let Some(i) = self.index(p) {
            self.cells[i] = Cell::Blocked;
        }
        self
    }

    /// Return a copy of this grid with `p` open. Off-grid positions are
    /// ignored.
    pub fn with_open(mut self, p: Position) -> Self {
        if let Some(i) = self.index(p) {
            self.cells[i] = Cell::Open;
        }
        self
    }

    /// Return a copy of this grid with every in-grid position of `rng`
    /// blocked.
    pub fn with_blocked_range(mut self, rng: Range) -> Self {
        for p in rng {
            if let Some(i) = self.index(p) {
                self.cells[i] = Cell::Blocked;
            }
        }
        self
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The range covered by this grid, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Constructors reject empty grids, so
    /// this is `false` for every `Grid` that exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given position.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds().contains(p)
    }

    /// Convert a position to a flat row-major index. `None` if off-grid.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Get the cell at a position, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is on the grid and open.
    #[inline]
    pub fn is_open(&self, p: Position) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Count open cells.
    pub fn count_open(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// The grid as rows of integer markers.
    pub fn to_markers(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|c| c.marker()).collect())
            .collect()
    }

    /// Iterate over `(Position, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.position(i), c))
    }
}

impl fmt::Display for Grid {
    /// Renders the grid in the text format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for c in row {
                f.write_str(if c.is_open() { "." } else { "#" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        Self::from_markers(&rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(g: Grid) -> Self {
        g.to_markers()
    }
}

/// Number of cells in a `rows × cols` grid, checked against the limits
/// every constructor enforces.
fn cell_count(rows: i32, cols: i32) -> Result<usize, GridError> {
    if rows <= 0 || cols <= 0 {
        return Err(GridError::Empty);
    }
    let (r, c) = (rows as usize, cols as usize);
    match r.checked_mul(c) {
        Some(n) if n <= i32::MAX as usize => Ok(n),
        _ => Err(GridError::TooLarge { rows: r, cols: c }),
    }
}

/// Convert counted dimensions to the `i32` the grid stores.
fn dims(rows: usize, cols: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(GridError::TooLarge { rows, cols }),
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a cell marker.
    InvalidChar { ch: char, row: usize, col: usize },
    /// The cell buffer length does not match `rows × cols`.
    SizeMismatch { expected: usize, found: usize },
    /// More than `i32::MAX` cells.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: must have at least one row and one column"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, row, col } => {
                write!(
                    f,
                    "grid: invalid cell marker \u{201c}{ch}\u{201d} at row {row}, column {col}"
                )
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid: {found} cells given, expected {expected}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: {rows}x{cols} exceeds {} cells", i32::MAX)
            }
        }
    }
}

impl std::error::Error for GridError {}
