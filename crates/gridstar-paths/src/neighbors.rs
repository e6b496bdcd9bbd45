use gridstar_core::Position;

/// Which moves a search may take from a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Orthogonal and diagonal moves, all of cost 1.
    #[default]
    EightWay,
    /// Orthogonal moves only.
    FourWay,
}

/// Cached neighbor computation helper.
///
/// Enumerates the successors of a grid position in generation order
/// (see [`Position::neighbors_8`]), filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 4-directional neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Position, keep: impl Fn(Position) -> bool) -> &[Position] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// Return the 8-directional neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn all(&mut self, p: Position, keep: impl Fn(Position) -> bool) -> &[Position] {
        self.buf.clear();
        self.buf.extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// Neighbors of `p` under `movement`, filtered by `keep`.
    pub fn of(
        &mut self,
        p: Position,
        movement: Movement,
        keep: impl Fn(Position) -> bool,
    ) -> &[Position] {
        match movement {
            Movement::EightWay => self.all(p, keep),
            Movement::FourWay => self.cardinal(p, keep),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Grid;

    #[test]
    fn corner_keeps_in_bounds_only() {
        let grid = Grid::new(3, 3).unwrap();
        let mut nb = Neighbors::new();
        let got = nb.all(Position::new(0, 0), |n| grid.is_open(n));
        assert_eq!(
            got,
            &[Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn blocked_cells_filtered() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let mut nb = Neighbors::new();
        let got = nb.all(Position::new(0, 0), |n| grid.is_open(n));
        assert_eq!(got, &[Position::new(0, 1), Position::new(1, 0)]);
        let got = nb.of(Position::new(1, 0), Movement::FourWay, |n| grid.is_open(n));
        assert_eq!(got, &[Position::new(0, 0), Position::new(2, 0)]);
    }

    #[test]
    fn open_interior_has_eight() {
        let grid = Grid::new(3, 3).unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(Position::new(1, 1), Movement::EightWay, |n| grid.is_open(n)).len(), 8);
        assert_eq!(nb.of(Position::new(1, 1), Movement::FourWay, |n| grid.is_open(n)).len(), 4);
    }
}
