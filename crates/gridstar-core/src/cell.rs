//! The [`Cell`] type: a single grid square, traversable or not.

/// A grid cell. Open cells cost nothing to enter; blocked cells are
/// impassable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Blocked,
}

impl Cell {
    /// Map an integer marker to a cell: `0` is open, anything else blocked.
    #[inline]
    pub const fn from_marker(marker: i32) -> Self {
        if marker == 0 { Self::Open } else { Self::Blocked }
    }

    /// The canonical integer marker for this cell.
    #[inline]
    pub const fn marker(self) -> i32 {
        match self {
            Self::Open => 0,
            Self::Blocked => 1,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<i32> for Cell {
    fn from(marker: i32) -> Self {
        Self::from_marker(marker)
    }
}
