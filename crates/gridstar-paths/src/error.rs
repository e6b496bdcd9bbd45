use std::fmt;

use gridstar_core::{Position, Range};

/// Errors returned by a search.
///
/// Failing to find a path is not an error; it is reported as an absent
/// path. Empty grids cannot be constructed, see
/// [`GridError::Empty`](gridstar_core::GridError::Empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start position is outside the grid.
    StartOutOfBounds { pos: Position, bounds: Range },
    /// The goal position is outside the grid.
    GoalOutOfBounds { pos: Position, bounds: Range },
    /// The configured expansion budget ran out before the search finished.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { pos, bounds } => {
                write!(f, "search: start {pos} is outside grid bounds {bounds}")
            }
            Self::GoalOutOfBounds { pos, bounds } => {
                write!(f, "search: goal {pos} is outside grid bounds {bounds}")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search: gave up after {limit} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}
