//! Search configuration.

use gridstar_core::Position;

use crate::distance;
use crate::neighbors::Movement;

/// Heuristic estimate of the remaining cost to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `Δrow² + Δcol²`. Not a lower bound on the step count once the goal
    /// is more than one step away, so paths may be longer than the
    /// shortest one.
    #[default]
    SquaredEuclidean,
    /// `|Δrow| + |Δcol|`. Admissible for [`Movement::FourWay`].
    Manhattan,
    /// `max(|Δrow|, |Δcol|)`. Admissible for both movement modes.
    Chebyshev,
    /// Always zero; the search degenerates to uniform-cost search.
    Zero,
}

impl Heuristic {
    /// Estimate from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Position, goal: Position) -> u64 {
        match self {
            Self::SquaredEuclidean => distance::squared_euclidean(from, goal),
            Self::Manhattan => distance::manhattan(from, goal),
            Self::Chebyshev => distance::chebyshev(from, goal),
            Self::Zero => 0,
        }
    }
}

/// What to do when a successor is generated for a position that already
/// has a frontier entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Drop the candidate only if an existing entry is strictly cheaper;
    /// otherwise add it alongside the existing ones. A position may then
    /// sit in the frontier several times and be expanded more than once.
    #[default]
    Keep,
    /// Drop the candidate unless it is strictly cheaper than every
    /// existing entry. Superseded entries are discarded when popped and a
    /// position is expanded at most once.
    Replace,
}

/// Configuration for a [`Search`](crate::Search).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub movement: Movement,
    pub heuristic: Heuristic,
    pub duplicates: DuplicatePolicy,
    /// Give up with [`SearchError::ExpansionLimit`](crate::SearchError)
    /// after this many expansions.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Set the movement mode (builder).
    pub const fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Set the heuristic (builder).
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the duplicate policy (builder).
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Set the expansion budget (builder).
    pub const fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = SearchConfig::default()
            .with_movement(Movement::FourWay)
            .with_duplicates(DuplicatePolicy::Replace)
            .with_max_expansions(64);
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
