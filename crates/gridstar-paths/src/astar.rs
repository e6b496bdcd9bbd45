use std::time::{Duration, Instant};

use gridstar_core::{Grid, Position};

use crate::config::{DuplicatePolicy, SearchConfig};
use crate::error::SearchError;
use crate::frontier::{Frontier, Node, Tree};
use crate::neighbors::Neighbors;

/// Counters gathered during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded, the goal included.
    pub expanded: usize,
    /// Successor nodes created and queued (the start node is not counted).
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Result of a completed search.
///
/// Two outcomes compare equal when their paths and stats match; the
/// measured `elapsed` time is ignored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Start-to-goal positions, both inclusive, or `None` if the goal is
    /// unreachable.
    pub path: Option<Vec<Position>>,
    pub stats: SearchStats,
    /// Wall-clock time spent in the search loop.
    pub elapsed: Duration,
}

impl PartialEq for SearchOutcome {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.stats == other.stats
    }
}

impl Eq for SearchOutcome {}

impl SearchOutcome {
    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps in the path, each of cost 1.
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// A configured A* search.
///
/// `Search` holds configuration only; every call to [`run`](Self::run)
/// builds and drops its own frontier and visited set, so one `Search` can
/// serve many threads over a shared `&Grid`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Search {
    config: SearchConfig,
}

impl Search {
    /// Create a search with the given configuration.
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a path from `start` to `goal` on `grid`.
    ///
    /// Out-of-bounds endpoints are rejected before any search work. An
    /// unreachable goal is not an error: the outcome's `path` is `None`.
    pub fn run(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, SearchError> {
        let bounds = grid.bounds();
        if !grid.contains(start) {
            return Err(SearchError::StartOutOfBounds { pos: start, bounds });
        }
        if !grid.contains(goal) {
            return Err(SearchError::GoalOutOfBounds { pos: goal, bounds });
        }

        let began = Instant::now();
        let mut engine = Engine::new(grid, goal, self.config);
        let found = engine.run(start)?;
        let elapsed = began.elapsed();
        let path = found.map(|idx| engine.tree.path_to(idx));
        let stats = engine.stats();

        match &path {
            Some(p) => log::debug!(
                "astar {start} -> {goal}: {} steps, {} expanded, {} generated in {elapsed:?}",
                p.len() - 1,
                stats.expanded,
                stats.generated
            ),
            None => log::debug!(
                "astar {start} -> {goal}: no path, {} expanded, {} generated in {elapsed:?}",
                stats.expanded,
                stats.generated
            ),
        }
        Ok(SearchOutcome {
            path,
            stats,
            elapsed,
        })
    }
}

/// Find a path from `start` to `goal` with the default configuration.
///
/// Returns the positions from `start` to `goal` inclusive, or `None` when
/// no path exists.
pub fn search(
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<Option<Vec<Position>>, SearchError> {
    Search::default().run(grid, start, goal).map(|o| o.path)
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Per-call search state.
struct Engine<'g> {
    grid: &'g Grid,
    goal: Position,
    config: SearchConfig,
    tree: Tree,
    frontier: Frontier,
    visited: Vec<bool>,
    expanded: usize,
}

impl<'g> Engine<'g> {
    fn new(grid: &'g Grid, goal: Position, config: SearchConfig) -> Self {
        Self {
            grid,
            goal,
            config,
            tree: Tree::default(),
            frontier: Frontier::new(grid.len()),
            visited: vec![false; grid.len()],
            expanded: 0,
        }
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.expanded,
            generated: self.tree.len().saturating_sub(1),
            max_frontier: self.frontier.peak(),
        }
    }

    fn insert(&mut self, node: Node) {
        let idx = self.tree.push(node);
        self.frontier.push(idx, &node);
    }

    /// Run to completion. Returns the tree index of the goal node, if
    /// reached.
    fn run(&mut self, start: Position) -> Result<Option<usize>, SearchError> {
        let grid = self.grid;
        let Some(start_cell) = grid.index(start) else {
            return Ok(None);
        };
        self.insert(Node {
            pos: start,
            cell: start_cell,
            parent: None,
            g: 0,
            h: 0,
        });

        let mut nbuf = Neighbors::new();

        while let Some(ci) = self.frontier.pop() {
            let current = *self.tree.get(ci);

            if self.visited[current.cell] && self.config.duplicates == DuplicatePolicy::Replace {
                continue;
            }
            if let Some(limit) = self.config.max_expansions {
                if self.expanded >= limit {
                    log::warn!("astar: expansion limit {limit} reached");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            self.visited[current.cell] = true;
            self.expanded += 1;
            log::trace!(
                "expand {} g={} f={} frontier={}",
                current.pos,
                current.g,
                current.f(),
                self.frontier.len()
            );

            if current.pos == self.goal {
                return Ok(Some(ci));
            }

            let g = current.g + 1;
            let successors = nbuf.of(current.pos, self.config.movement, |n| grid.is_open(n));
            for &np in successors {
                let Some(cell) = grid.index(np) else {
                    continue;
                };
                if self.visited[cell] {
                    continue;
                }
                if let Some(best) = self.frontier.best_g(cell) {
                    let dominated = match self.config.duplicates {
                        DuplicatePolicy::Keep => best < g,
                        DuplicatePolicy::Replace => best <= g,
                    };
                    if dominated {
                        continue;
                    }
                }
                self.insert(Node {
                    pos: np,
                    cell,
                    parent: Some(ci),
                    g,
                    h: self.config.heuristic.estimate(np, self.goal),
                });
            }
        }

        Ok(None)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let grid = Grid::parse("..\n..").unwrap();
        let out = Search::default()
            .run(&grid, Position::new(0, 0), Position::new(1, 1))
            .unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(out, back);
        assert_eq!(out.elapsed, back.elapsed);
    }
}
