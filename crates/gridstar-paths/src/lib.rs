//! A* pathfinding over open/blocked 2D grids.
//!
//! The entry point is [`search`], which finds a path between two cells of a
//! [`Grid`](gridstar_core::Grid) with the default configuration:
//!
//! - 8-way movement, every step costing 1 whether orthogonal or diagonal;
//! - squared Euclidean distance to the goal as the heuristic;
//! - the frontier entry with the lowest `f = g + h` is expanded next, and
//!   among equal `f` the one queued first wins.
//!
//! [`Search`] runs the same algorithm with a [`SearchConfig`] and reports
//! [`SearchStats`] alongside the path.
//!
//! # Cost model
//!
//! Diagonal and orthogonal steps cost the same while the default heuristic
//! is a squared Euclidean distance. The heuristic therefore overestimates
//! for distant goals and the returned path may take more steps than the
//! shortest one. [`Heuristic::Chebyshev`] (or [`Heuristic::Manhattan`] with
//! [`Movement::FourWay`]) never overestimates and yields shortest paths.
//!
//! # Duplicate frontier entries
//!
//! By default ([`DuplicatePolicy::Keep`]) a successor is dropped only when
//! the same cell is already queued with a strictly lower `g`; otherwise it
//! is queued next to the existing entry, so a cell may be expanded more
//! than once. [`DuplicatePolicy::Replace`] gives textbook A* instead.

mod astar;
mod config;
mod distance;
mod error;
mod frontier;
mod neighbors;

pub use astar::{Search, SearchOutcome, SearchStats, search};
pub use config::{DuplicatePolicy, Heuristic, SearchConfig};
pub use distance::{chebyshev, manhattan, squared_euclidean};
pub use error::SearchError;
pub use neighbors::{Movement, Neighbors};
