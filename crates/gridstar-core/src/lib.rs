//! Core types for grid pathfinding.
//!
//! This crate provides the foundational types used across the *gridstar*
//! crates: `(row, col)` positions, half-open ranges, open/blocked cells and
//! an immutable grid with a small text format.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Position, Range};
pub use grid::{Grid, GridError};
