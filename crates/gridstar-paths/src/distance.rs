use gridstar_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> u64 {
    a.row.abs_diff(b.row) as u64 + a.col.abs_diff(b.col) as u64
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> u64 {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col)) as u64
}

/// Squared Euclidean distance between two positions, saturating at
/// `u64::MAX`.
#[inline]
pub fn squared_euclidean(a: Position, b: Position) -> u64 {
    let dr = a.row.abs_diff(b.row) as u128;
    let dc = a.col.abs_diff(b.col) as u128;
    u64::try_from(dr * dr + dc * dc).unwrap_or(u64::MAX)
}
