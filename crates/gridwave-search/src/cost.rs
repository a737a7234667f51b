//! Edge costs for the 8-connected neighbourhood.

use gridwave_core::Point;

/// Cost of a step between orthogonally adjacent cells.
pub const ORTHO_COST: f64 = 1.0;

/// Cost of a step between diagonally adjacent cells.
pub const DIAG_COST: f64 = std::f64::consts::SQRT_2;

/// Cost of moving between two 8-adjacent cells: [`ORTHO_COST`] when exactly
/// one axis differs, [`DIAG_COST`] when both do.
///
/// `from` and `to` must be distinct cells at Chebyshev distance 1; no other
/// adjacency exists in this search.
#[inline]
pub fn edge_cost(from: Point, to: Point) -> f64 {
    debug_assert_eq!(from.chebyshev(to), 1);
    let dx = (from.x - to.x).abs();
    let dy = (from.y - to.y).abs();
    if dx + dy == 1 { ORTHO_COST } else { DIAG_COST }
}
