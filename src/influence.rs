//! Weighted neighbor influence for the weathering and cleanup passes.
//!
//! Influence is a weighted count of the 8 surrounding cells that match a
//! target state: orthogonal neighbors count 1.0, diagonal neighbors 0.5.
//! The grid does not wrap, and off-grid neighbors contribute nothing, so
//! edge and corner cells naturally see less influence.

use crate::cell::CellState;
use crate::grid::StateSnapshot;

/// Direction offsets for the 8-neighborhood (dx, dy)
pub const DIR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
];

pub const ORTHOGONAL_WEIGHT: f32 = 1.0;
pub const DIAGONAL_WEIGHT: f32 = 0.5;

/// Influence of a full matching ring: 4 orthogonal + 4 diagonal neighbors.
pub const MAX_INFLUENCE: f32 = 4.0 * ORTHOGONAL_WEIGHT + 4.0 * DIAGONAL_WEIGHT;

/// Weighted count of neighbors of (x, y) whose snapshot state is `target`.
///
/// Always reads the snapshot, so a pass that mutates the live grid while
/// scanning sees one consistent prior state.
pub fn neighbor_influence(
    snapshot: &StateSnapshot,
    x: usize,
    y: usize,
    target: CellState,
) -> f32 {
    let mut influence = 0.0;

    for (i, &(dx, dy)) in DIR_OFFSETS.iter().enumerate() {
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;

        if snapshot.get(nx, ny) == Some(target) {
            // Diagonals sit at the odd indices of DIR_OFFSETS
            influence += if i % 2 == 1 {
                DIAGONAL_WEIGHT
            } else {
                ORTHOGONAL_WEIGHT
            };
        }
    }

    influence
}
