//! Stray-cell cleanup
//!
//! After weathering, lone land specks dot the sea and pinhole ponds dot
//! the islands. A single deterministic pass flips any cell with too
//! little same-state support from its neighbors.

use crate::cell::CellState;
use crate::error::Result;
use crate::grid::Grid;
use crate::influence::neighbor_influence;

/// Flip isolated interior cells whose same-state influence falls strictly
/// below `min_neighbors`: Land→Water and Water→Land. Tree cells have no
/// flip rule and are left alone.
///
/// One snapshot is taken up front, so a flip never changes what its
/// neighbors are judged against. No randomness anywhere.
///
/// Returns the number of cells flipped.
pub fn clean(grid: &mut Grid, min_neighbors: f32) -> Result<usize> {
    let snapshot = grid.snapshot_states();
    let mut flipped = 0;

    for y in grid.interior() {
        for x in grid.interior() {
            let state = snapshot.state_at(x, y);
            let flip_to = match state {
                CellState::Land => CellState::Water,
                CellState::Water => CellState::Land,
                CellState::Tree => continue,
            };
            if neighbor_influence(&snapshot, x, y, state) < min_neighbors {
                grid.set_state(x, y, flip_to)?;
                flipped += 1;
            }
        }
    }

    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_land_cell_flips_to_water() {
        let mut grid = Grid::new(10, 2);
        grid.set_state(5, 5, CellState::Land).unwrap();

        let flipped = clean(&mut grid, 1.5).unwrap();

        assert_eq!(flipped, 1);
        assert_eq!(grid.state_at(5, 5).unwrap(), CellState::Water);
        assert_eq!(grid.census().land, 0);
    }

    #[test]
    fn test_water_hole_inside_land_flips_to_land() {
        let mut grid = Grid::new(12, 2);
        for y in 4..7 {
            for x in 4..7 {
                grid.set_state(x, y, CellState::Land).unwrap();
            }
        }
        grid.set_state(5, 5, CellState::Water).unwrap();

        let flipped = clean(&mut grid, 1.5).unwrap();

        assert_eq!(flipped, 1);
        assert_eq!(grid.state_at(5, 5).unwrap(), CellState::Land);
        // The ring around the hole had plenty of support and kept its state
        assert_eq!(grid.census().land, 9);
    }

    #[test]
    fn test_tree_cells_are_never_flipped() {
        let mut grid = Grid::new(10, 2);
        // As isolated as a cell can get, still exempt
        grid.set_state(5, 5, CellState::Tree).unwrap();

        let flipped = clean(&mut grid, 1.5).unwrap();

        assert_eq!(flipped, 0);
        assert_eq!(grid.state_at(5, 5).unwrap(), CellState::Tree);
    }

    #[test]
    fn test_flips_judge_the_frozen_state() {
        // A 3-cell strip: both ends lack support (1.0 < 1.5) and flip, the
        // middle sees both ends in the snapshot (2.0) and survives. If
        // flips fed back mid-pass, the middle would lose its left support
        // and the whole strip would vanish.
        let mut grid = Grid::new(12, 2);
        for x in 4..7 {
            grid.set_state(x, 4, CellState::Land).unwrap();
        }

        let flipped = clean(&mut grid, 1.5).unwrap();

        assert_eq!(flipped, 2);
        assert_eq!(grid.state_at(4, 4).unwrap(), CellState::Water);
        assert_eq!(grid.state_at(5, 4).unwrap(), CellState::Land);
        assert_eq!(grid.state_at(6, 4).unwrap(), CellState::Water);
    }

    #[test]
    fn test_threshold_is_strict() {
        // A cell with exactly min_neighbors influence must not flip
        let mut grid = Grid::new(12, 2);
        grid.set_state(5, 4, CellState::Land).unwrap();
        grid.set_state(4, 4, CellState::Land).unwrap();
        grid.set_state(6, 4, CellState::Land).unwrap();

        clean(&mut grid, 2.0).unwrap();

        // Middle cell: two orthogonal matches, influence exactly 2.0
        assert_eq!(grid.state_at(5, 4).unwrap(), CellState::Land);
    }
}
