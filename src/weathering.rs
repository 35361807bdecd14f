//! Multi-pass stochastic weathering
//!
//! Each pass converts interior cells from one state to another with a
//! probability proportional to how much of the target state already
//! surrounds them. Run Water→Land it grows beaches and fuses islands;
//! run Land→Water it eats away exposed coastline. The two directions in
//! sequence turn blocky rectangles into something resembling a shore.

use rand::Rng;

use crate::cell::CellState;
use crate::error::Result;
use crate::grid::Grid;
use crate::influence::neighbor_influence;

/// Run `passes` weathering iterations over the grid interior.
///
/// Every pass freezes the grid into a snapshot first. Cells are visited
/// row-major; a cell whose *snapshot* state is `from` rolls once against
/// `neighbor_chance * influence(to)` and converts in the live grid on
/// success. Because influence is always read from the snapshot, cells
/// converted earlier in a pass never pull their neighbors along in that
/// same pass.
///
/// One roll is made per `from` cell, in visit order, so a seeded run
/// consumes the random stream identically every time.
///
/// Returns the total number of conversions across all passes; zero is a
/// perfectly valid outcome.
pub fn weather(
    grid: &mut Grid,
    passes: usize,
    from: CellState,
    to: CellState,
    neighbor_chance: f32,
    rng: &mut impl Rng,
) -> Result<usize> {
    let mut converted = 0;

    for _ in 0..passes {
        let snapshot = grid.snapshot_states();

        for y in grid.interior() {
            for x in grid.interior() {
                if snapshot.state_at(x, y) != from {
                    continue;
                }
                let influence = neighbor_influence(&snapshot, x, y, to);
                if rng.gen::<f32>() < neighbor_chance * influence {
                    grid.set_state(x, y, to)?;
                    converted += 1;
                }
            }
        }
    }

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid_with_block(size: usize, margin: usize, x0: usize, y0: usize, dim: usize) -> Grid {
        let mut grid = Grid::new(size, margin);
        for y in y0..y0 + dim {
            for x in x0..x0 + dim {
                grid.set_state(x, y, CellState::Land).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_weathering_respects_margin() {
        let mut grid = grid_with_block(12, 2, 5, 5, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        // Full chance floods every orthogonally reachable interior cell
        let converted = weather(
            &mut grid,
            16,
            CellState::Water,
            CellState::Land,
            1.0,
            &mut rng,
        )
        .unwrap();
        assert!(converted > 0);

        for cell in grid.iter() {
            let inside = (2..10).contains(&cell.x) && (2..10).contains(&cell.y);
            if inside {
                assert_eq!(cell.state, CellState::Land, "at ({}, {})", cell.x, cell.y);
            } else {
                assert_eq!(cell.state, CellState::Water, "at ({}, {})", cell.x, cell.y);
            }
        }
    }

    #[test]
    fn test_pass_reads_frozen_state() {
        // One pass, certain conversion next to land. Cells two steps from
        // the seed cell see zero influence in the snapshot, so they must
        // stay Water even though the cell between them converts. A pass
        // that read the live grid would chain all the way to the margin.
        let mut grid = grid_with_block(12, 2, 4, 4, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        weather(
            &mut grid,
            1,
            CellState::Water,
            CellState::Land,
            1.0,
            &mut rng,
        )
        .unwrap();

        // Orthogonal neighbors convert with certainty
        assert_eq!(grid.state_at(5, 4).unwrap(), CellState::Land);
        assert_eq!(grid.state_at(3, 4).unwrap(), CellState::Land);
        assert_eq!(grid.state_at(4, 5).unwrap(), CellState::Land);
        assert_eq!(grid.state_at(4, 3).unwrap(), CellState::Land);
        // Two steps out: uninfluenced in the snapshot, untouched for sure
        assert_eq!(grid.state_at(6, 4).unwrap(), CellState::Water);
        assert_eq!(grid.state_at(4, 6).unwrap(), CellState::Water);
        assert_eq!(grid.state_at(2, 4).unwrap(), CellState::Water);
    }

    #[test]
    fn test_zero_chance_changes_nothing() {
        let mut grid = grid_with_block(12, 2, 4, 4, 3);
        let before = grid.snapshot_states();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let converted = weather(
            &mut grid,
            8,
            CellState::Water,
            CellState::Land,
            0.0,
            &mut rng,
        )
        .unwrap();

        assert_eq!(converted, 0);
        assert_eq!(grid.snapshot_states(), before);
    }

    #[test]
    fn test_zero_passes_is_a_noop() {
        let mut grid = grid_with_block(12, 2, 4, 4, 3);
        let before = grid.snapshot_states();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let converted = weather(
            &mut grid,
            0,
            CellState::Land,
            CellState::Water,
            0.5,
            &mut rng,
        )
        .unwrap();

        assert_eq!(converted, 0);
        assert_eq!(grid.snapshot_states(), before);
    }

    #[test]
    fn test_conversion_count_matches_census_delta() {
        let mut grid = grid_with_block(24, 3, 8, 8, 6);
        let land_before = grid.census().land;
        let mut rng = ChaCha8Rng::seed_from_u64(1234);

        let converted = weather(
            &mut grid,
            4,
            CellState::Water,
            CellState::Land,
            0.12,
            &mut rng,
        )
        .unwrap();

        assert_eq!(grid.census().land, land_before + converted);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let mut a = grid_with_block(24, 3, 8, 8, 6);
        let mut b = grid_with_block(24, 3, 8, 8, 6);
        let mut rng_a = ChaCha8Rng::seed_from_u64(77);
        let mut rng_b = ChaCha8Rng::seed_from_u64(77);

        let converted_a = weather(
            &mut a,
            6,
            CellState::Land,
            CellState::Water,
            0.12,
            &mut rng_a,
        )
        .unwrap();
        let converted_b = weather(
            &mut b,
            6,
            CellState::Land,
            CellState::Water,
            0.12,
            &mut rng_b,
        )
        .unwrap();

        assert_eq!(converted_a, converted_b);
        assert_eq!(a.snapshot_states(), b.snapshot_states());
    }
}
