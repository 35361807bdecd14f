//! Stochastic island placement
//!
//! Scatters random land rectangles across the grid interior. Islands may
//! overlap freely; overlap just merges into larger landmasses once the
//! weathering passes roughen the edges.

use rand::Rng;

use crate::cell::CellState;
use crate::config::IslandParams;
use crate::error::Result;
use crate::grid::Grid;

/// A rectangular land region. Generator-local: only the cell states it
/// writes persist, the rectangle itself is not kept.
#[derive(Clone, Copy, Debug)]
pub struct Island {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Shrink an extent so `corner + extent` stays at or below `limit`.
/// The corner never moves, only the extent shrinks; a corner at or past
/// the limit leaves nothing to place.
fn clamp_extent(corner: usize, extent: usize, limit: usize) -> usize {
    extent.min(limit.saturating_sub(corner))
}

/// Write an island's rectangle into the grid as Land, clamped against the
/// far margin on both axes.
pub fn place_island(grid: &mut Grid, island: &Island) -> Result<()> {
    let limit = grid.size.saturating_sub(grid.margin);
    let width = clamp_extent(island.x, island.width, limit);
    let height = clamp_extent(island.y, island.height, limit);

    for y in island.y..island.y + height {
        for x in island.x..island.x + width {
            grid.set_state(x, y, CellState::Land)?;
        }
    }
    Ok(())
}

/// Place `min_count` to `max_count` random islands on the grid.
///
/// Corners are drawn uniformly from `[margin, size - margin - min_dim)` on
/// each axis so even the smallest island starts inside the interior;
/// dimensions are drawn from `[min_dim, max_dim]` and clamped by
/// `place_island`. After the loop index passes `min_count`, a stop roll is
/// made whose probability ramps from `break_chance` up to 1.0 as the
/// remaining slots run out.
///
/// Draw order per island is fixed (x, y, width, height, then the stop
/// roll) so a seeded run is fully reproducible.
///
/// Returns the number of islands placed.
pub fn generate_islands(
    grid: &mut Grid,
    params: &IslandParams,
    break_chance: f32,
    rng: &mut impl Rng,
) -> Result<usize> {
    params.validate(grid.size.saturating_sub(2 * grid.margin))?;

    let corner_min = grid.margin;
    let corner_max = grid.size - grid.margin - params.min_dim;
    let mut placed = 0;

    for index in 0..params.max_count {
        let island = Island {
            x: rng.gen_range(corner_min..corner_max),
            y: rng.gen_range(corner_min..corner_max),
            width: rng.gen_range(params.min_dim..=params.max_dim),
            height: rng.gen_range(params.min_dim..=params.max_dim),
        };
        place_island(grid, &island)?;
        placed += 1;

        if index > params.min_count {
            let remaining_slots = params.max_count - index;
            // Zero slots means the ramp denominator is gone: stop outright
            if remaining_slots == 0 {
                break;
            }
            let stop_chance = break_chance + (1.0 - break_chance) / remaining_slots as f32;
            if rng.gen::<f32>() < stop_chance {
                break;
            }
        }
    }

    Ok(placed)
}
