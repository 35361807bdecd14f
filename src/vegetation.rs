//! Vegetation overlay
//!
//! A post-pipeline stage that seeds Tree cells on settled land and lets
//! them spread. Seeding is gated on how far inland a cell sits (full land
//! surroundings) and shaped by low-frequency Perlin noise so trees come
//! up in groves rather than uniform speckle. Spreading reuses the
//! weathering engine with Land→Tree as the conversion direction; nothing
//! ever converts a Tree back.

use noise::{NoiseFn, Perlin, Seedable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cell::CellState;
use crate::config::VegetationParams;
use crate::error::Result;
use crate::grid::Grid;
use crate::influence::neighbor_influence;
use crate::weathering::weather;

/// Seed and spread trees over the grid's land. Water is never touched.
///
/// The whole stage runs off the one seed: it feeds both the grove noise
/// and the RNG, so a run is reproducible from `WorldSeeds::vegetation`
/// alone. Returns the total number of Tree cells created.
pub fn overlay_vegetation(grid: &mut Grid, params: &VegetationParams, seed: u64) -> Result<usize> {
    params.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Perlin::new(1).set_seed(seed as u32);

    // Seeding: inland land cells roll against the noise-shaped chance
    let snapshot = grid.snapshot_states();
    let mut seeded = 0;

    for y in grid.interior() {
        for x in grid.interior() {
            if snapshot.state_at(x, y) != CellState::Land {
                continue;
            }
            if neighbor_influence(&snapshot, x, y, CellState::Land) < params.inland_threshold {
                continue;
            }
            let clump = noise.get([
                x as f64 * params.clump_frequency,
                y as f64 * params.clump_frequency,
            ]);
            // Perlin output is in [-1, 1]; map to a [0, 1] density
            let density = ((clump + 1.0) * 0.5) as f32;
            if rng.gen::<f32>() < params.tree_chance * density {
                grid.set_state(x, y, CellState::Tree)?;
                seeded += 1;
            }
        }
    }

    // Spread: trees pull adjacent land in over a few weathering passes
    let spread = weather(
        grid,
        params.spread_passes,
        CellState::Land,
        CellState::Tree,
        params.spread_chance,
        &mut rng,
    )?;

    Ok(seeded + spread)
}
