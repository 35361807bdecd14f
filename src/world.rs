//! Generation pipeline orchestration
//!
//! Sequences the stages into one run: island placement, weathering in
//! both directions, then cleanup. Each stage observes only the committed
//! output of the one before it and draws from its own seeded RNG, so a
//! whole run is reproducible from the master seed alone.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cell::CellState;
use crate::cleanup::clean;
use crate::config::WorldConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::islands::generate_islands;
use crate::seeds::WorldSeeds;
use crate::weathering::weather;

/// How many cells each pipeline stage touched, for stat lines and
/// run summaries.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StageCounts {
    /// Islands placed by the generator
    pub islands_placed: usize,
    /// Water cells converted to Land across all weathering passes
    pub weathered_to_land: usize,
    /// Land cells converted to Water across all weathering passes
    pub weathered_to_water: usize,
    /// Cells flipped by cleanup
    pub cleaned: usize,
}

/// Run the full pipeline and return the finished grid.
pub fn build_world(config: &WorldConfig, seed: u64) -> Result<Grid> {
    let (grid, _) = build_world_with_counts(config, seed)?;
    Ok(grid)
}

/// Run the full pipeline, also reporting per-stage counts.
pub fn build_world_with_counts(config: &WorldConfig, seed: u64) -> Result<(Grid, StageCounts)> {
    config.validate()?;

    let seeds = WorldSeeds::from_master(seed);
    let mut grid = Grid::new(config.size, config.margin);
    let mut counts = StageCounts::default();

    // Scatter the raw land rectangles
    let mut island_rng = ChaCha8Rng::seed_from_u64(seeds.islands);
    counts.islands_placed =
        generate_islands(&mut grid, &config.islands, config.break_chance, &mut island_rng)?;

    // Weather the coastline: grow beaches out, then carve them back
    let mut weather_rng = ChaCha8Rng::seed_from_u64(seeds.weathering);
    counts.weathered_to_land = weather(
        &mut grid,
        config.weathering_passes,
        CellState::Water,
        CellState::Land,
        config.neighbor_chance,
        &mut weather_rng,
    )?;
    counts.weathered_to_water = weather(
        &mut grid,
        config.weathering_passes,
        CellState::Land,
        CellState::Water,
        config.neighbor_chance,
        &mut weather_rng,
    )?;

    // Drop the stray specks both directions left behind
    counts.cleaned = clean(&mut grid, config.min_neighbors)?;

    Ok((grid, counts))
}
