//! Run configuration for world generation.
//!
//! Every stage takes its tunables explicitly, either through `WorldConfig`
//! (the pipeline) or a dedicated params struct. There is no global mutable
//! configuration anywhere.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters for island placement
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IslandParams {
    /// Smallest island edge length in cells (must fit the grid interior)
    pub min_dim: usize,
    /// Largest island edge length in cells (oversized rectangles get clamped)
    pub max_dim: usize,
    /// Islands always placed before an early stop is considered
    pub min_count: usize,
    /// Hard ceiling on the number of islands
    pub max_count: usize,
}

impl Default for IslandParams {
    fn default() -> Self {
        Self {
            min_dim: 4,
            max_dim: 12,
            min_count: 4,
            max_count: 9,
        }
    }
}

impl IslandParams {
    /// Check island dimensions against the usable interior width of the
    /// target grid (`size - 2 * margin`).
    pub fn validate(&self, interior: usize) -> Result<()> {
        if self.min_dim == 0 {
            return Err(Error::InvalidConfig(
                "island min_dim must be nonzero".to_string(),
            ));
        }
        if self.min_dim > self.max_dim {
            return Err(Error::InvalidConfig(format!(
                "island min_dim {} exceeds max_dim {}",
                self.min_dim, self.max_dim
            )));
        }
        if self.min_count > self.max_count {
            return Err(Error::InvalidConfig(format!(
                "island min_count {} exceeds max_count {}",
                self.min_count, self.max_count
            )));
        }
        // Corner range is [margin, size - margin - min_dim), so the smallest
        // island must be strictly narrower than the interior
        if self.min_dim >= interior {
            return Err(Error::InvalidConfig(format!(
                "island min_dim {} does not fit a {}-cell interior",
                self.min_dim, interior
            )));
        }
        Ok(())
    }
}

/// Parameters for the whole generation pipeline
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Grid edge length in cells
    pub size: usize,
    /// Water border width kept untouched on every side
    pub margin: usize,
    /// Weathering iterations per direction (Water→Land, then Land→Water)
    pub weathering_passes: usize,
    /// Island placement parameters
    pub islands: IslandParams,
    /// Base probability of stopping island placement early (0.0-1.0)
    pub break_chance: f32,
    /// Conversion probability per unit of neighbor influence (0.0-1.0)
    pub neighbor_chance: f32,
    /// Influence below which cleanup flips a cell (influence ranges 0.0-6.0)
    pub min_neighbors: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 96,
            margin: 6,
            weathering_passes: 8,
            islands: IslandParams::default(),
            break_chance: 0.3,
            neighbor_chance: 0.12,
            min_neighbors: 1.5,
        }
    }
}

impl WorldConfig {
    /// Usable interior width, valid for both axes.
    pub fn interior_width(&self) -> usize {
        self.size.saturating_sub(2 * self.margin)
    }

    /// Reject configurations that would make the pipeline panic or loop
    /// over an empty interior. Called by `build_world` before any geometry
    /// is produced.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig("grid size must be nonzero".to_string()));
        }
        if 2 * self.margin >= self.size {
            return Err(Error::InvalidConfig(format!(
                "margin {} leaves no usable interior in a {}x{} grid",
                self.margin, self.size, self.size
            )));
        }
        self.islands.validate(self.interior_width())?;
        if !(0.0..=1.0).contains(&self.break_chance) {
            return Err(Error::InvalidConfig(format!(
                "break_chance {} must lie in [0, 1]",
                self.break_chance
            )));
        }
        if !(0.0..=1.0).contains(&self.neighbor_chance) {
            return Err(Error::InvalidConfig(format!(
                "neighbor_chance {} must lie in [0, 1]",
                self.neighbor_chance
            )));
        }
        if !self.min_neighbors.is_finite() || self.min_neighbors < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_neighbors {} must be finite and non-negative",
                self.min_neighbors
            )));
        }
        Ok(())
    }
}

/// Parameters for the vegetation overlay
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VegetationParams {
    /// Base probability that an inland land cell seeds a tree (0.0-1.0)
    pub tree_chance: f32,
    /// Perlin noise frequency for grove clumping (higher = smaller groves)
    pub clump_frequency: f64,
    /// Minimum land influence for seeding (6.0 = fully surrounded by land)
    pub inland_threshold: f32,
    /// Spread iterations after seeding
    pub spread_passes: usize,
    /// Spread probability per unit of tree influence (0.0-1.0)
    pub spread_chance: f32,
}

impl Default for VegetationParams {
    fn default() -> Self {
        Self {
            tree_chance: 0.35,
            clump_frequency: 0.08,
            inland_threshold: 5.0,
            spread_passes: 4,
            spread_chance: 0.04,
        }
    }
}

impl VegetationParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.tree_chance) {
            return Err(Error::InvalidConfig(format!(
                "tree_chance {} must lie in [0, 1]",
                self.tree_chance
            )));
        }
        if !(0.0..=1.0).contains(&self.spread_chance) {
            return Err(Error::InvalidConfig(format!(
                "spread_chance {} must lie in [0, 1]",
                self.spread_chance
            )));
        }
        Ok(())
    }
}
