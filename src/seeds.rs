//! Seed management for world generation
//!
//! Provides separate seeds for each stochastic stage, allowing fine-grained
//! control over which aspects of a map to vary or keep constant. Cleanup is
//! fully deterministic and takes no seed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for all stochastic generation stages.
///
/// Each stage gets its own seed, derived from a master seed by default.
/// Individual seeds can be overridden for experimentation.
#[derive(Clone, Copy, Debug)]
pub struct WorldSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Island placement (corners, dimensions, early stop)
    pub islands: u64,
    /// Weathering conversion rolls, both directions
    pub weathering: u64,
    /// Vegetation seeding noise and spread rolls
    pub vegetation: u64,
}

impl WorldSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            islands: derive_seed(master, "islands"),
            weathering: derive_seed(master, "weathering"),
            vegetation: derive_seed(master, "vegetation"),
        }
    }

    /// Create a builder for customizing individual seeds
    pub fn builder(master: u64) -> WorldSeedsBuilder {
        WorldSeedsBuilder::new(master)
    }
}

impl Default for WorldSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Builder for customizing individual seeds while deriving others from master
pub struct WorldSeedsBuilder {
    seeds: WorldSeeds,
}

impl WorldSeedsBuilder {
    pub fn new(master: u64) -> Self {
        Self {
            seeds: WorldSeeds::from_master(master),
        }
    }

    /// Override the island placement seed
    pub fn islands(mut self, seed: u64) -> Self {
        self.seeds.islands = seed;
        self
    }

    /// Override the weathering seed
    pub fn weathering(mut self, seed: u64) -> Self {
        self.seeds.weathering = seed;
        self
    }

    /// Override the vegetation seed
    pub fn vegetation(mut self, seed: u64) -> Self {
        self.seeds.vegetation = seed;
        self
    }

    /// Build the final WorldSeeds
    pub fn build(self) -> WorldSeeds {
        self.seeds
    }
}

/// Derive a sub-seed from a master seed and a stage name.
/// Uses hashing to ensure different stages get different but deterministic seeds.
fn derive_seed(master: u64, stage: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

/// Display format for seeds (useful for sharing map configurations)
impl std::fmt::Display for WorldSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorldSeeds {{ master: {}, islands: {}, weathering: {}, vegetation: {} }}",
            self.master, self.islands, self.weathering, self.vegetation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_derivation() {
        let seeds1 = WorldSeeds::from_master(12345);
        let seeds2 = WorldSeeds::from_master(12345);

        assert_eq!(seeds1.islands, seeds2.islands);
        assert_eq!(seeds1.weathering, seeds2.weathering);
        assert_eq!(seeds1.vegetation, seeds2.vegetation);
    }

    #[test]
    fn test_different_stages_get_different_seeds() {
        let seeds = WorldSeeds::from_master(12345);

        // Each stage should get a unique seed
        assert_ne!(seeds.islands, seeds.weathering);
        assert_ne!(seeds.weathering, seeds.vegetation);
        assert_ne!(seeds.islands, seeds.vegetation);
    }

    #[test]
    fn test_builder_override() {
        let seeds = WorldSeeds::builder(12345).weathering(99999).build();

        // Weathering should be overridden
        assert_eq!(seeds.weathering, 99999);

        // Others should be derived from master
        let default_seeds = WorldSeeds::from_master(12345);
        assert_eq!(seeds.islands, default_seeds.islands);
        assert_eq!(seeds.vegetation, default_seeds.vegetation);
    }
}
