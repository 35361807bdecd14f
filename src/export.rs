//! PNG and JSON exports for finished maps.
//!
//! The PNG writer paints one filled square per cell so small grids stay
//! legible at a glance. The JSON summary captures everything needed to
//! reproduce a run: the seed, the full configuration, the per-stage
//! conversion counts and the final cell census.

use std::fs;
use std::io;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::config::WorldConfig;
use crate::grid::{Grid, StateCensus};
use crate::world::StageCounts;

/// Render the grid to an image, scaling every cell to a `cell_px` square.
pub fn render_map_image(grid: &Grid, cell_px: u32) -> RgbImage {
    let cell_px = cell_px.max(1);
    let side = grid.size as u32 * cell_px;
    let mut img: RgbImage = ImageBuffer::new(side, side);

    for cell in grid.iter() {
        let (r, g, b) = cell.state.color();
        let px = cell.x as u32 * cell_px;
        let py = cell.y as u32 * cell_px;
        for dy in 0..cell_px {
            for dx in 0..cell_px {
                img.put_pixel(px + dx, py + dy, Rgb([r, g, b]));
            }
        }
    }

    img
}

/// Render the grid and save it as a PNG.
pub fn export_map_png(grid: &Grid, path: &str, cell_px: u32) -> Result<(), image::ImageError> {
    render_map_image(grid, cell_px).save(path)
}

/// Everything a run produced, in one serializable record.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    /// Master seed the world was grown from.
    pub seed: u64,
    /// Full configuration, so the run can be replayed exactly.
    pub config: WorldConfig,
    /// How many cells each stage converted.
    pub stages: StageCounts,
    /// Final state counts over the whole grid.
    pub census: StateCensus,
}

/// Write the run summary as pretty-printed JSON.
pub fn write_run_summary(summary: &RunSummary, path: &str) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}
