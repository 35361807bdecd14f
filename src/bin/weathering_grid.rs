//! Debug tool for comparing weathering parameters visually
//! Generates a tiled sheet of maps grown from one seed with different settings

use archipelago::config::WorldConfig;
use archipelago::export::render_map_image;
use archipelago::world::build_world;
use image::{ImageBuffer, Rgb, RgbImage};

const SEED: u64 = 42;
const CELL_PX: u32 = 4;
const GUTTER: u32 = 8;

fn main() {
    println!("Generating weathering comparison sheet...");

    // Chance varies across columns, pass count down rows
    let chances = [0.04f32, 0.12, 0.3];
    let pass_counts = [2usize, 8, 16];

    let mut tiles: Vec<RgbImage> = Vec::new();
    for &passes in &pass_counts {
        for &chance in &chances {
            println!("  Processing: chance {:.2}, {} passes", chance, passes);
            let config = WorldConfig {
                weathering_passes: passes,
                neighbor_chance: chance,
                ..Default::default()
            };
            let grid = match build_world(&config, SEED) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("Generation failed: {}", e);
                    std::process::exit(1);
                }
            };
            tiles.push(render_map_image(&grid, CELL_PX));
        }
    }

    let sheet = compose_sheet(&tiles, chances.len());
    sheet
        .save("weathering_comparison.png")
        .expect("Failed to save sheet");

    println!("Saved weathering_comparison.png");
    println!(
        "Columns: neighbor_chance {:?}; rows: passes {:?}",
        chances, pass_counts
    );
}

fn compose_sheet(tiles: &[RgbImage], cols: usize) -> RgbImage {
    if tiles.is_empty() {
        return ImageBuffer::new(1, 1);
    }

    let tile_w = tiles[0].width();
    let tile_h = tiles[0].height();
    let rows = tiles.len().div_ceil(cols);

    let sheet_w = (tile_w + GUTTER) * cols as u32 + GUTTER;
    let sheet_h = (tile_h + GUTTER) * rows as u32 + GUTTER;
    let mut sheet: RgbImage = ImageBuffer::from_pixel(sheet_w, sheet_h, Rgb([40, 40, 40]));

    for (idx, tile) in tiles.iter().enumerate() {
        let x_offset = (idx % cols) as u32 * (tile_w + GUTTER) + GUTTER;
        let y_offset = (idx / cols) as u32 * (tile_h + GUTTER) + GUTTER;
        for y in 0..tile_h {
            for x in 0..tile_w {
                sheet.put_pixel(x_offset + x, y_offset + y, *tile.get_pixel(x, y));
            }
        }
    }

    sheet
}
