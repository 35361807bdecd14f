use clap::Parser;

mod ascii;
mod cell;
mod cleanup;
mod config;
mod error;
mod export;
mod grid;
mod influence;
mod islands;
mod seeds;
mod vegetation;
mod weathering;
mod world;

#[derive(Parser, Debug)]
#[command(name = "archipelago")]
#[command(about = "Generate procedural island maps with stochastic weathering")]
struct Args {
    /// Grid edge length in cells
    #[arg(long, default_value = "96")]
    size: usize,

    /// Water border width kept untouched on every side
    #[arg(long, default_value = "6")]
    margin: usize,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Weathering passes per direction
    #[arg(short = 'p', long, default_value = "8")]
    passes: usize,

    /// Smallest island edge length in cells
    #[arg(long, default_value = "4")]
    min_island_dim: usize,

    /// Largest island edge length in cells
    #[arg(long, default_value = "12")]
    max_island_dim: usize,

    /// Islands always placed before an early stop is considered
    #[arg(long, default_value = "4")]
    min_islands: usize,

    /// Hard ceiling on the number of islands
    #[arg(long, default_value = "9")]
    max_islands: usize,

    /// Base probability of stopping island placement early
    #[arg(long, default_value = "0.3")]
    break_chance: f32,

    /// Conversion probability per unit of neighbor influence
    #[arg(long, default_value = "0.12")]
    neighbor_chance: f32,

    /// Influence below which cleanup flips a stray cell
    #[arg(long, default_value = "1.5")]
    min_neighbors: f32,

    /// Grow tree groves on inland terrain after generation
    #[arg(long)]
    vegetation: bool,

    /// Export the map as text (specify output path)
    #[arg(long)]
    ascii_out: Option<String>,

    /// Export the map as a PNG image (specify output path)
    #[arg(long)]
    png_out: Option<String>,

    /// Pixels per cell in the PNG export
    #[arg(long, default_value = "8")]
    cell_px: u32,

    /// Write a JSON run summary (seed, config, stage counts)
    #[arg(long)]
    summary_out: Option<String>,

    /// Suppress the ASCII map and progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let config = config::WorldConfig {
        size: args.size,
        margin: args.margin,
        weathering_passes: args.passes,
        islands: config::IslandParams {
            min_dim: args.min_island_dim,
            max_dim: args.max_island_dim,
            min_count: args.min_islands,
            max_count: args.max_islands,
        },
        break_chance: args.break_chance,
        neighbor_chance: args.neighbor_chance,
        min_neighbors: args.min_neighbors,
    };

    if !args.quiet {
        println!("Generating island map with seed: {}", seed);
        println!("Map size: {}x{} (margin {})", config.size, config.size, config.margin);
    }

    let (mut grid, stages) = match world::build_world_with_counts(&config, seed) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    if !args.quiet {
        println!("Placed {} islands", stages.islands_placed);
        println!(
            "Weathering: {} cells grew into land, {} crumbled back to water",
            stages.weathered_to_land, stages.weathered_to_water
        );
        println!("Cleanup: {} stray cells flipped", stages.cleaned);
    }

    if args.vegetation {
        let seeds = seeds::WorldSeeds::from_master(seed);
        let params = config::VegetationParams::default();
        match vegetation::overlay_vegetation(&mut grid, &params, seeds.vegetation) {
            Ok(trees) => {
                if !args.quiet {
                    println!("Vegetation: {} tree cells grown", trees);
                }
            }
            Err(e) => eprintln!("Failed to grow vegetation: {}", e),
        }
    }

    let census = grid.census();
    if !args.quiet {
        let land_cells = census.land + census.tree;
        println!(
            "Final map: {} water, {} land, {} tree ({:.1}% above water)",
            census.water,
            census.land,
            census.tree,
            100.0 * land_cells as f64 / census.total() as f64
        );
        println!();
        ascii::print_map(&grid);
        println!("{}", ascii::legend());
    }

    if let Some(ref path) = args.ascii_out {
        match ascii::export_ascii(&grid, seed, path) {
            Ok(()) => {
                if !args.quiet {
                    println!("ASCII map saved to: {}", path);
                }
            }
            Err(e) => eprintln!("Failed to export ASCII map: {}", e),
        }
    }

    if let Some(ref path) = args.png_out {
        match export::export_map_png(&grid, path, args.cell_px) {
            Ok(()) => {
                if !args.quiet {
                    println!("Map image saved to: {}", path);
                }
            }
            Err(e) => eprintln!("Failed to export map image: {}", e),
        }
    }

    if let Some(ref path) = args.summary_out {
        let summary = export::RunSummary {
            seed,
            config,
            stages,
            census,
        };
        match export::write_run_summary(&summary, path) {
            Ok(()) => {
                if !args.quiet {
                    println!("Run summary saved to: {}", path);
                }
            }
            Err(e) => eprintln!("Failed to write run summary: {}", e),
        }
    }
}
