//! ASCII rendering and export module for generated maps
//!
//! Provides functions to render a grid as ASCII text and export it to a
//! file with a legend and statistics.

use std::fs::File;
use std::io::{self, Write};

use chrono::Local;

use crate::cell::CellState;
use crate::grid::Grid;

/// Get ASCII character for a cell state
pub fn state_char(state: CellState) -> char {
    match state {
        CellState::Water => '~',
        CellState::Land => '#',
        CellState::Tree => 'T',
    }
}

/// Render the grid to an ASCII string, one row per line
pub fn render_map(grid: &Grid) -> String {
    let snapshot = grid.snapshot_states();
    let mut result = String::with_capacity((grid.size + 1) * grid.size);

    for y in 0..grid.size {
        for x in 0..grid.size {
            result.push(state_char(snapshot.state_at(x, y)));
        }
        result.push('\n');
    }

    result
}

/// Print the map to stdout
pub fn print_map(grid: &Grid) {
    print!("{}", render_map(grid));
}

/// Generate legend for map characters
pub fn legend() -> String {
    "=== LEGEND ===\n\
     ~ Water\n\
     # Land\n\
     T Tree\n"
        .to_string()
}

/// Export the map to a text file with header, legend and statistics
pub fn export_ascii(grid: &Grid, seed: u64, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    let total = grid.size * grid.size;

    // Header
    writeln!(file, "=== ISLAND MAP FILE ===")?;
    writeln!(file, "Seed: {}", seed)?;
    writeln!(
        file,
        "Size: {}x{} (margin {})",
        grid.size, grid.size, grid.margin
    )?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    // Map
    writeln!(file, "=== MAP ===")?;
    write!(file, "{}", render_map(grid))?;
    writeln!(file)?;

    // Legend
    write!(file, "{}", legend())?;
    writeln!(file)?;

    // Statistics
    let census = grid.census();
    writeln!(file, "=== STATISTICS ===")?;
    writeln!(file, "Total cells: {}", total)?;
    writeln!(
        file,
        "Water: {} ({:.1}%)",
        census.water,
        100.0 * census.water as f64 / total as f64
    )?;
    writeln!(
        file,
        "Land:  {} ({:.1}%)",
        census.land,
        100.0 * census.land as f64 / total as f64
    )?;
    writeln!(
        file,
        "Tree:  {} ({:.1}%)",
        census.tree,
        100.0 * census.tree as f64 / total as f64
    )?;

    Ok(())
}
