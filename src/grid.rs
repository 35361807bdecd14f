//! Square cell grid with a protected water margin.
//!
//! The grid owns every cell exclusively. A `margin`-wide border stays Water
//! for the whole run; generation, weathering and cleanup only ever touch the
//! interior `[margin, size - margin)` on both axes.

use std::ops::Range;

use crate::cell::{Cell, CellState};
use crate::error::{Error, Result};

/// A square 2D grid of cells. No wrapping on either axis.
#[derive(Clone)]
pub struct Grid {
    pub size: usize,
    pub margin: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size` x `size` grid of Water cells.
    ///
    /// Margin consistency (`margin < size / 2`) is checked by
    /// `WorldConfig::validate` before a grid is ever built.
    pub fn new(size: usize, margin: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(Cell::new(x, y));
            }
        }
        Self {
            size,
            margin,
            cells,
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.size || y >= self.size {
            return Err(Error::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn state_at(&self, x: usize, y: usize) -> Result<CellState> {
        Ok(self.cell_at(x, y)?.state)
    }

    pub fn set_state(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx].state = state;
        Ok(())
    }

    /// Coordinate range of the mutable interior, valid for both axes.
    pub fn interior(&self) -> Range<usize> {
        self.margin..self.size - self.margin
    }

    /// Freeze the current cell states into an immutable value copy.
    /// Later grid mutations do not affect the snapshot.
    pub fn snapshot_states(&self) -> StateSnapshot {
        StateSnapshot {
            size: self.size,
            states: self.cells.iter().map(|c| c.state).collect(),
        }
    }

    /// Count cells per state across the whole grid, margin included.
    pub fn census(&self) -> StateCensus {
        let mut census = StateCensus::default();
        for cell in &self.cells {
            match cell.state {
                CellState::Water => census.water += 1,
                CellState::Land => census.land += 1,
                CellState::Tree => census.tree += 1,
            }
        }
        census
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

/// Read-only copy of all cell states at one point in time.
///
/// Passes that read neighbors while writing evaluate against a snapshot
/// taken at pass start, so mutations never feed back into the same pass.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    size: usize,
    states: Vec<CellState>,
}

impl StateSnapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    /// State at a coordinate known to be in bounds. Panics outside the
    /// grid; use `get` for signed neighbor offsets.
    pub fn state_at(&self, x: usize, y: usize) -> CellState {
        self.states[y * self.size + x]
    }

    /// State at a signed coordinate, `None` when off the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        if x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32 {
            return None;
        }
        Some(self.states[y as usize * self.size + x as usize])
    }
}

/// Per-state cell counts for a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StateCensus {
    pub water: usize,
    pub land: usize,
    pub tree: usize,
}

impl StateCensus {
    pub fn total(&self) -> usize {
        self.water + self.land + self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_water() {
        let grid = Grid::new(16, 3);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(grid.state_at(x, y).unwrap(), CellState::Water);
            }
        }
        let census = grid.census();
        assert_eq!(census.water, 16 * 16);
        assert_eq!(census.land, 0);
        assert_eq!(census.tree, 0);
    }

    #[test]
    fn test_cells_know_their_coordinates() {
        let grid = Grid::new(8, 1);
        let cell = grid.cell_at(5, 2).unwrap();
        assert_eq!((cell.x, cell.y), (5, 2));
    }

    #[test]
    fn test_set_state_roundtrip() {
        let mut grid = Grid::new(10, 2);
        grid.set_state(4, 7, CellState::Land).unwrap();
        assert_eq!(grid.state_at(4, 7).unwrap(), CellState::Land);
        assert_eq!(grid.state_at(7, 4).unwrap(), CellState::Water);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(10, 2);
        assert_eq!(
            grid.cell_at(10, 0).unwrap_err(),
            Error::OutOfRange {
                x: 10,
                y: 0,
                size: 10
            }
        );
        assert!(grid.state_at(0, 99).is_err());
        assert!(grid.set_state(3, 10, CellState::Land).is_err());
        // the failed set must not have touched anything
        assert_eq!(grid.census().land, 0);
    }

    #[test]
    fn test_interior_range() {
        let grid = Grid::new(96, 6);
        assert_eq!(grid.interior(), 6..90);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutation() {
        let mut grid = Grid::new(6, 1);
        grid.set_state(2, 2, CellState::Land).unwrap();
        let snapshot = grid.snapshot_states();
        grid.set_state(2, 2, CellState::Water).unwrap();
        grid.set_state(3, 3, CellState::Tree).unwrap();

        assert_eq!(snapshot.state_at(2, 2), CellState::Land);
        assert_eq!(snapshot.state_at(3, 3), CellState::Water);
    }

    #[test]
    fn test_snapshot_signed_get() {
        let grid = Grid::new(4, 0);
        let snapshot = grid.snapshot_states();
        assert_eq!(snapshot.get(0, 0), Some(CellState::Water));
        assert_eq!(snapshot.get(3, 3), Some(CellState::Water));
        assert_eq!(snapshot.get(-1, 0), None);
        assert_eq!(snapshot.get(0, -1), None);
        assert_eq!(snapshot.get(4, 0), None);
        assert_eq!(snapshot.get(0, 4), None);
    }

    #[test]
    fn test_census_totals() {
        let mut grid = Grid::new(12, 2);
        grid.set_state(5, 5, CellState::Land).unwrap();
        grid.set_state(6, 5, CellState::Land).unwrap();
        grid.set_state(5, 6, CellState::Tree).unwrap();
        let census = grid.census();
        assert_eq!(census.land, 2);
        assert_eq!(census.tree, 1);
        assert_eq!(census.water, 12 * 12 - 3);
        assert_eq!(census.total(), 12 * 12);
    }
}
