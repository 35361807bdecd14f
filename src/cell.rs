//! Cell states and per-cell data for the island grid.

/// Terrain state of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CellState {
    #[default]
    Water,
    Land,
    Tree,
}

impl CellState {
    pub fn display_name(&self) -> &'static str {
        match self {
            CellState::Water => "Water",
            CellState::Land => "Land",
            CellState::Tree => "Tree",
        }
    }

    /// Get color for rendering. Color is always derived from state, never
    /// stored alongside it.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            CellState::Water => (30, 60, 120),
            CellState::Land => (140, 170, 80),
            CellState::Tree => (40, 100, 40),
        }
    }
}

/// A single unit of the grid. Cells are created once at grid construction
/// and mutated in place by the pipeline stages.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub state: CellState,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            state: CellState::Water,
        }
    }
}
