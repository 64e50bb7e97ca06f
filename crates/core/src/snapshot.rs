//! Read-only views handed to the renderer.

use crate::types::{DisplayCell, Phase, ShapeKind};

/// Settled cells and the active piece, flattened into one grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    width: usize,
    height: usize,
    cells: Vec<DisplayCell>,
}

impl BoardSnapshot {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize to `width x height`, reusing the allocation when possible.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.resize(width * height, DisplayCell::Empty);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<DisplayCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Overwrite one cell. Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: DisplayCell) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x] = cell;
        true
    }

    /// One row of cells, top row first
    pub fn row(&self, y: usize) -> &[DisplayCell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[DisplayCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [DisplayCell] {
        &mut self.cells
    }

    pub fn count(&self, cell: DisplayCell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

/// Everything the game view draws for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub phase: Phase,
    /// Kind of the active piece, for coloring
    pub active_kind: Option<ShapeKind>,
    pub rows_cleared: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: BoardSnapshot::default(),
            phase: Phase::Playing,
            active_kind: None,
            rows_cleared: 0,
            pieces_locked: 0,
        }
    }
}
