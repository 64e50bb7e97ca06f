//! Board module - manages the settled-cell grid
//!
//! The board is a `width x height` grid of occupied/empty cells, 10x20 unless
//! built with [`Board::with_size`]. Cells live in a flat row-major vector for
//! cache locality and cheap row moves.
//! Coordinates: (x, y) where x grows left to right, y grows top to bottom;
//! row 0 is the top row.

use crate::piece::Piece;
use crate::snapshot::BoardSnapshot;
use crate::types::{DisplayCell, BOARD_HEIGHT, BOARD_WIDTH};

/// The settled-cell grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|&c| c)
    }

    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Test whether `piece` fits at its current anchor.
    ///
    /// Every occupied cell must land in `[0, width)` horizontally and above
    /// the bottom edge. Cells above the top edge (y < 0) are accepted and the
    /// grid is never read for them; every other cell must be empty.
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.board_cells().all(|(x, y)| {
            if x < 0 || x as usize >= self.width || y >= self.height as i32 {
                return false;
            }
            y < 0 || !self.cells[(y as usize) * self.width + (x as usize)]
        })
    }

    /// Commit `piece` into the grid, then clear full rows.
    ///
    /// Cells above the top edge are dropped. The caller is expected to have
    /// checked [`can_place`](Self::can_place) for this position; it is not
    /// re-validated. Returns the number of rows cleared.
    pub fn lock(&mut self, piece: &Piece) -> usize {
        for (x, y) in piece.board_cells() {
            if y >= 0 {
                self.set(x, y, true);
            }
        }
        self.clear_full_rows()
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are scanned bottom to top. After a removal the same row index is
    /// checked again, since the row that slid into it may be full as well.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Shift every row above `y` down by one and empty the top row.
    fn remove_row(&mut self, y: usize) {
        let width = self.width;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(false);
    }

    /// True once anything has settled in the top row.
    pub fn is_game_over(&self) -> bool {
        self.row(0).iter().any(|&c| c)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Combined read-only view: settled cells plus `piece` marked active.
    pub fn snapshot_for_display(&self, piece: &Piece) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(Some(piece), &mut snap);
        snap
    }

    /// Fill `out` with the settled cells and, if given, the piece's in-bounds
    /// cells marked [`DisplayCell::Active`].
    ///
    /// `out` keeps its allocation across calls when the size does not change.
    pub fn snapshot_into(&self, piece: Option<&Piece>, out: &mut BoardSnapshot) {
        out.resize(self.width, self.height);
        for (dst, &src) in out.cells_mut().iter_mut().zip(&self.cells) {
            *dst = if src {
                DisplayCell::Settled
            } else {
                DisplayCell::Empty
            };
        }

        if let Some(piece) = piece {
            for (x, y) in piece.board_cells() {
                if let Some(idx) = self.index(x, y) {
                    out.cells_mut()[idx] = DisplayCell::Active;
                }
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows (`#` occupied, anything else empty).
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows[0].len();
        assert!(rows.iter().all(|row| row.len() == width));

        let mut board = Self::with_size(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                board.set(x as i32, y as i32, ch == '#');
            }
        }
        board
    }

    /// Render as text rows for assertions
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|&c| if c { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_custom_size_index() {
        let board = Board::with_size(6, 4);
        assert_eq!(board.index(5, 3), Some(23));
        assert_eq!(board.index(6, 0), None);
        assert_eq!(board.cells().len(), 24);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_width_panics() {
        Board::with_size(0, 20);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = ["....", "#..#", "####"];
        let board = Board::from_rows(&rows);
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.occupied_count(), 6);
    }

    #[test]
    fn test_clear_rechecks_shifted_row() {
        let mut board = Board::from_rows(&["#...", "####", "####", "#.#."]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.to_rows(), ["....", "....", "#...", "#.#."]);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::from_rows(&["..#.", "####", ".#..", "####"]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.to_rows(), ["....", "....", "..#.", ".#.."]);
    }

    #[test]
    fn test_clear_entire_board() {
        let mut board = Board::from_rows(&["###", "###"]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_lock_ignores_cells_above_top() {
        let mut board = Board::with_size(4, 4);
        let mut bar = Piece::spawn(ShapeKind::I, 1, -2);
        bar.rotate();
        // Rows -2 and -1 are dropped, rows 0 and 1 land.
        assert_eq!(board.lock(&bar), 0);
        assert_eq!(board.to_rows(), [".#..", ".#..", "....", "...."]);
    }

    #[test]
    fn test_snapshot_marks_active_over_settled() {
        let board = Board::from_rows(&["....", "....", "#..."]);
        let piece = Piece::spawn(ShapeKind::O, 2, 1);
        let snap = board.snapshot_for_display(&piece);

        assert_eq!(snap.get(0, 2), Some(DisplayCell::Settled));
        assert_eq!(snap.get(2, 1), Some(DisplayCell::Active));
        assert_eq!(snap.get(3, 2), Some(DisplayCell::Active));
        assert_eq!(snap.get(1, 1), Some(DisplayCell::Empty));
    }
}
