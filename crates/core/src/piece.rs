//! Piece module - a movable polyomino
//!
//! A piece is an occupancy matrix plus the board position of its top-left
//! cell. Translation only ever touches the anchor (`x`, `y`); rotation only
//! ever touches the matrix. Validating the result against a board is the
//! caller's job (see [`Board::can_place`](crate::board::Board::can_place)).

use crate::shapes;
use crate::types::ShapeKind;

/// A falling piece: occupancy matrix and board-relative anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Row-major occupancy, `height * width` entries
    cells: Vec<bool>,
    width: usize,
    height: usize,
    kind: Option<ShapeKind>,
    /// Board column of the matrix's left edge
    pub x: i32,
    /// Board row of the matrix's top edge (negative above the visible top)
    pub y: i32,
}

impl Piece {
    /// Create a piece from an occupancy template.
    ///
    /// The template is copied; later changes to either side are independent.
    ///
    /// # Panics
    ///
    /// Panics if the template is empty, ragged, or has no occupied cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::Piece;
    ///
    /// let piece = Piece::new(&[&[0, 1, 0], &[1, 1, 1]], 4, 0);
    /// assert_eq!(piece.width(), 3);
    /// assert_eq!(piece.height(), 2);
    /// ```
    pub fn new(template: &[&[u8]], x: i32, y: i32) -> Self {
        assert!(!template.is_empty(), "piece template has no rows");
        let width = template[0].len();
        assert!(width > 0, "piece template has no columns");
        assert!(
            template.iter().all(|row| row.len() == width),
            "piece template is not rectangular"
        );

        let cells: Vec<bool> = template
            .iter()
            .flat_map(|row| row.iter().map(|&c| c != 0))
            .collect();
        assert!(
            cells.iter().any(|&c| c),
            "piece template has no occupied cell"
        );

        Self {
            cells,
            width,
            height: template.len(),
            kind: None,
            x,
            y,
        }
    }

    /// Create a piece of one of the canonical shapes.
    pub fn spawn(kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(shapes::template(kind), x, y)
        }
    }

    /// The canonical shape this piece was spawned from, if any
    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    /// Number of columns in the current orientation
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in the current orientation
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check a piece-local cell. Outside the matrix counts as empty.
    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.cells[row * self.width + col]
    }

    /// Piece-local `(col, row)` of every occupied cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &filled)| filled)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    /// Board `(x, y)` of every occupied cell at the current anchor.
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.occupied().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Rotate the matrix 90° clockwise in place.
    ///
    /// An `R x C` matrix becomes `C x R` with `new[i][j] = old[R-1-j][i]`.
    /// The anchor is left alone.
    pub fn rotate(&mut self) {
        let rows = self.height;
        let cols = self.width;
        let mut rotated = vec![false; rows * cols];

        for i in 0..cols {
            for j in 0..rows {
                rotated[i * rows + j] = self.cells[(rows - 1 - j) * cols + i];
            }
        }

        self.cells = rotated;
        self.width = rows;
        self.height = cols;
    }

    /// Occupancy as nested rows (top row first)
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.to_vec())
            .collect()
    }
}
