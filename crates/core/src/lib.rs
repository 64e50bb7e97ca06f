//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board simulation engine and the session that
//! drives it. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every placement and clearing rule
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`piece`]: occupancy matrix + anchor, clockwise rotation
//! - [`board`]: settled-cell grid with placement checks, locking and row clearing
//! - [`shapes`]: the seven canonical templates
//! - [`game`]: one play session (`Playing ↔ GameOver`), gravity and input handling
//! - [`rng`]: deterministic uniform shape selection
//! - [`snapshot`]: read-only views for the renderer
//!
//! # Game Rules
//!
//! - Pieces spawn at (`width / 2 - 1`, 0) in template orientation
//! - Left/right/down moves and rotations are tried, then rolled back if the
//!   piece no longer fits; there are no wall kicks
//! - A piece that cannot move down locks; full rows are removed and the rows
//!   above shift down
//! - The game ends when a freshly spawned piece does not fit or the top row
//!   holds settled cells
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{Board, Piece};
//!
//! let mut board = Board::new();
//! let bar = Piece::new(&[&[1, 1, 1, 1]], 0, 19);
//! assert!(board.can_place(&bar));
//!
//! board.lock(&bar);
//! assert_eq!(board.occupied_count(), 4);
//! assert!(!board.is_game_over());
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{GameConfig, GameState};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::{template, Template, TEMPLATES};
pub use snapshot::{BoardSnapshot, GameSnapshot};
