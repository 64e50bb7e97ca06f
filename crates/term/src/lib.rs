//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a crossterm
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure ([`GameView`]) and I/O separate ([`TerminalRenderer`])
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
