//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], decides what a
//! key means on the game-over prompt, and drains pending key presses without
//! blocking past the next tick.

pub mod map;
pub mod poll;

pub use tui_blocks_types as types;

pub use map::{game_over_choice, handle_key_event, should_quit, GameOverChoice};
pub use poll::{drain_pending_into, is_press, KeyBatch, MAX_KEYS_PER_FRAME};
