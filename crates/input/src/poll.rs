//! Non-blocking collection of pending key presses.
//!
//! The loop waits for input at most until the next gravity tick, then takes
//! every key that is already queued so a burst of presses is handled in one
//! frame instead of one per tick.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Upper bound on keys handled per frame. Extra keys stay queued for the
/// next frame.
pub const MAX_KEYS_PER_FRAME: usize = 16;

pub type KeyBatch = ArrayVec<KeyEvent, MAX_KEYS_PER_FRAME>;

/// Wait up to `timeout` for input, then drain what is queued into `out`.
///
/// `out` is cleared first. Non-key events (resize, focus, mouse) are consumed
/// and dropped; the renderer picks up size changes on its own.
pub fn drain_pending_into(timeout: Duration, out: &mut KeyBatch) -> io::Result<()> {
    out.clear();

    let mut ready = event::poll(timeout)?;
    while ready && !out.is_full() {
        if let Event::Key(key) = event::read()? {
            if is_press(&key) {
                out.push(key);
            }
        }
        ready = event::poll(Duration::ZERO)?;
    }

    Ok(())
}

/// Presses and auto-repeats count; releases do not.
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}
