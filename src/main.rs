//! Terminal falling-block runner (default binary).
//!
//! Each frame: render, wait for keys until the next tick, feed them to the
//! session, then advance gravity by one tick. Rendering goes through the
//! framebuffer renderer in `tui_blocks::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use log::info;

use tui_blocks::cli::Args;
use tui_blocks::core::{GameConfig, GameSnapshot, GameState};
use tui_blocks::input::{
    drain_pending_into, game_over_choice, handle_key_event, should_quit, GameOverChoice, KeyBatch,
};
use tui_blocks::logging;
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::{GameAction, Phase, TICK_MS};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.game_config()?;
    logging::init(args.log_file.as_deref())?;
    info!(
        "starting {}x{} board, gravity {}ms, seed {}",
        config.width, config.height, config.gravity_ms, config.seed
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, config));

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config);
    let view = GameView::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut keys = KeyBatch::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        drain_pending_into(timeout, &mut keys)?;

        for key in keys.drain(..) {
            if should_quit(key) {
                return Ok(());
            }

            match game.phase() {
                Phase::Playing => {
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                    // Keys typed before the prompt was drawn must not answer it.
                    if game.game_over() {
                        break;
                    }
                }
                Phase::GameOver => match game_over_choice(key) {
                    GameOverChoice::Restart => {
                        game.apply_action(GameAction::Restart);
                    }
                    GameOverChoice::Quit => return Ok(()),
                },
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
