//! Game module - one play session on top of the board engine
//!
//! Owns the board, the falling piece and the `Playing ↔ GameOver` state
//! machine. Every move is test-then-rollback: the piece is moved, checked with
//! [`Board::can_place`], and moved back by exactly the same delta if the new
//! position is illegal. A downward move that fails locks the piece instead.

use log::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Phase, BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_MS};

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Milliseconds between automatic one-row drops
    pub gravity_ms: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            gravity_ms: GRAVITY_MS,
            seed: 1,
        }
    }
}

/// A running session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Piece,
    rng: SimpleRng,
    phase: Phase,
    drop_timer_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rows_cleared: u32,
    pieces_locked: u32,
}

impl GameState {
    /// Start a session: empty board, first piece at the spawn position.
    pub fn new(config: GameConfig) -> Self {
        let board = Board::with_size(config.width, config.height);
        let mut rng = SimpleRng::new(config.seed);
        let active = spawn_piece(&board, &mut rng);

        let mut state = Self {
            config,
            board,
            active,
            rng,
            phase: Phase::Playing,
            drop_timer_ms: 0,
            episode_id: 0,
            rows_cleared: 0,
            pieces_locked: 0,
        };
        state.check_spawn();
        state
    }

    /// Default-sized session with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (for setting up positions)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Rows removed since the session started
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Board column and row a fresh piece starts at
    pub fn spawn_position(&self) -> (i32, i32) {
        spawn_position(&self.board)
    }

    /// Apply a player action. Returns true if the session changed.
    ///
    /// While playing, `Restart` is ignored; after game over, only `Restart`
    /// is honored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (Phase::GameOver, GameAction::Restart) => {
                self.restart();
                true
            }
            (Phase::GameOver, _) | (Phase::Playing, GameAction::Restart) => false,
            (Phase::Playing, GameAction::MoveLeft) => self.try_move(-1, 0),
            (Phase::Playing, GameAction::MoveRight) => self.try_move(1, 0),
            (Phase::Playing, GameAction::SoftDrop) => {
                self.step_down();
                true
            }
            (Phase::Playing, GameAction::Rotate) => self.try_rotate(),
        }
    }

    /// Advance the gravity clock. Returns true if a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.config.gravity_ms {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down();
        true
    }

    /// Translate the active piece, rolling back by the same delta if the
    /// new position does not fit.
    pub(crate) fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        self.active.x += dx;
        self.active.y += dy;

        if self.board.can_place(&self.active) {
            return true;
        }

        self.active.x -= dx;
        self.active.y -= dy;
        false
    }

    /// Rotate the active piece, restoring the previous orientation if the
    /// rotated piece does not fit.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let backup = self.active.clone();
        self.active.rotate();

        if self.board.can_place(&self.active) {
            return true;
        }

        self.active = backup;
        false
    }

    /// Move down one row, or lock the piece where it rests.
    /// Returns true if the piece moved.
    fn step_down(&mut self) -> bool {
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_active();
        false
    }

    fn lock_active(&mut self) {
        let cleared = self.board.lock(&self.active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.rows_cleared = self.rows_cleared.wrapping_add(cleared as u32);
        debug!(
            "locked {:?} at ({}, {})",
            self.active.kind(),
            self.active.x,
            self.active.y
        );
        if cleared > 0 {
            info!("cleared {cleared} row(s), {} total", self.rows_cleared);
        }

        self.active = spawn_piece(&self.board, &mut self.rng);
        self.check_spawn();
    }

    /// A fresh piece that cannot be placed, or anything settled in the top
    /// row, ends the session.
    fn check_spawn(&mut self) {
        if !self.board.can_place(&self.active) || self.board.is_game_over() {
            self.phase = Phase::GameOver;
            info!(
                "game over after {} piece(s), {} row(s) cleared",
                self.pieces_locked, self.rows_cleared
            );
        } else {
            debug!("spawned {:?}", self.active.kind());
        }
    }

    /// Empty the board and start over. The RNG keeps running, so the next
    /// session gets a different sequence.
    pub fn restart(&mut self) {
        self.board.clear();
        self.phase = Phase::Playing;
        self.drop_timer_ms = 0;
        self.rows_cleared = 0;
        self.pieces_locked = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("restarting, episode {}", self.episode_id);

        self.active = spawn_piece(&self.board, &mut self.rng);
        self.check_spawn();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.snapshot_into(Some(&self.active), &mut out.board);
        out.phase = self.phase;
        out.active_kind = self.active.kind();
        out.rows_cleared = self.rows_cleared;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn spawn_position(board: &Board) -> (i32, i32) {
    ((board.width() / 2).saturating_sub(1) as i32, 0)
}

fn spawn_piece(board: &Board, rng: &mut SimpleRng) -> Piece {
    let (x, y) = spawn_position(board);
    Piece::spawn(rng.next_shape(), x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_seed(12345);

        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.spawn_position(), (4, 0));
        assert_eq!((state.active().x, state.active().y), (4, 0));
        assert!(state.active().kind().is_some());
    }

    #[test]
    fn test_try_move_rolls_back_exact_delta() {
        let mut state = GameState::with_seed(1);

        while state.try_move(-1, 0) {}
        assert_eq!(state.active().x, 0);

        // Blocked again: still at the wall, nothing overshoots.
        assert!(!state.try_move(-1, 0));
        assert_eq!(state.active().x, 0);
        assert_eq!(state.active().y, 0);
    }

    #[test]
    fn test_try_move_collision() {
        let mut state = GameState::with_seed(1);
        let before = state.active().clone();
        let x = before.x;

        // Wall of settled cells directly right of the piece.
        let right = x + before.width() as i32;
        for y in 0..4 {
            state.board_mut().set(right, y, true);
        }

        assert!(!state.try_move(1, 0));
        assert_eq!(state.active(), &before);
    }

    #[test]
    fn test_try_rotate_restores_backup() {
        let mut state = GameState::with_seed(1);
        let before = state.active().clone();
        let mut turned = before.clone();
        turned.rotate();

        let original: Vec<_> = before.board_cells().collect();
        let blocker = turned.board_cells().find(|cell| !original.contains(cell));

        match blocker {
            Some((x, y)) => {
                state.board_mut().set(x, y, true);
                assert!(!state.try_rotate());
                assert_eq!(state.active(), &before);
            }
            // A square rotates onto itself.
            None => {
                assert_eq!(before.kind(), Some(ShapeKind::O));
                assert!(state.try_rotate());
            }
        }
    }

    #[test]
    fn test_tick_fires_on_gravity_interval() {
        let mut state = GameState::with_seed(1);
        let y0 = state.active().y;

        for _ in 0..4 {
            assert!(!state.tick(100));
        }
        assert_eq!(state.active().y, y0);

        assert!(state.tick(100));
        assert_eq!(state.active().y, y0 + 1);
    }

    #[test]
    fn test_soft_drop_locks_at_bottom() {
        let mut state = GameState::with_seed(1);
        for _ in 0..40 {
            state.apply_action(GameAction::SoftDrop);
            if state.pieces_locked() > 0 {
                break;
            }
        }
        assert_eq!(state.pieces_locked(), 1);
        assert_eq!(state.board().occupied_count(), 4);
        assert!(!state.game_over());
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::with_seed(1);
        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn test_tiny_board_is_over_immediately() {
        // Only the square fits on a 2x2 board.
        let config = GameConfig {
            width: 2,
            height: 2,
            ..GameConfig::default()
        };
        let mut saw_over = false;
        for seed in 1..20 {
            let state = GameState::new(GameConfig { seed, ..config });
            let fits = state.active().width() <= 2 && state.active().height() <= 2;
            assert_eq!(state.game_over(), !fits);
            saw_over |= state.game_over();
        }
        assert!(saw_over);
    }
}
