//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{DisplayCell, Phase, ShapeKind};

pub const TITLE: &str = "=== BLOCKS ===";

const CONTROLS: [&str; 5] = [
    "A/← left",
    "D/→ right",
    "S/↓ down",
    "W/↑ rotate",
    "Q   quit",
];

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed in the last render, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board = &snap.board;
        let board_px_w = (board.width() as u16).saturating_mul(self.cell_w);
        let board_px_h = (board.height() as u16).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);
        // Title line sits directly above the frame.
        let total_h = frame_h.saturating_add(1);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame = Frame {
            x: start_x,
            y: start_y.saturating_add(1),
            w: frame_w,
            h: frame_h,
        };

        let title = CellStyle::default().bold();
        fb.put_str_centered(frame.x, frame.w, start_y, TITLE, title);

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, frame, border);

        for y in 0..board.height() {
            for (x, cell) in board.row(y).iter().enumerate() {
                let (ch, style) = match cell {
                    DisplayCell::Empty => ('·', empty_style()),
                    DisplayCell::Settled => ('█', settled_style()),
                    DisplayCell::Active => ('█', active_style(snap.active_kind)),
                };
                self.fill_cell_rect(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, viewport, frame);

        if snap.phase == Phase::GameOver {
            self.draw_game_over(fb, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = (frame.x + 1).saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = (frame.y + 1).saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str(panel_x, frame.y, "CONTROLS", label);
        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_str(panel_x, frame.y + 1 + i as u16, line, value);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: Frame) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let hint = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str_centered(frame.x, frame.w, mid_y.saturating_sub(1), "GAME OVER", style);
        fb.put_str_centered(frame.x, frame.w, mid_y, "R: play again", hint);
        fb.put_str_centered(frame.x, frame.w, mid_y + 1, "other key: quit", hint);
    }
}

fn empty_style() -> CellStyle {
    CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim()
}

fn settled_style() -> CellStyle {
    CellStyle::plain(Rgb::new(150, 150, 160), BOARD_BG)
}

fn active_style(kind: Option<ShapeKind>) -> CellStyle {
    let fg = match kind {
        Some(ShapeKind::I) => Rgb::new(80, 220, 220),
        Some(ShapeKind::O) => Rgb::new(240, 220, 80),
        Some(ShapeKind::T) => Rgb::new(200, 120, 220),
        Some(ShapeKind::S) => Rgb::new(100, 220, 120),
        Some(ShapeKind::Z) => Rgb::new(220, 80, 80),
        Some(ShapeKind::J) => Rgb::new(80, 120, 220),
        Some(ShapeKind::L) => Rgb::new(255, 165, 0),
        None => Rgb::new(255, 255, 255),
    };
    CellStyle::plain(fg, BOARD_BG).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_and_active_use_different_styles() {
        assert_ne!(settled_style(), active_style(Some(ShapeKind::T)));
        assert_ne!(settled_style(), active_style(None));
    }

    #[test]
    fn cell_size_is_at_least_one() {
        let view = GameView::new(0, 0);
        assert_eq!((view.cell_w, view.cell_h), (1, 1));
    }
}
