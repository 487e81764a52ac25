//! GameView: maps a session [`Snapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested without a terminal. Board cells
//! are drawn two columns wide to compensate for terminal glyph aspect ratio.

use crossterm::style::Color;

use crate::core::shapes::{self, ShapeKind};
use crate::core::Snapshot;
use crate::term::fb::FrameBuffer;
use crate::types::{GameMode, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell.
const CELL_W: u16 = 2;

/// Frame around the board plus a side panel of status text.
pub struct GameView;

impl GameView {
    /// Minimum framebuffer size the view needs.
    pub fn required_size() -> (u16, u16) {
        let board_w = BOARD_WIDTH as u16 * CELL_W + 2;
        // Board frame plus a side panel for status and key help.
        (board_w + 24, BOARD_HEIGHT as u16 + 2)
    }

    /// Render one frame into the framebuffer.
    pub fn render(snapshot: &Snapshot, fb: &mut FrameBuffer) {
        fb.clear();

        Self::draw_frame(fb);
        Self::draw_locked_rows(snapshot, fb);
        Self::draw_active(snapshot, fb);
        Self::draw_panel(snapshot, fb);

        if snapshot.game_over {
            Self::draw_game_over(fb);
        }
    }

    fn draw_frame(fb: &mut FrameBuffer) {
        let inner_w = BOARD_WIDTH as u16 * CELL_W;
        let right = inner_w + 1;
        let bottom = BOARD_HEIGHT as u16 + 1;

        for x in 0..=right {
            fb.put(x, 0, '─', Color::Grey);
            fb.put(x, bottom, '─', Color::Grey);
        }
        for y in 0..=bottom {
            fb.put(0, y, '│', Color::Grey);
            fb.put(right, y, '│', Color::Grey);
        }
        fb.put(0, 0, '┌', Color::Grey);
        fb.put(right, 0, '┐', Color::Grey);
        fb.put(0, bottom, '└', Color::Grey);
        fb.put(right, bottom, '┘', Color::Grey);
    }

    fn draw_locked_rows(snapshot: &Snapshot, fb: &mut FrameBuffer) {
        for (y, &mask) in snapshot.rows.iter().enumerate() {
            for x in 0..BOARD_WIDTH {
                if mask & (1 << x) != 0 {
                    Self::draw_cell(fb, x as i8, y as i8, Color::DarkGrey);
                }
            }
        }
    }

    fn draw_active(snapshot: &Snapshot, fb: &mut FrameBuffer) {
        let Some(piece) = snapshot.active else {
            return;
        };
        let color = piece_color(piece.kind);
        for (dx, dy) in shapes::cells(piece.kind, piece.rotation) {
            let x = piece.x + dx;
            let y = piece.y + dy;
            // Cells above the visible top are simply not drawn.
            if y >= 0 {
                Self::draw_cell(fb, x, y, color);
            }
        }
    }

    fn draw_cell(fb: &mut FrameBuffer, x: i8, y: i8, color: Color) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = 1 + x as u16 * CELL_W;
        let py = 1 + y as u16;
        fb.put(px, py, '█', color);
        fb.put(px + 1, py, '█', color);
    }

    fn draw_panel(snapshot: &Snapshot, fb: &mut FrameBuffer) {
        let x = BOARD_WIDTH as u16 * CELL_W + 4;

        let mode_color = match snapshot.mode {
            GameMode::Normal => Color::White,
            GameMode::Chaos => Color::Magenta,
        };
        fb.put_str(x, 1, &format!("mode: {}", snapshot.mode.as_str()), mode_color);
        fb.put_str(x, 2, &format!("lines: {}", snapshot.lines), Color::White);

        fb.put_str(x, 4, "←/→ move  ↑ rotate", Color::Grey);
        fb.put_str(x, 5, "↓ drop    m mode", Color::Grey);
        fb.put_str(x, 6, "r restart q quit", Color::Grey);
    }

    fn draw_game_over(fb: &mut FrameBuffer) {
        let text = " GAME OVER ";
        let inner_w = BOARD_WIDTH as u16 * CELL_W;
        let x = 1 + inner_w.saturating_sub(text.len() as u16) / 2;
        let y = BOARD_HEIGHT as u16 / 2;
        fb.put_str(x, y, text, Color::Red);
        fb.put_str(x, y + 1, " r=restart ", Color::Red);
    }
}

fn piece_color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::I => Color::Cyan,
        ShapeKind::L => Color::Yellow,
        ShapeKind::J => Color::Blue,
        ShapeKind::T => Color::Magenta,
        ShapeKind::O => Color::White,
        ShapeKind::S => Color::Green,
        ShapeKind::Z => Color::Red,
    }
}
