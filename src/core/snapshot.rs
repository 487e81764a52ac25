//! Read-only render snapshot of a session.
//!
//! The loop fills one of these after every processed event and hands it to
//! the view; the renderer never touches live game state.

use crate::core::shapes::ShapeKind;
use crate::core::Tetromino;
use crate::types::{GameMode, BOARD_HEIGHT};

/// Active piece as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for PieceSnapshot {
    fn from(piece: Tetromino) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Row occupancy masks, top to bottom.
    pub rows: [u16; BOARD_HEIGHT as usize],
    pub active: Option<PieceSnapshot>,
    pub mode: GameMode,
    pub game_over: bool,
    pub lines: u32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            rows: [0; BOARD_HEIGHT as usize],
            active: None,
            mode: GameMode::Normal,
            game_over: false,
            lines: 0,
        }
    }
}
