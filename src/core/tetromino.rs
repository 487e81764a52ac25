//! Tetromino module - the active falling piece and its operations
//!
//! The piece is an anchor plus the offsets of its current rotation state.
//! Movement and dropping validate against walls, floor and locked cells and
//! apply all-or-nothing. Rotation (and the chaos-mode substitution) validates
//! against bounds only; see the session design notes for why that asymmetry
//! is kept.

use crate::core::rng::GameRng;
use crate::core::shapes::{self, ShapeKind, ROTATION_STATES, ROTATION_STEP, SHAPE_COUNT};
use crate::core::Board;
use crate::types::{DropResult, GameMode, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

/// Active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: ShapeKind,
    /// Rotation table index: 0, 4, 8 or 12.
    pub rotation: u8,
    /// Anchor column.
    pub x: i8,
    /// Anchor row; negative while the piece is partially above the board.
    pub y: i8,
}

impl Tetromino {
    /// Create a piece of the given kind at the canonical spawn anchor.
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Draw a random kind from the session RNG and spawn it.
    pub fn spawn_random(rng: &mut GameRng) -> Self {
        let kind = ShapeKind::from_index(rng.next_range(SHAPE_COUNT as u32) as usize);
        Self::spawn(kind)
    }

    /// The 4 board cells the piece currently occupies.
    pub fn cells(&self) -> [(i8, i8); 4] {
        let offsets = shapes::cells(self.kind, self.rotation);
        offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Shift one column left if every cell stays free; no-op otherwise.
    pub fn try_move_left(&mut self, board: &Board) -> bool {
        self.try_shift(board, -1)
    }

    /// Shift one column right if every cell stays free; no-op otherwise.
    pub fn try_move_right(&mut self, board: &Board) -> bool {
        self.try_shift(board, 1)
    }

    fn try_shift(&mut self, board: &Board, dx: i8) -> bool {
        let clear = self
            .cells()
            .iter()
            .all(|&(x, y)| board.is_free(x + dx, y));
        if clear {
            self.x += dx;
        }
        clear
    }

    /// Apply the rotate input.
    ///
    /// Normal mode steps to the next rotation state; chaos mode discards the
    /// piece identity and picks a random kind and rotation state. Either way
    /// the candidate is checked against board bounds only, not occupancy, and
    /// the piece is left unchanged if any cell would leave the board.
    ///
    /// Locked cells deliberately play no part here, so no board reference is
    /// taken; movement and dropping are the strict operations.
    pub fn try_rotate(&mut self, mode: GameMode, rng: &mut GameRng) -> bool {
        let (kind, rotation) = match mode {
            GameMode::Normal => (self.kind, shapes::next_rotation(self.rotation)),
            GameMode::Chaos => {
                let kind = ShapeKind::from_index(rng.next_range(SHAPE_COUNT as u32) as usize);
                let rotation = rng.next_range(ROTATION_STATES as u32) as u8 * ROTATION_STEP;
                (kind, rotation)
            }
        };

        let in_bounds = shapes::cells(kind, rotation).iter().all(|&(dx, dy)| {
            let x = self.x + dx;
            let y = self.y + dy;
            (0..BOARD_WIDTH as i8).contains(&x) && y < BOARD_HEIGHT as i8
        });

        if in_bounds {
            self.kind = kind;
            self.rotation = rotation;
        }
        in_bounds
    }

    /// One gravity step: descend a row, or report that the piece must be
    /// fixed because a cell below is the floor or locked.
    pub fn try_drop(&mut self, board: &Board) -> DropResult {
        let clear = self
            .cells()
            .iter()
            .all(|&(x, y)| board.is_free(x, y + 1));
        if clear {
            self.y += 1;
            DropResult::Fall
        } else {
            DropResult::Fix
        }
    }

    /// Bake the piece into the board.
    ///
    /// Fails without touching the board when any cell is still above the
    /// visible top; the session treats that as game over.
    pub fn fix(&self, board: &mut Board) -> bool {
        board.fix_cells(self.cells())
    }
}
