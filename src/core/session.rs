//! Session module - the game state machine
//!
//! Owns the board, the active piece, the mode and the drop interval, and is
//! the only writer of any of them. The event loop feeds it exactly one event
//! at a time: a gravity tick or a mapped input event. Rejected operations are
//! silent no-ops, never errors.

use std::time::Duration;

use crate::core::rng::GameRng;
use crate::core::snapshot::Snapshot;
use crate::core::{Board, Tetromino};
use crate::types::{DropResult, GameMode, InputEvent, DROP_INTERVAL_MS, HARD_DROP_INTERVAL_MS};

/// A complete game: board, active piece, mode and timing.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Option<Tetromino>,
    mode: GameMode,
    game_over: bool,
    /// Current gravity interval; swapped to the hard-drop interval while a
    /// soft drop is in effect and restored on the next lock.
    drop_interval_ms: u32,
    /// Total rows cleared since the last restart.
    lines: u32,
    /// Seeded once at session creation; restarts keep the generator running.
    rng: GameRng,
}

impl Session {
    /// Create a session with an empty board and a freshly spawned piece.
    pub fn new(seed: u32) -> Self {
        let mut rng = GameRng::new(seed);
        let active = Tetromino::spawn_random(&mut rng);
        Self {
            board: Board::new(),
            active: Some(active),
            mode: GameMode::Normal,
            game_over: false,
            drop_interval_ms: DROP_INTERVAL_MS,
            lines: 0,
            rng,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups and tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece for scripted setups and tests.
    pub fn set_active(&mut self, piece: Tetromino) {
        self.active = Some(piece);
    }

    /// The interval the loop should wait before the next gravity tick.
    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms as u64)
    }

    /// Apply one input event.
    ///
    /// Movement, rotation and soft drop only act while playing with a live
    /// piece; mode toggle and restart also work on the game-over screen.
    /// `Quit` belongs to the loop and is ignored here.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeft => {
                if let Some(piece) = self.playing_piece() {
                    let mut moved = piece;
                    moved.try_move_left(&self.board);
                    self.active = Some(moved);
                }
            }
            InputEvent::MoveRight => {
                if let Some(piece) = self.playing_piece() {
                    let mut moved = piece;
                    moved.try_move_right(&self.board);
                    self.active = Some(moved);
                }
            }
            InputEvent::Rotate => {
                if let Some(piece) = self.playing_piece() {
                    let mut rotated = piece;
                    rotated.try_rotate(self.mode, &mut self.rng);
                    self.active = Some(rotated);
                }
            }
            InputEvent::SoftDrop => {
                if !self.game_over {
                    self.drop_interval_ms = HARD_DROP_INTERVAL_MS;
                }
            }
            InputEvent::ToggleMode => {
                self.mode = self.mode.toggled();
            }
            InputEvent::Restart => {
                self.restart();
            }
            InputEvent::Quit => {}
        }
    }

    /// Process one gravity tick.
    ///
    /// Descends the active piece, and on contact locks it, clears full rows,
    /// restores the normal interval and spawns a successor. A lock that fails
    /// because the piece is still above the board ends the game with the
    /// board untouched.
    pub fn on_tick(&mut self) {
        let Some(mut piece) = self.playing_piece() else {
            return;
        };

        match piece.try_drop(&self.board) {
            DropResult::Fall => {
                self.active = Some(piece);
            }
            DropResult::Fix => {
                if piece.fix(&mut self.board) {
                    self.lines += self.board.remove_full_rows().len() as u32;
                    self.drop_interval_ms = DROP_INTERVAL_MS;
                    self.active = Some(Tetromino::spawn_random(&mut self.rng));
                } else {
                    // Dead piece stays visible until restart.
                    self.active = Some(piece);
                    self.game_over = true;
                }
            }
        }
    }

    /// Reset to a fresh game: empty board, normal interval, new piece.
    /// The mode and the RNG survive the restart.
    pub fn restart(&mut self) {
        self.board.clear();
        self.game_over = false;
        self.drop_interval_ms = DROP_INTERVAL_MS;
        self.lines = 0;
        self.active = Some(Tetromino::spawn_random(&mut self.rng));
    }

    fn playing_piece(&self) -> Option<Tetromino> {
        if self.game_over {
            None
        } else {
            self.active
        }
    }

    /// Fill a render snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.rows = *self.board.rows();
        out.active = self.active.map(Into::into);
        out.mode = self.mode;
        out.game_over = self.game_over;
        out.lines = self.lines;
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let mut out = Snapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::FULL_ROW;
    use crate::core::shapes::ShapeKind;
    use crate::types::{BOARD_HEIGHT, SPAWN_X, SPAWN_Y};

    #[test]
    fn test_new_session_is_playing_with_a_piece() {
        let session = Session::new(1);
        assert!(!session.game_over());
        assert!(session.active().is_some());
        assert_eq!(session.mode(), GameMode::Normal);
        assert_eq!(session.drop_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_tick_descends_then_locks_and_respawns() {
        let mut session = Session::new(1);
        session.set_active(Tetromino::spawn(ShapeKind::O));

        // O spawns at y=-2 with cells at dy 0..=1; it locks once y reaches 18.
        for _ in 0..20 {
            session.on_tick();
        }
        assert_eq!(session.active().map(|p| p.y), Some(18));

        // The locking tick bakes the piece and spawns a successor at the top.
        session.on_tick();
        assert_eq!(session.board().rows()[18], (1 << 4) | (1 << 5));
        assert_eq!(session.board().rows()[19], (1 << 4) | (1 << 5));
        assert_eq!(session.active().map(|p| p.y), Some(SPAWN_Y));
        assert!(!session.game_over());
    }

    #[test]
    fn test_soft_drop_interval_restored_on_lock() {
        let mut session = Session::new(1);
        session.set_active(Tetromino::spawn(ShapeKind::O));

        session.apply(InputEvent::SoftDrop);
        assert_eq!(session.drop_interval(), Duration::from_millis(20));

        // Ride the piece down to its lock.
        for _ in 0..21 {
            session.on_tick();
        }
        assert_eq!(session.drop_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_failed_lock_ends_game_and_preserves_board() {
        let mut session = Session::new(1);

        // Stack a full column under the spawn area so the piece rests while
        // still above the visible top.
        for y in 0..BOARD_HEIGHT as usize {
            session.board_mut().set_row(y, 0b0011_1100);
        }
        let before = session.board().clone();
        session.set_active(Tetromino::spawn(ShapeKind::O));

        session.on_tick();
        assert!(session.game_over());
        assert_eq!(session.board(), &before);
        // The dead piece stays visible for the renderer.
        assert!(session.active().is_some());
    }

    #[test]
    fn test_inputs_ignored_while_game_over_except_mode_and_restart() {
        let mut session = Session::new(1);
        for y in 0..BOARD_HEIGHT as usize {
            session.board_mut().set_row(y, FULL_ROW);
        }
        session.set_active(Tetromino::spawn(ShapeKind::O));
        session.on_tick();
        assert!(session.game_over());

        let piece = session.active().unwrap();
        session.apply(InputEvent::MoveLeft);
        session.apply(InputEvent::MoveRight);
        session.apply(InputEvent::Rotate);
        assert_eq!(session.active().unwrap(), piece);

        session.apply(InputEvent::SoftDrop);
        assert_eq!(session.drop_interval(), Duration::from_millis(1000));

        session.apply(InputEvent::ToggleMode);
        assert_eq!(session.mode(), GameMode::Chaos);
    }

    #[test]
    fn test_restart_resets_board_flag_interval_and_spawns() {
        let mut session = Session::new(1);
        for y in 0..BOARD_HEIGHT as usize {
            session.board_mut().set_row(y, FULL_ROW);
        }
        session.set_active(Tetromino::spawn(ShapeKind::O));
        session.apply(InputEvent::SoftDrop);
        session.on_tick();
        assert!(session.game_over());

        session.apply(InputEvent::Restart);
        assert!(!session.game_over());
        assert!(session.board().rows().iter().all(|&row| row == 0));
        assert_eq!(session.drop_interval(), Duration::from_millis(1000));
        assert_eq!(session.lines(), 0);

        let piece = session.active().unwrap();
        assert_eq!((piece.x, piece.y, piece.rotation), (SPAWN_X, SPAWN_Y, 0));
    }

    #[test]
    fn test_lock_clears_completed_row() {
        let mut session = Session::new(1);

        // Row 19 full except the two columns the O piece will fill.
        let gap = (1 << 4) | (1 << 5);
        session.board_mut().set_row(19, FULL_ROW & !gap);
        // A marker above the cleared row must shift down by one.
        session.board_mut().set_row(17, 0b1);
        session.set_active(Tetromino::spawn(ShapeKind::O));

        // Drop to rest: cells at dy 0..=1 settle on rows 18 and 19.
        for _ in 0..21 {
            session.on_tick();
        }

        assert_eq!(session.lines(), 1);
        assert_eq!(session.board().rows()[18], 0b1);
        // Row 19 keeps only the O cells that were above the cleared row.
        assert_eq!(session.board().rows()[19], gap);
        assert_eq!(session.board().rows()[0], 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = Session::new(1);
        session.board_mut().set_row(12, 0b101);
        session.apply(InputEvent::ToggleMode);

        let snap = session.snapshot();
        assert_eq!(snap.rows[12], 0b101);
        assert_eq!(snap.mode, GameMode::Chaos);
        assert!(!snap.game_over);
        let active = snap.active.expect("active piece in snapshot");
        assert_eq!(active.x, session.active().unwrap().x);
    }
}
