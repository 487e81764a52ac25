//! Session integration tests - the state machine end to end

use bitris::core::board::FULL_ROW;
use bitris::core::{Session, ShapeKind, Tetromino};
use bitris::types::{GameMode, InputEvent, BOARD_HEIGHT, SPAWN_X, SPAWN_Y};

fn fill_row_except(session: &mut Session, y: usize, hole: u8) {
    session.board_mut().set_row(y, FULL_ROW & !(1 << hole));
}

#[test]
fn test_lock_into_single_hole_clears_the_row() {
    let mut session = Session::new(3);

    // Row 19 filled everywhere except column 5; markers above it.
    fill_row_except(&mut session, 19, 5);
    session.board_mut().set_row(18, 0b1);
    session.board_mut().set_row(17, 0b10);

    // A vertical I in column 5 plugs the hole when it lands.
    session.set_active(Tetromino {
        kind: ShapeKind::I,
        rotation: 4,
        x: 3,
        y: SPAWN_Y,
    });

    let mut guard = 0;
    while session.lines() == 0 {
        session.on_tick();
        guard += 1;
        assert!(guard < 64, "row never cleared");
        assert!(!session.game_over());
    }

    assert_eq!(session.lines(), 1);
    // Exactly the full row is gone; everything above shifted down one.
    assert_eq!(session.board().rows()[19], 0b1 | (1 << 5));
    assert_eq!(session.board().rows()[18], 0b10 | (1 << 5));
    assert_eq!(session.board().rows()[0], 0);
}

#[test]
fn test_partially_hidden_lock_is_game_over_not_a_crash() {
    let mut session = Session::new(3);

    // Locked material all the way to the top of the spawn columns.
    for y in 0..BOARD_HEIGHT as usize {
        session.board_mut().set_row(y, (1 << 4) | (1 << 5));
    }
    let before = session.board().clone();
    session.set_active(Tetromino::spawn(ShapeKind::O));

    session.on_tick();

    assert!(session.game_over());
    assert_eq!(session.board(), &before, "failed lock must not touch bits");
}

#[test]
fn test_restart_after_game_over_starts_a_fresh_game() {
    let mut session = Session::new(3);
    for y in 0..BOARD_HEIGHT as usize {
        session.board_mut().set_row(y, FULL_ROW);
    }
    session.set_active(Tetromino::spawn(ShapeKind::O));
    session.on_tick();
    assert!(session.game_over());

    session.apply(InputEvent::Restart);

    assert!(!session.game_over());
    assert!(session.board().rows().iter().all(|&row| row == 0));
    let piece = session.active().expect("restart must spawn");
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.rotation, 0);
}

#[test]
fn test_same_seed_same_events_same_game() {
    let events = [
        InputEvent::MoveLeft,
        InputEvent::Rotate,
        InputEvent::ToggleMode,
        InputEvent::Rotate,
        InputEvent::MoveRight,
        InputEvent::SoftDrop,
    ];

    let mut a = Session::new(99);
    let mut b = Session::new(99);

    for round in 0..50 {
        a.apply(events[round % events.len()]);
        b.apply(events[round % events.len()]);
        a.on_tick();
        b.on_tick();
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at round {}", round);
    }
}

#[test]
fn test_mode_toggle_changes_rotation_semantics() {
    let mut session = Session::new(3);
    session.set_active(Tetromino {
        kind: ShapeKind::T,
        rotation: 0,
        x: 3,
        y: 5,
    });

    // Normal: rotation steps, identity keeps.
    session.apply(InputEvent::Rotate);
    let piece = session.active().unwrap();
    assert_eq!(piece.kind, ShapeKind::T);
    assert_eq!(piece.rotation, 4);

    // Chaos: the piece may change kind; the rotation index stays a state.
    session.apply(InputEvent::ToggleMode);
    assert_eq!(session.mode(), GameMode::Chaos);
    session.apply(InputEvent::Rotate);
    let piece = session.active().unwrap();
    assert_eq!(piece.rotation % 4, 0);
    assert_eq!((piece.x, piece.y), (3, 5), "chaos keeps the anchor");
}

#[test]
fn test_one_event_per_step_single_writer() {
    // Interleaved inputs and ticks never leave the session inconsistent:
    // the active piece always satisfies the free-cell invariant for moves.
    let mut session = Session::new(12345);

    for round in 0..500 {
        match round % 5 {
            0 => session.apply(InputEvent::MoveLeft),
            1 => session.apply(InputEvent::Rotate),
            2 => session.apply(InputEvent::MoveRight),
            3 => session.apply(InputEvent::SoftDrop),
            _ => session.on_tick(),
        }

        if session.game_over() {
            session.apply(InputEvent::Restart);
        }

        let piece = session.active().expect("piece present while playing");
        for (x, y) in piece.cells() {
            assert!((0..10).contains(&x));
            assert!(y < BOARD_HEIGHT as i8);
        }
    }
}

#[test]
fn test_snapshot_emitted_after_every_event_matches_state() {
    let mut session = Session::new(8);
    session.apply(InputEvent::SoftDrop);
    session.on_tick();

    let snap = session.snapshot();
    assert_eq!(&snap.rows, session.board().rows());
    assert_eq!(snap.game_over, session.game_over());
    assert_eq!(snap.mode, session.mode());
    assert_eq!(snap.lines, session.lines());
    assert_eq!(
        snap.active.map(|p| (p.x, p.y)),
        session.active().map(|p| (p.x, p.y))
    );
}
