//! Core module - pure game logic with no external dependencies
//!
//! This module contains the simulation: shape geometry, the board, the
//! active piece and the session state machine. It performs no I/O.

pub mod board;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod tetromino;

// Re-export commonly used types
pub use board::Board;
pub use rng::GameRng;
pub use session::Session;
pub use shapes::ShapeKind;
pub use snapshot::{PieceSnapshot, Snapshot};
pub use tetromino::Tetromino;
