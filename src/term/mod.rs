//! Terminal rendering module.
//!
//! The view draws a snapshot into a framebuffer; the renderer flushes the
//! framebuffer to the terminal. Only the renderer performs I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
