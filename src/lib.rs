//! bitris - a terminal falling-block game on bitmask board rows.
//!
//! The crate splits into a pure simulation core and thin terminal shells:
//!
//! - [`core`]: shape table, board, active piece, session state machine
//! - [`input`]: key event → game event mapping
//! - [`term`]: snapshot → framebuffer → terminal rendering
//! - [`types`]: shared constants and plain enums
//!
//! The binary wires these into a single serializing event loop: a gravity
//! deadline and the keyboard feed one handler, which mutates the session and
//! emits a render snapshot after every processed event.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
