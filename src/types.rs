//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (in milliseconds)
pub const DROP_INTERVAL_MS: u32 = 1000;
/// Interval used while a soft drop is in effect (until the next lock).
pub const HARD_DROP_INTERVAL_MS: u32 = 20;

/// Canonical spawn anchor: horizontally centered, two rows above the
/// visible board top.
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = -2;

/// Rule set for the rotate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Rotate advances the piece to its next rotation state.
    Normal,
    /// Rotate replaces the piece with a random kind and rotation.
    Chaos,
}

impl GameMode {
    /// Cycle to the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Normal => GameMode::Chaos,
            GameMode::Chaos => GameMode::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Chaos => "chaos",
        }
    }
}

/// Discrete events consumed by the game loop.
///
/// `Quit` is intercepted by the loop itself; the session never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    ToggleMode,
    Restart,
    Quit,
}

/// Outcome of a single gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The piece descended one row.
    Fall,
    /// The piece is resting on the floor or on locked cells and must be fixed.
    Fix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_cycles() {
        assert_eq!(GameMode::Normal.toggled(), GameMode::Chaos);
        assert_eq!(GameMode::Chaos.toggled(), GameMode::Normal);
        assert_eq!(GameMode::Normal.toggled().toggled(), GameMode::Normal);
    }
}
