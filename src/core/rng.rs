//! RNG module - small deterministic generator for piece selection
//!
//! A linear congruential generator is plenty for picking shapes and chaos
//! rotations, and keeps games reproducible from a seed. The session owns a
//! single instance created at session start; spawning never reseeds it, so
//! rapid spawns cannot collapse onto near-identical clock seeds.

/// Seedable LCG (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a generator from a seed. A zero seed is bumped to avoid the
    /// all-zero fixed point.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance and return the next raw value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
