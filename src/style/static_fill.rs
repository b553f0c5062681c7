//! Static styles
//!
//! Off and Solid paint the range once and halt the engine, since further
//! ticks would not change anything.

use super::{Style, TickOutcome};
use crate::{bounds::LightFrame, random::RandomSource};

/// Fills the active range with a single value, then halts
#[derive(Debug, Clone, Copy)]
pub struct StaticStyle {
    value: bool,
}

impl StaticStyle {
    /// All lights off
    pub const fn off() -> Self {
        Self { value: false }
    }

    /// All lights on
    pub const fn solid() -> Self {
        Self { value: true }
    }
}

impl Style for StaticStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        frame.clear_all();
        if self.value {
            frame.fill(true);
        }
        TickOutcome::HALT
    }

    fn reset(&mut self) {}
}
