use super::{Style, TickOutcome};
use crate::{bounds::LightFrame, random::RandomSource};

/// Toggles the whole active range on and off
///
/// A cycle completes on every off-phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlinkStyle {
    lit: bool,
}

impl Style for BlinkStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        self.lit = !self.lit;
        if self.lit {
            frame.fill(true);
            TickOutcome::CONTINUE
        } else {
            frame.clear_all();
            TickOutcome::CYCLE
        }
    }

    fn reset(&mut self) {
        self.lit = false;
    }
}
