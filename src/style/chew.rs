//! Chew style
//!
//! Two sparks, each a head light with one trailing neighbour, start at
//! opposite ends of the range and close in on the middle. Once the heads
//! meet, both restart from their ends and a cycle is counted.

use super::{Style, TickOutcome};
use crate::{bounds::LightFrame, random::RandomSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChewStyle {
    /// Distance of both heads from their ends
    step: usize,
}

impl Style for ChewStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        // Heads are adjacent (even range) or overlap (odd range) at this step
        let meet = frame.limit().saturating_sub(1) / 2;

        let mut outcome = TickOutcome::CONTINUE;
        if self.step > meet {
            self.step = 0;
            outcome = TickOutcome::CYCLE;
            frame.clear_all();
        }

        frame.fill(false);
        frame.set_mirrored(self.step, true);
        if let Some(trail) = self.step.checked_sub(1) {
            frame.set_mirrored(trail, true);
        }
        self.step += 1;

        outcome
    }

    fn reset(&mut self) {
        self.step = 0;
    }
}
