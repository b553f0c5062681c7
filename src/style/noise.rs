use super::{Style, TickOutcome};
use crate::{bounds::LightFrame, random::RandomSource};

/// Randomizes every light of the active range on each tick
///
/// There is no stable phase, so each tick is its own cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStyle;

impl Style for RandomStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, rng: &mut R) -> TickOutcome {
        frame.clear_all();
        for light in frame.active() {
            *light = rng.next_bool();
        }
        TickOutcome::CYCLE
    }

    fn reset(&mut self) {}
}
