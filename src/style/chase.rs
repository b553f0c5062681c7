use super::{Style, TickOutcome};
use crate::{bounds::LightFrame, random::RandomSource};

/// Single lit light sweeping forward through the range, wrapping around
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaseStyle {
    /// Currently lit index, `None` before the first tick
    lit: Option<usize>,
}

impl Style for ChaseStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        let Some(current) = self.lit else {
            frame.set(0, true);
            self.lit = Some(0);
            return TickOutcome::CONTINUE;
        };

        // Wrapping also covers a cursor left past a shrunk limit
        if current + 1 >= frame.limit() {
            frame.clear_all();
            frame.set(0, true);
            self.lit = Some(0);
            return TickOutcome::CYCLE;
        }

        frame.set(current, false);
        frame.set(current + 1, true);
        self.lit = Some(current + 1);
        TickOutcome::CONTINUE
    }

    fn reset(&mut self) {
        self.lit = None;
    }
}
