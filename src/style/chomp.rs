//! Chomp styles
//!
//! A cursor and its mirror close in on the middle of the range together,
//! leaving lit pairs behind. Chomp clears once the cursors cross the middle.
//! Chomp & Empty turns the pairs back off from the center outward.

use super::{Style, SweepDirection, TickOutcome};
use crate::{
    bounds::{LightFrame, center_of},
    random::RandomSource,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChompStyle {
    cursor: usize,
}

impl Style for ChompStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        if self.cursor < center_of(frame.limit()) {
            frame.set_mirrored(self.cursor, true);
            self.cursor += 1;
            return TickOutcome::CONTINUE;
        }

        frame.clear_all();
        self.cursor = 0;
        TickOutcome::CYCLE
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChompEmptyStyle {
    cursor: usize,
    direction: SweepDirection,
}

impl Style for ChompEmptyStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        let pairs = center_of(frame.limit());
        self.cursor = self.cursor.min(pairs);

        if self.direction == SweepDirection::Forward {
            if self.cursor < pairs {
                frame.set_mirrored(self.cursor, true);
                self.cursor += 1;
                return TickOutcome::CONTINUE;
            }
            self.direction = SweepDirection::Backward;
        }

        self.cursor = self.cursor.saturating_sub(1);
        frame.set_mirrored(self.cursor, false);
        if self.cursor > 0 {
            return TickOutcome::CONTINUE;
        }

        frame.clear_all();
        self.direction = SweepDirection::Forward;
        TickOutcome::CYCLE
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.direction = SweepDirection::Forward;
    }
}
