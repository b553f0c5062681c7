//! Fill and empty styles
//!
//! Lights turn on one at a time from the start of the range and turn off
//! one at a time from the end of it. The combined style sweeps forward
//! until full, flips direction and sweeps back down until empty.

use super::{Style, SweepDirection, TickOutcome};
use crate::{bounds::LightFrame, random::RandomSource};

/// Smallest span the randomized fill will stop at
const MIN_RANDOM_SPAN: u8 = 2;

/// Turns lights on from index 0 upward, clearing once full
#[derive(Debug, Clone, Copy, Default)]
pub struct FillStyle {
    filled: usize,
}

impl Style for FillStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        if self.filled < frame.limit() {
            frame.set(self.filled, true);
            self.filled += 1;
            return TickOutcome::CONTINUE;
        }

        frame.clear_all();
        self.filled = 0;
        TickOutcome::CYCLE
    }

    fn reset(&mut self) {
        self.filled = 0;
    }
}

/// Fills the range at once, then turns lights off from the high end down
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStyle {
    /// Lights still on, `None` until the range has been filled
    remaining: Option<usize>,
}

impl Style for EmptyStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, _rng: &mut R) -> TickOutcome {
        let Some(remaining) = self.remaining else {
            frame.fill(true);
            self.remaining = Some(frame.limit());
            return TickOutcome::CONTINUE;
        };

        let remaining = remaining.min(frame.limit()).saturating_sub(1);
        frame.set(remaining, false);
        if remaining == 0 {
            self.remaining = None;
            return TickOutcome::CYCLE;
        }

        self.remaining = Some(remaining);
        TickOutcome::CONTINUE
    }

    fn reset(&mut self) {
        self.remaining = None;
    }
}

/// Fills up to a target span, then empties back down
///
/// The plain variant always fills the whole range. The randomized variant
/// draws its span once per cycle from `[2, limit)`.
#[derive(Debug, Clone, Copy)]
pub struct FillEmptyStyle {
    count: usize,
    direction: SweepDirection,
    /// Span of the current cycle, `None` until drawn
    span: Option<usize>,
    randomized: bool,
}

impl FillEmptyStyle {
    /// Fill the whole range every cycle
    pub const fn new() -> Self {
        Self {
            count: 0,
            direction: SweepDirection::Forward,
            span: None,
            randomized: false,
        }
    }

    /// Fill to a random span every cycle
    pub const fn randomized() -> Self {
        Self {
            randomized: true,
            ..Self::new()
        }
    }

    const fn is_cycle_start(&self) -> bool {
        self.count == 0 && matches!(self.direction, SweepDirection::Forward)
    }

    fn draw_span<R: RandomSource>(&self, limit: usize, rng: &mut R) -> usize {
        let limit_u8 = u8::try_from(limit).unwrap_or(u8::MAX);
        if !self.randomized || limit_u8 <= MIN_RANDOM_SPAN {
            return limit;
        }
        usize::from(rng.next_in(MIN_RANDOM_SPAN..limit_u8))
    }
}

impl Default for FillEmptyStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for FillEmptyStyle {
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, rng: &mut R) -> TickOutcome {
        let limit = frame.limit();
        if self.is_cycle_start() {
            self.span = Some(self.draw_span(limit, rng));
        }
        let span = self.span.unwrap_or(limit).clamp(1, limit);
        self.count = self.count.min(span);

        if self.direction == SweepDirection::Forward {
            if self.count < span {
                frame.set(self.count, true);
                self.count += 1;
                return TickOutcome::CONTINUE;
            }
            self.direction = SweepDirection::Backward;
        }

        self.count = self.count.saturating_sub(1);
        frame.set(self.count, false);
        if self.count > 0 {
            return TickOutcome::CONTINUE;
        }

        frame.clear_all();
        self.direction = SweepDirection::Forward;
        TickOutcome::CYCLE
    }

    fn reset(&mut self) {
        self.count = 0;
        self.direction = SweepDirection::Forward;
        self.span = None;
    }
}
