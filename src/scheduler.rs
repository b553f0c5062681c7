//! Poll scheduling and output utilities.
//!
//! Ties an engine to a [`LightOutput`] without async/await or
//! platform-specific timers. The caller is responsible for sleeping between
//! polls.

use embassy_time::{Duration, Instant};

use crate::clock::Clock;
use crate::engine::PatternEngine;
use crate::intent::IntentReceiver;
use crate::random::RandomSource;

/// Abstract light output
///
/// Implement this trait to drive pins, shift registers or a display.
pub trait LightOutput {
    /// Write the full light snapshot
    fn write(&mut self, lights: &[bool]);
}

/// Result of a poll.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// Whether the engine ticked and the output was written.
    pub ticked: bool,
    /// Earliest instant of the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if already due).
    pub sleep_duration: Duration,
}

/// Portable scheduler that polls an engine and pushes ticks to an output.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = PatternScheduler::new(engine, pins);
///
/// loop {
///     let result = scheduler.poll_with_intents(&receiver);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct PatternScheduler<O: LightOutput, C: Clock, R: RandomSource> {
    output: O,
    engine: PatternEngine<C, R>,
}

impl<O: LightOutput, C: Clock, R: RandomSource> PatternScheduler<O, C, R> {
    pub fn new(engine: PatternEngine<C, R>, output: O) -> Self {
        Self { output, engine }
    }

    /// Poll the engine once.
    ///
    /// The output is written only when a tick happened, so an unchanged
    /// strip is never rewritten.
    pub fn poll(&mut self) -> PollResult {
        let ticked = self.engine.update();
        if ticked {
            self.output.write(self.engine.lights());
        }

        PollResult {
            ticked,
            next_deadline: self.engine.next_tick_at(),
            sleep_duration: self.engine.time_until_next_tick(),
        }
    }

    /// Apply pending intents, then poll.
    pub fn poll_with_intents<const SIZE: usize>(
        &mut self,
        intents: &IntentReceiver<'_, SIZE>,
    ) -> PollResult {
        self.engine.process_intents(intents);
        self.poll()
    }

    pub fn engine(&self) -> &PatternEngine<C, R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PatternEngine<C, R> {
        &mut self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
