use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::bounds::LightFrame;
use crate::clock::Clock;
use crate::error::{PatternError, PatternResult};
use crate::intent::{IntentReceiver, PatternIntent};
use crate::logging::{debug, trace, warn};
use crate::random::RandomSource;
use crate::style::{StyleId, StyleSlot};

/// Largest strip a single engine can drive
pub const MAX_LIGHTS: usize = 255;

/// Default delay between ticks
pub const DEFAULT_SPEED: Duration = Duration::from_millis(500);

/// Configuration for the pattern engine
#[derive(Debug, Clone, Copy)]
pub struct PatternConfig {
    /// Initial style
    pub style: StyleId,
    /// Minimum time between ticks
    pub speed: Duration,
    /// Active range, the whole strip when `None`
    pub limit: Option<u8>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            style: StyleId::Chase,
            speed: DEFAULT_SPEED,
            limit: None,
        }
    }
}

/// Pattern Engine - a time-gated state machine over a row of binary lights
///
/// The engine does no scheduling of its own. Call [`PatternEngine::update`]
/// once per control-loop iteration; it ticks the selected style whenever at
/// least `speed` has elapsed since the previous tick.
///
/// The cycle counter is a `u8` and wraps to zero after 255 completed cycles.
pub struct PatternEngine<C: Clock, R: RandomSource> {
    // External dependencies
    clock: C,
    rng: R,

    // Configuration
    size: u8,
    limit: u8,
    speed: Duration,
    style: u8,

    // Internal state
    slot: StyleSlot,
    running: bool,
    cycles: u8,
    last_tick: Instant,
    lights: Vec<bool, MAX_LIGHTS>,
}

impl<C: Clock, R: RandomSource> PatternEngine<C, R> {
    /// Create an engine with the default configuration
    pub fn new(size: u8, clock: C, rng: R) -> PatternResult<Self> {
        Self::with_config(size, &PatternConfig::default(), clock, rng)
    }

    /// Create an engine for `size` lights, all initially off
    pub fn with_config(size: u8, config: &PatternConfig, clock: C, rng: R) -> PatternResult<Self> {
        if size == 0 {
            return Err(PatternError::InvalidSize(size));
        }

        let mut lights = Vec::new();
        lights
            .resize(usize::from(size), false)
            .map_err(|()| PatternError::InvalidSize(size))?;

        let mut engine = Self {
            clock,
            rng,
            size,
            limit: size,
            speed: config.speed,
            style: config.style.as_raw(),
            slot: config.style.to_slot(),
            running: true,
            cycles: 0,
            last_tick: Instant::from_millis(0),
            lights,
        };
        if let Some(limit) = config.limit {
            engine.set_limit(limit)?;
        }

        Ok(engine)
    }

    /// Enable ticking
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Disable ticking, leaving lights and cursors untouched
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Rewind the style cursor and turn every light off
    ///
    /// Keeps the cycle counter.
    pub fn clear(&mut self) {
        self.slot.reset();
        self.lights.fill(false);
        self.running = true;
    }

    /// Restart the animation over the full strip
    pub fn reset(&mut self) {
        self.cycles = 0;
        self.limit = self.size;
        self.running = true;
        self.clear();
    }

    /// Select a style by its raw tag and restart the animation
    ///
    /// Unrecognized values are accepted and tick without changing anything.
    pub fn set_style(&mut self, style: u8) {
        self.style = style;
        self.slot = StyleSlot::from_raw(style);
        debug!("pattern style set to {}", style);
        self.reset();
    }

    /// Select a known style and restart the animation
    pub fn set_style_id(&mut self, style: StyleId) {
        self.set_style(style.as_raw());
    }

    /// Set the minimum time between ticks
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Restrict styles to the first `limit` lights
    ///
    /// Lights already on past the new limit are left as they are.
    pub fn set_limit(&mut self, limit: u8) -> PatternResult<()> {
        if limit == 0 || limit > self.size {
            warn!("rejected limit {} for {} lights", limit, self.size);
            return Err(PatternError::InvalidLimit {
                limit,
                size: self.size,
            });
        }
        self.limit = limit;
        self.running = true;
        Ok(())
    }

    /// Tick the current style if enough time has elapsed
    ///
    /// Returns whether a tick was performed.
    pub fn update(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let now = self.clock.now();
        if now.saturating_duration_since(self.last_tick) < self.speed {
            return false;
        }
        self.last_tick = now;

        let mut frame = LightFrame::new(&mut self.lights, usize::from(self.limit));
        let outcome = self.slot.tick(&mut frame, &mut self.rng);

        if outcome.cycle_completed {
            self.cycles = self.cycles.wrapping_add(1);
            trace!("pattern style {} completed cycle {}", self.style, self.cycles);
        }
        if outcome.halt {
            self.running = false;
        }

        true
    }

    /// Apply a single intent
    pub fn apply(&mut self, intent: PatternIntent) -> PatternResult<()> {
        match intent {
            PatternIntent::Start => self.start(),
            PatternIntent::Stop => self.stop(),
            PatternIntent::Clear => self.clear(),
            PatternIntent::Reset => self.reset(),
            PatternIntent::SetStyle(style) => self.set_style(style),
            PatternIntent::SetSpeed(speed) => self.set_speed(speed),
            PatternIntent::SetLimit(limit) => self.set_limit(limit)?,
        }
        Ok(())
    }

    /// Apply pending intents from the channel (non-blocking)
    ///
    /// Intents that fail are logged and skipped. Returns the number of
    /// intents applied.
    pub fn process_intents<const SIZE: usize>(&mut self, intents: &IntentReceiver<'_, SIZE>) -> usize {
        let mut applied = 0;
        while let Ok(intent) = intents.try_receive() {
            match self.apply(intent) {
                Ok(()) => applied += 1,
                Err(err) => warn!("skipped intent {:?}: {}", intent, err),
            }
        }
        applied
    }

    /// Value of the light at `index`
    pub fn value(&self, index: usize) -> PatternResult<bool> {
        self.lights
            .get(index)
            .copied()
            .ok_or(PatternError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }

    /// Snapshot of the whole strip
    pub fn lights(&self) -> &[bool] {
        &self.lights
    }

    /// Completed cycles of the current style
    pub const fn cycles(&self) -> u8 {
        self.cycles
    }

    pub const fn size(&self) -> u8 {
        self.size
    }

    pub const fn limit(&self) -> u8 {
        self.limit
    }

    pub const fn speed(&self) -> Duration {
        self.speed
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Raw style tag, as passed to [`PatternEngine::set_style`]
    pub const fn style(&self) -> u8 {
        self.style
    }

    /// Known style id, `None` for unrecognized tags
    pub fn style_id(&self) -> Option<StyleId> {
        StyleId::from_raw(self.style)
    }

    /// Earliest instant at which the next tick can happen
    pub fn next_tick_at(&self) -> Instant {
        self.last_tick + self.speed
    }

    /// Time left until the next tick, zero if one is already due
    pub fn time_until_next_tick(&self) -> Duration {
        self.next_tick_at()
            .saturating_duration_since(self.clock.now())
    }
}
