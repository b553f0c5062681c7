#![no_std]

pub mod bounds;
pub mod clock;
pub mod engine;
pub mod error;
pub mod intent;
mod logging;
pub mod random;
pub mod scheduler;
pub mod style;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{DEFAULT_SPEED, MAX_LIGHTS, PatternConfig, PatternEngine};
pub use error::{PatternError, PatternResult};
pub use intent::{IntentChannel, IntentReceiver, IntentSender, PatternIntent};
pub use random::RandomSource;
pub use scheduler::{LightOutput, PatternScheduler, PollResult};
pub use style::{StyleId, StyleSlot, TickOutcome};

pub use embassy_time::{Duration, Instant};
