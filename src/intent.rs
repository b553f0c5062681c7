//! Intent queue for reconfiguring an engine from another task.
//!
//! Senders (a network handler, a button interrupt) push [`PatternIntent`]s
//! into a bounded queue guarded by a critical section. The control loop
//! drains it between ticks with [`PatternEngine::process_intents`], so all
//! engine mutations still happen on the polling thread.
//!
//! [`PatternEngine::process_intents`]: crate::PatternEngine::process_intents

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;
use thiserror::Error;

/// Configuration change requested for an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternIntent {
    /// Resume ticking
    Start,
    /// Pause ticking
    Stop,
    /// Rewind the cursor and turn all lights off
    Clear,
    /// Restart the animation over the full strip
    Reset,
    /// Switch to a style by raw tag
    SetStyle(u8),
    /// Change the minimum time between ticks
    SetSpeed(Duration),
    /// Change the active range
    SetLimit(u8),
}

/// Returned when the queue has no room, carrying the rejected intent back
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("intent queue is full")]
pub struct QueueFull(pub PatternIntent);

/// Returned when there is nothing to receive
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("intent queue is empty")]
pub struct QueueEmpty;

/// Bounded intent queue, safe to share between tasks and interrupts
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<PatternIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sending handle
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    /// Get a receiving handle
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    /// Number of intents waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn try_send(&self, intent: PatternIntent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(QueueFull)
        })
    }

    fn try_receive(&self) -> Result<PatternIntent, QueueEmpty> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(QueueEmpty)
        })
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending handle for an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    /// Queue an intent without blocking
    pub fn try_send(&self, intent: PatternIntent) -> Result<(), QueueFull> {
        self.channel.try_send(intent)
    }
}

/// Receiving handle for an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    /// Take the oldest intent without blocking
    pub fn try_receive(&self) -> Result<PatternIntent, QueueEmpty> {
        self.channel.try_receive()
    }
}
