//! The countdown state machine.
//!
//! `Running` while `remaining > 0`, `Finished` once it reaches zero; there is
//! no way back. `finished_early` starts out `true` and only a tick that lands
//! exactly on zero clears it, so a session that ends any other way (an
//! interruption, or `finish_now`) still reads as early.

use crate::core::clock::{Clock, TICK};
use crate::errors::AppResult;
use tracing::debug;

/// Classic pomodoro length, in seconds.
pub const DEFAULT_DURATION: u64 = 25 * 60;

/// What observers see after every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub remaining: u64,
    pub message: Option<&'a str>,
}

/// Something that reacts to countdown updates (the renderer, a recorder in tests).
pub trait Observer {
    fn on_update(&mut self, snapshot: Snapshot<'_>) -> AppResult<()>;
}

pub struct Countdown<'a> {
    remaining: u64,
    message: Option<String>,
    finished_early: bool,
    clock: Box<dyn Clock + 'a>,
    observers: Vec<Box<dyn Observer + 'a>>,
}

impl<'a> Countdown<'a> {
    pub fn new(duration: u64, message: Option<String>, clock: impl Clock + 'a) -> Self {
        Self {
            remaining: duration,
            message,
            finished_early: true,
            clock: Box::new(clock),
            observers: Vec::new(),
        }
    }

    /// Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: impl Observer + 'a) {
        self.observers.push(Box::new(observer));
    }

    /// Wait one tick, decrement (never below zero), then notify.
    ///
    /// If the clock fails, the countdown is left untouched.
    pub fn tick(&mut self) -> AppResult<()> {
        self.clock.wait(TICK)?;

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.finished_early = false;
        }
        debug!(remaining = self.remaining, "tick");

        self.notify_observers()
    }

    /// Jump straight to zero. `finished_early` is left as it was.
    pub fn finish_now(&mut self) -> AppResult<()> {
        self.remaining = 0;
        self.notify_observers()
    }

    /// Push the current state to every observer, stopping at the first failure.
    pub fn notify_observers(&mut self) -> AppResult<()> {
        let snapshot = Snapshot {
            remaining: self.remaining,
            message: self.message.as_deref(),
        };
        for observer in self.observers.iter_mut() {
            observer.on_update(snapshot)?;
        }
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.remaining < 1
    }

    /// Only meaningful once the session is over.
    pub fn was_finished_early(&self) -> bool {
        self.finished_early
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            remaining: self.remaining,
            message: self.message.as_deref(),
        }
    }
}
