//! Time source for the countdown.
//!
//! `Countdown::tick` suspends through a `Clock`, which is injected at
//! construction so tests can run a 25-minute session instantly.

use crate::errors::AppResult;
use std::thread;
use std::time::Duration;

/// Length of one tick.
pub const TICK: Duration = Duration::from_secs(1);

pub trait Clock {
    /// Block for `duration`. An error aborts the tick before any state changes.
    fn wait(&mut self, duration: Duration) -> AppResult<()>;
}

/// Real-time clock backed by `thread::sleep`. Cannot be interrupted.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn wait(&mut self, duration: Duration) -> AppResult<()> {
        thread::sleep(duration);
        Ok(())
    }
}

/// Returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantClock;

impl Clock for InstantClock {
    fn wait(&mut self, _duration: Duration) -> AppResult<()> {
        Ok(())
    }
}
