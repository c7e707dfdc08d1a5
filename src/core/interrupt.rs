//! Termination signals as a flag the countdown can see.
//!
//! Raw mode turns Ctrl+C into a key press, but `kill`, a closed terminal
//! window or a session manager still deliver real signals. Those set a shared
//! flag instead of killing the process, and `InterruptibleClock` turns the flag
//! into `AppError::Interrupted` so the terminal is released and the session is
//! flagged as finished early.

use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// A flag no signal is wired to. `raise` is the only way to set it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT, SIGTERM, SIGQUIT and (on unix) SIGHUP to the flag.
    pub fn install() -> AppResult<Self> {
        let interrupt = Self::new();

        #[cfg(unix)]
        let signals = signal_hook::consts::TERM_SIGNALS
            .iter()
            .copied()
            .chain([signal_hook::consts::SIGHUP]);
        #[cfg(not(unix))]
        let signals = signal_hook::consts::TERM_SIGNALS.iter().copied();

        for signal in signals {
            signal_hook::flag::register(signal, Arc::clone(&interrupt.raised))
                .map_err(AppError::Terminal)?;
        }
        debug!("signal handlers installed");
        Ok(interrupt)
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    fn check(&self) -> AppResult<()> {
        if self.is_raised() {
            warn!("termination signal received");
            return Err(AppError::Interrupted);
        }
        Ok(())
    }
}

/// Wraps another clock and fails the wait once the flag is up.
///
/// The flag is checked on both sides of the inner wait, so a signal that
/// lands mid-tick stops the countdown before the decrement.
pub struct InterruptibleClock<C: Clock> {
    inner: C,
    interrupt: Interrupt,
}

impl<C: Clock> InterruptibleClock<C> {
    pub fn new(inner: C, interrupt: Interrupt) -> Self {
        Self { inner, interrupt }
    }
}

impl<C: Clock> Clock for InterruptibleClock<C> {
    fn wait(&mut self, duration: Duration) -> AppResult<()> {
        self.interrupt.check()?;
        self.inner.wait(duration)?;
        self.interrupt.check()
    }
}
