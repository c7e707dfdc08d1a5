//! Drives one countdown from start to finish and keeps the work log honest.

use crate::core::countdown::Countdown;
use crate::core::worklog::WorkLog;
use crate::errors::AppResult;
use tracing::{error, info, warn};

/// Record the session, draw the first frame and tick until zero.
///
/// Whatever stops the loop early (an interrupt from the clock, a screen
/// failure) the session is flagged as finished early before the error is
/// returned.
pub fn run_session(countdown: &mut Countdown<'_>, worklog: &mut dyn WorkLog) -> AppResult<()> {
    worklog.start(countdown)?;
    info!(
        seconds = countdown.remaining(),
        message = countdown.message().unwrap_or(""),
        "session started"
    );

    match tick_until_finished(countdown) {
        Ok(()) => {
            info!(early = countdown.was_finished_early(), "session finished");
            Ok(())
        }
        Err(err) => {
            warn!(remaining = countdown.remaining(), "session stopped: {}", err);
            if let Err(log_err) = worklog.finish_early() {
                error!("could not flag session as finished early: {}", log_err);
                return Err(log_err);
            }
            Err(err)
        }
    }
}

fn tick_until_finished(countdown: &mut Countdown<'_>) -> AppResult<()> {
    countdown.notify_observers()?;
    while !countdown.is_finished() {
        countdown.tick()?;
    }
    Ok(())
}
