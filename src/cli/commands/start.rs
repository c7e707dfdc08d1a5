use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::Application;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_clock, parse_duration};

/// What to tell the user after an early stop.
pub fn interrupted_notice(log_enabled: bool) -> &'static str {
    if log_enabled {
        "Pomodoro interrupted, session marked as finished early"
    } else {
        "Pomodoro interrupted (work log disabled, nothing recorded)"
    }
}

/// Handle the `start` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { time, message } = cmd {
        let seconds = match time {
            Some(t) => parse_duration(t)?,
            None => cfg.default_seconds()?,
        };
        if seconds == 0 {
            return Err(AppError::InvalidDuration(
                "a pomodoro must last at least one second".to_string(),
            ));
        }

        let mut app = Application::new(seconds, message.clone(), cfg);

        match app.run() {
            Ok(()) => {
                let about = message
                    .as_deref()
                    .map(|m| format!(" ({m})"))
                    .unwrap_or_default();
                success(format!("Pomodoro of {} finished{}", format_clock(seconds), about));
            }
            Err(AppError::Interrupted) => {
                warning(interrupted_notice(cfg.log_enabled));
                return Err(AppError::Interrupted);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
