//! Wires a countdown, the terminal renderer and the work log together.

use crate::config::Config;
use crate::core::countdown::Countdown;
use crate::core::interrupt::{Interrupt, InterruptibleClock};
use crate::core::session::run_session;
use crate::core::sound::Sound;
use crate::core::worklog::{NullWorkLog, SqliteWorkLog, WorkLog};
use crate::errors::AppResult;
use crate::ui::glyphs::BigFont;
use crate::ui::renderer::Renderer;
use crate::ui::terminal::{KeyboardClock, TerminalScreen};

pub struct Application {
    duration: u64,
    message: Option<String>,
    worklog: Box<dyn WorkLog>,
    sound: Sound,
}

impl Application {
    pub fn new(duration: u64, message: Option<String>, cfg: &Config) -> Self {
        let worklog: Box<dyn WorkLog> = if cfg.log_enabled {
            Box::new(SqliteWorkLog::new(&cfg.database))
        } else {
            Box::new(NullWorkLog)
        };

        Self {
            duration,
            message,
            worklog,
            sound: Sound::from_config(cfg),
        }
    }

    /// Run one full-screen session, then play the chime.
    ///
    /// The work log is opened before the terminal is taken over, so a bad
    /// log path is reported on a normal screen. Termination signals end the
    /// session the same way the quit keys do.
    pub fn run(&mut self) -> AppResult<()> {
        self.worklog.ensure_initialized()?;
        let interrupt = Interrupt::install()?;

        let duration = self.duration;
        let message = self.message.clone();
        let worklog = self.worklog.as_mut();

        TerminalScreen::run(|screen| {
            let clock = InterruptibleClock::new(KeyboardClock, interrupt);
            let mut countdown = Countdown::new(duration, message, clock);
            countdown.add_observer(Renderer::new(screen, BigFont));
            run_session(&mut countdown, worklog)
        })?;

        self.sound.play();
        Ok(())
    }
}
