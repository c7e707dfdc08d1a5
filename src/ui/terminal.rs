//! Full-screen terminal backed by crossterm.
//!
//! `TerminalScreen::run` owns raw mode and the alternate screen for the length
//! of one closure. The terminal is restored on every way out: normal return,
//! error, or panic unwinding (through `Drop`).

use crate::core::clock::Clock;
use crate::core::urgency::Urgency;
use crate::errors::{AppError, AppResult};
use crate::ui::screen::Screen;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct TerminalScreen {
    out: Stdout,
    active: bool,
}

impl TerminalScreen {
    /// Acquire the terminal, run `f`, release the terminal.
    pub fn run<T, F>(f: F) -> AppResult<T>
    where
        F: FnOnce(&mut TerminalScreen) -> AppResult<T>,
    {
        let mut screen = Self::acquire()?;
        let result = f(&mut screen);
        screen.release();
        result
    }

    fn acquire() -> AppResult<Self> {
        terminal::enable_raw_mode().map_err(AppError::Terminal)?;

        // From here on Drop undoes whatever was switched on.
        let mut screen = Self {
            out: io::stdout(),
            active: true,
        };
        execute!(screen.out, EnterAlternateScreen, cursor::Hide).map_err(AppError::Terminal)?;
        debug!("terminal acquired");
        Ok(screen)
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        let _ = execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::Show,
            LeaveAlternateScreen
        );
        // raw mode goes last
        let _ = terminal::disable_raw_mode();
        let _ = self.out.flush();
        debug!("terminal released");
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        self.release();
    }
}

fn colour_for(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Normal => Color::Green,
        Urgency::Warning => Color::Yellow,
        Urgency::Critical => Color::Red,
    }
}

impl Screen for TerminalScreen {
    fn size(&self) -> AppResult<(u16, u16)> {
        terminal::size().map_err(AppError::Terminal)
    }

    fn draw(&mut self, frame: &str, urgency: Urgency, blinking: bool) -> AppResult<()> {
        let text_style = if blinking {
            Attribute::SlowBlink
        } else {
            Attribute::NoBlink
        };

        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetForegroundColor(colour_for(urgency)),
            SetBackgroundColor(Color::Black),
            SetAttribute(text_style)
        )
        .map_err(AppError::Terminal)?;

        // raw mode: no implicit carriage return on '\n'
        for line in frame.lines() {
            queue!(self.out, Print(line), cursor::MoveToNextLine(1))
                .map_err(AppError::Terminal)?;
        }

        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor).map_err(AppError::Terminal)?;
        self.out.flush().map_err(AppError::Terminal)
    }
}

/// One-second waits that listen to the keyboard.
///
/// Raw mode swallows SIGINT, so Ctrl+C arrives as a key press. Ctrl+C, `q`
/// and Esc end the wait with `AppError::Interrupted`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardClock;

impl KeyboardClock {
    fn is_interrupt(key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Char('q') | KeyCode::Esc => true,
            _ => false,
        }
    }
}

impl Clock for KeyboardClock {
    fn wait(&mut self, duration: Duration) -> AppResult<()> {
        let deadline = Instant::now() + duration;

        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Ok(());
            }
            if !event::poll(left).map_err(AppError::Terminal)? {
                continue;
            }
            if let Event::Key(key) = event::read().map_err(AppError::Terminal)?
                && Self::is_interrupt(&key)
            {
                debug!("interrupt key pressed");
                return Err(AppError::Interrupted);
            }
        }
    }
}
