#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use pompom::core::clock::Clock;
use pompom::core::countdown::{Observer, Snapshot};
use pompom::core::urgency::Urgency;
use pompom::errors::{AppError, AppResult};
use pompom::ui::screen::Screen;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;

/// The binary, with HOME pointed at `home` so no real config is touched.
pub fn pom(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("pompom");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

pub fn temp_home() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

/// Clock that never sleeps and counts how often it was asked to.
#[derive(Clone, Default)]
pub struct CountingClock {
    pub waits: Rc<Cell<usize>>,
}

impl Clock for CountingClock {
    fn wait(&mut self, duration: Duration) -> AppResult<()> {
        assert_eq!(duration, Duration::from_secs(1));
        self.waits.set(self.waits.get() + 1);
        Ok(())
    }
}

/// Clock that lets `allowed` ticks through, then reports an interrupt.
pub struct InterruptAfter {
    pub allowed: usize,
}

impl Clock for InterruptAfter {
    fn wait(&mut self, _duration: Duration) -> AppResult<()> {
        if self.allowed == 0 {
            return Err(AppError::Interrupted);
        }
        self.allowed -= 1;
        Ok(())
    }
}

/// Observer that keeps every snapshot it sees.
#[derive(Clone, Default)]
pub struct Recorder {
    pub seen: Rc<RefCell<Vec<(u64, Option<String>)>>>,
}

impl Recorder {
    pub fn remaining(&self) -> Vec<u64> {
        self.seen.borrow().iter().map(|(r, _)| *r).collect()
    }
}

impl Observer for Recorder {
    fn on_update(&mut self, snapshot: Snapshot<'_>) -> AppResult<()> {
        self.seen
            .borrow_mut()
            .push((snapshot.remaining, snapshot.message.map(str::to_owned)));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    pub urgency: Urgency,
    pub blinking: bool,
}

/// In-memory screen of a fixed size.
pub struct FakeScreen {
    pub columns: u16,
    pub rows: u16,
    pub frames: Vec<Frame>,
    pub fail_draws: bool,
}

impl FakeScreen {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            frames: Vec::new(),
            fail_draws: false,
        }
    }

    pub fn last(&self) -> &Frame {
        self.frames.last().expect("at least one frame")
    }
}

impl Screen for FakeScreen {
    fn size(&self) -> AppResult<(u16, u16)> {
        Ok((self.columns, self.rows))
    }

    fn draw(&mut self, frame: &str, urgency: Urgency, blinking: bool) -> AppResult<()> {
        if self.fail_draws {
            return Err(AppError::Terminal(std::io::Error::other("screen gone")));
        }
        self.frames.push(Frame {
            text: frame.to_string(),
            urgency,
            blinking,
        });
        Ok(())
    }
}
