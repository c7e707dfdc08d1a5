//! Session log: one row per pomodoro, flagged when the session is cut short.
//!
//! Two flavours share the `WorkLog` trait: `SqliteWorkLog` persists to a
//! SQLite file, `NullWorkLog` is used when logging is switched off.

use crate::core::countdown::Countdown;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::Local;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub trait WorkLog {
    /// Make sure the backing store exists. Idempotent.
    fn ensure_initialized(&mut self) -> AppResult<()> {
        Ok(())
    }

    /// Record the start of a session.
    fn start(&mut self, countdown: &Countdown<'_>) -> AppResult<()>;

    /// Flag the most recently started session as finished early.
    /// Does nothing if no session was started.
    fn finish_early(&mut self) -> AppResult<()>;
}

pub struct SqliteWorkLog {
    path: PathBuf,
    pool: Option<DbPool>,
    current_id: Option<i64>,
}

impl SqliteWorkLog {
    pub fn new(path: &str) -> Self {
        Self {
            path: expand_tilde(path),
            pool: None,
            current_id: None,
        }
    }

    /// Id of the session recorded by the last `start`.
    pub fn current_id(&self) -> Option<i64> {
        self.current_id
    }

    fn conn(&mut self) -> AppResult<&Connection> {
        self.ensure_initialized()?;
        self.pool
            .as_ref()
            .map(|p| &p.conn)
            .ok_or_else(|| AppError::Other("work log not initialized".into()))
    }
}

impl WorkLog for SqliteWorkLog {
    fn ensure_initialized(&mut self) -> AppResult<()> {
        if self.pool.is_some() {
            return Ok(());
        }

        let created = !self.path.exists();
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }

        let pool = DbPool::new(&self.path)?;
        init_db(&pool.conn)?;
        if created {
            info!(path = %self.path.display(), "created work log");
        }

        self.pool = Some(pool);
        Ok(())
    }

    fn start(&mut self, countdown: &Countdown<'_>) -> AppResult<()> {
        let conn = self.conn()?;
        let id = queries::insert_pomodoro(conn, &Local::now(), countdown.message())?;
        debug!(id, "session recorded");
        self.current_id = Some(id);
        Ok(())
    }

    fn finish_early(&mut self) -> AppResult<()> {
        let Some(id) = self.current_id else {
            return Ok(());
        };
        queries::mark_finished_early(self.conn()?, id)?;
        info!(id, "session marked as finished early");
        Ok(())
    }
}

/// Logger used with `--no-log`: accepts everything, stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullWorkLog;

impl WorkLog for NullWorkLog {
    fn start(&mut self, _countdown: &Countdown<'_>) -> AppResult<()> {
        Ok(())
    }

    fn finish_early(&mut self) -> AppResult<()> {
        Ok(())
    }
}
