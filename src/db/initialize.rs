use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `pomodoros` table if it is missing. Safe to call on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS pomodoros (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            started_at     TEXT NOT NULL,          -- RFC 3339, local time
            message        TEXT,
            finished_early INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_pomodoros_started_at ON pomodoros(started_at);
        "#,
    )?;
    Ok(())
}
