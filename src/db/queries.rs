use crate::db::models::PomodoroRecord;
use crate::errors::AppResult;
use chrono::{DateTime, Local};
use rusqlite::{Connection, Result, Row, params};

/// Insert a freshly started session; returns the id assigned by SQLite.
pub fn insert_pomodoro(
    conn: &Connection,
    started_at: &DateTime<Local>,
    message: Option<&str>,
) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO pomodoros (started_at, message, finished_early)
         VALUES (?1, ?2, 0)",
    )?;
    stmt.execute(params![started_at.to_rfc3339(), message])?;
    Ok(conn.last_insert_rowid())
}

/// Flag a session as interrupted. Returns the number of rows touched.
pub fn mark_finished_early(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE pomodoros SET finished_early = 1 WHERE id = ?1",
        params![id],
    )?;
    Ok(n)
}

pub fn find_pomodoro(conn: &Connection, id: i64) -> AppResult<Option<PomodoroRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, started_at, message, finished_early FROM pomodoros WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map([id], map_row)?;
    Ok(rows.next().transpose()?)
}

/// Load sessions newest first, optionally limited and/or restricted to
/// those started at or after `since`.
pub fn load_pomodoros(
    conn: &Connection,
    limit: Option<usize>,
    since: Option<&DateTime<Local>>,
) -> AppResult<Vec<PomodoroRecord>> {
    let mut sql = String::from("SELECT id, started_at, message, finished_early FROM pomodoros");
    let mut args: Vec<String> = Vec::new();

    if let Some(s) = since {
        sql.push_str(" WHERE started_at >= ?");
        args.push(s.to_rfc3339());
    }
    sql.push_str(" ORDER BY id DESC");
    if let Some(l) = limit {
        sql.push_str(&format!(" LIMIT {l}"));
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<PomodoroRecord> {
    let raw: String = row.get("started_at")?;
    let started_at = DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(PomodoroRecord {
        id: row.get("id")?,
        started_at,
        message: row.get("message")?,
        finished_early: row.get("finished_early")?,
    })
}
