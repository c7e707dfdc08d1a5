use chrono::{DateTime, Local};

/// One row of the `pomodoros` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroRecord {
    pub id: i64,
    pub started_at: DateTime<Local>,
    pub message: Option<String>,
    pub finished_early: bool,
}
