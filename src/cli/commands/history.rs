use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::models::PomodoroRecord;
use crate::db::pool::DbPool;
use crate::db::queries::load_pomodoros;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use ansi_term::Colour;
use chrono::{DateTime, Local};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { limit, today } = cmd {
        if !cfg.log_enabled {
            info("Work log is disabled, no sessions recorded.");
            return Ok(());
        }

        let path = expand_tilde(&cfg.database);
        if !path.exists() {
            info("No sessions recorded yet.");
            return Ok(());
        }

        let pool = DbPool::open_read_only(&path)?;
        let since = if *today { start_of_today() } else { None };
        let records = load_pomodoros(&pool.conn, Some(*limit), since.as_ref())?;

        if records.is_empty() {
            info("No sessions recorded yet.");
            return Ok(());
        }

        print_records(&records);
    }
    Ok(())
}

fn start_of_today() -> Option<DateTime<Local>> {
    Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(Local)
        .earliest()
}

fn print_records(records: &[PomodoroRecord]) {
    let id_w = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    println!("🍅 Sessions:\n");

    for r in records {
        let status = if r.finished_early {
            Colour::Red.paint(format!("{:<11}", "interrupted"))
        } else {
            Colour::Green.paint(format!("{:<11}", "completed"))
        };

        println!(
            "{:>id_w$}: {} | {} | {}",
            r.id,
            r.started_at.format("%Y-%m-%d %H:%M"),
            status,
            r.message.as_deref().unwrap_or("-"),
            id_w = id_w
        );
    }

    let interrupted = records.iter().filter(|r| r.finished_early).count();
    println!(
        "\n{} sessions: {} completed, {} interrupted",
        records.len(),
        records.len() - interrupted,
        interrupted
    );
}
