use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::worklog::{SqliteWorkLog, WorkLog};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite work log and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing pompom…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Work log    : {}", db_path.display());

    let mut worklog = SqliteWorkLog::new(&db_path.to_string_lossy());
    worklog.ensure_initialized()?;

    success("pompom initialization completed!");
    Ok(())
}
