//! pompom library root.
//! Exposes the CLI parser, the high-level run() function and the timer internals
//! (countdown, urgency policy, renderer, work log).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics go to ~/.pompom/pompom.log, the screen belongs to the timer
    utils::logging::init_tracing(&Config::config_dir());

    // 3️⃣ load config once
    let mut cfg = Config::load()?;

    // 4️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if cli.no_log {
        cfg.log_enabled = false;
    }

    dispatch(&cli, &cfg)
}
