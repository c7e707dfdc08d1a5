use clap::{Parser, Subcommand};

/// Command-line interface definition for pompom
/// Terminal pomodoro timer with a SQLite work log
#[derive(Parser)]
#[command(
    name = "pompom",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal pomodoro timer: big countdown, urgency colours and a work log",
    long_about = None
)]
pub struct Cli {
    /// Override the work log path
    #[arg(global = true, long = "log", visible_alias = "db", value_name = "PATH")]
    pub db: Option<String>,

    /// Do not record sessions in the work log
    #[arg(global = true, long = "no-log", conflicts_with = "db")]
    pub no_log: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the work log
    Init,

    /// Start a pomodoro (Ctrl+C, q or Esc to stop early)
    #[command(visible_alias = "run")]
    Start {
        /// Duration: seconds (1500), units (25m, 1h30m, 90s) or MM:SS (25:00)
        time: Option<String>,

        #[arg(long, short, help = "What this pomodoro is for")]
        message: Option<String>,
    },

    /// List recorded sessions, newest first
    History {
        #[arg(long, short = 'n', default_value_t = 20, help = "Show at most N sessions")]
        limit: usize,

        #[arg(long = "today", help = "Show only sessions started today")]
        today: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
