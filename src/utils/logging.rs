//! Tracing setup.
//!
//! The countdown owns the whole terminal, so events are appended to
//! `pompom.log` in the configuration directory. When that directory does not
//! exist yet, only warnings and errors reach stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "pompom.log";

pub fn init_tracing(config_dir: &Path) {
    let log_file = if config_dir.is_dir() {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(config_dir.join(LOG_FILE_NAME))
            .ok()
    } else {
        None
    };

    // try_init: a second call (e.g. from tests) is a no-op
    let _ = match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("warn"))
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .try_init(),
    };
}
