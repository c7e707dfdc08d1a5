//! Unified application error type.
//! Every layer (config, db, core, ui) returns AppError so failures are
//! classified once, at the boundary where they happen.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Work log store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Terminal
    // ---------------------------
    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),

    // ---------------------------
    // Cancellation
    // ---------------------------
    #[error("Interrupted")]
    Interrupted,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted => 130,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
