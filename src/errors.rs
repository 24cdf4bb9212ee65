//! Unified application error type.
//! Every module (db, core, cli, utils) returns AppError so the binary can
//! report failures in one place and map them to an exit code.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before the session was completed")]
    InputClosed,

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Can't open database '{path}': {source}")]
    StorageUnavailable {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Can't initialize the database: {0}")]
    Schema(String),

    #[error("Can't insert the user '{name}': {detail}")]
    Insert { name: String, detail: String },

    #[error("Can't list the users: {0}")]
    Enumerate(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid number of users: {0}")]
    InvalidCount(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
