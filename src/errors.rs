//! Unified application error type.
//! Core, db, export and cli all return AppError so callers see one taxonomy:
//! nothing is retried internally and nothing is swallowed.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Operation rejected: {0}")]
    Conflict(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid stamp kind: {0}")]
    InvalidEventType(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Attendance core
    // ---------------------------
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Upstream data fetch failed: {0}")]
    UpstreamFetchFailed(Box<AppError>),

    // ---------------------------
    // Identity
    // ---------------------------
    #[error("Authentication failed: wrong employee code or PIN")]
    AuthenticationFailed,

    #[error("Not allowed: {0}")]
    Unauthorized(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export failed: {0}")]
    ExportFailed(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        AppError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound(what.into())
    }

    pub fn export<E: std::fmt::Display>(e: E) -> Self {
        AppError::ExportFailed(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
