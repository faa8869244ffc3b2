//! Unified application error type.
//! Every layer (db, store, query, cli) returns AppError so error handling
//! stays consistent across the crate.

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

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid visibility code: {0}")]
    InvalidVisibility(String),

    #[error("Invalid share target: {0}")]
    InvalidShareTarget(String),

    // ---------------------------
    // Lookup / lifecycle
    // ---------------------------
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Location unavailable")]
    LocationUnavailable,

    // ---------------------------
    // Storage mirror
    // ---------------------------
    #[error("Persistence failure: {0}")]
    Persistence(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
