//! Unified application error type.
//! All modules (models, core, render, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

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
    // Ingestion (trip response)
    // ---------------------------
    #[error("Malformed trip response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown duty status '{value}' on schedule entry #{index}")]
    InvalidStatus { index: usize, value: String },

    #[error("Schedule entry #{index} ends before it starts ({start} -> {end})")]
    InvalidInterval {
        index: usize,
        start: String,
        end: String,
    },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("No trip data loaded: pass a trip response with --input <FILE> (or '-' for stdin)")]
    NoData,

    #[error("Day {0} not found in the schedule")]
    DayNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Background image could not be loaded: {0}")]
    Image(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Export failed: there was an error exporting your logs ({0})")]
    ExportFailed(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
