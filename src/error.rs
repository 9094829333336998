//! Error types for loading and planning trim jobs.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the planner.
///
/// The geometry, optimization and summary stages never fail; only the edges
/// that touch files or user-supplied job data produce these.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("No valid openings entered")]
    NoOpenings,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
