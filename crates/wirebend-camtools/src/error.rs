//! Error types for the CAM tools crate.
//!
//! Angle infeasibility is not an error here; it is reported through
//! [`wirebend_core::ConversionResult::Failure`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use wirebend_designer::ImportError;

/// Errors that can occur while running a conversion pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The drawing could not be imported.
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    /// The file extension is not recognized.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
