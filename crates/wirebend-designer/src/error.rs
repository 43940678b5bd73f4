//! Error types for the designer crate.
//!
//! Covers document-level failures of the SVG importer and file access for
//! both importers. Element-level problems are recovered in-band and never
//! surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a drawing.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The SVG text is not well-formed XML.
    #[error("SVG parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document parsed but is not an SVG drawing.
    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    /// A path command string could not be parsed.
    #[error("Malformed path data: {0}")]
    MalformedPath(String),

    /// The file extension is not recognized.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
