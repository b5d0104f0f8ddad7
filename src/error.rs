//! Error types for job loading and input parsing.
//!
//! The calculator itself never fails; these errors only come from the input
//! surfaces (job files and size strings).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the calculator's input layer.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid numeric value at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Invalid size '{value}': expected WIDTHxHEIGHT (e.g. 65x100)")]
    InvalidSize { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
