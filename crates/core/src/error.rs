//! Error types for Lexometer operations.
//!
//! This module defines the main error type [`LexometerError`] which represents
//! all possible errors that can occur while reading record tables, fetching
//! and extracting articles, loading lexicons, and computing metrics.
//!
//! # Example
//!
//! ```rust
//! use lexometer_core::{LexometerError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(LexometerError::EmptyDocument("no text".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extraction and analysis operations.
#[derive(Error, Debug)]
pub enum LexometerError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} returned for {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No element matched the title selector.
    #[error("No title element matching `{0}`")]
    MissingTitle(String),

    /// No element matched the article body selector.
    #[error("Content not found (no element matching `{0}`)")]
    ContentNotFound(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read and write errors.
    #[error("I/O error: {0}")]
    WriteError(#[from] std::io::Error),

    /// The record table could not be read.
    #[error("Failed to read input table: {0}")]
    InputError(String),

    /// The record table lacks a required column.
    #[error("Input table has no `{0}` column")]
    MissingColumn(String),

    /// A lexicon file could not be loaded.
    #[error("Lexicon error: {0}")]
    LexiconError(String),

    /// The document has no sentences or no words left after cleaning,
    /// so per-word and per-sentence averages are undefined.
    #[error("Document has nothing to measure: {0}")]
    EmptyDocument(String),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for LexometerError.
pub type Result<T> = std::result::Result<T, LexometerError>;
