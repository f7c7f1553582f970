//! Error types for SeoLens operations.
//!
//! This module defines the main error type [`SeoLensError`] which represents
//! everything that can go wrong while fetching and reading a page. Callers
//! that only need a flat message (the crawl API) rely on its `Display` output.
//!
//! # Example
//!
//! ```rust
//! use seolens_core::{SeoLensError, Result};
//!
//! fn require_markup(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(SeoLensError::HtmlParseError("empty document".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetch and extraction operations.
///
/// Every variant renders to a human-readable message; the crawl API collapses
/// all of them into `CrawlOutcome::Error { message }` without distinguishing
/// the kind.
#[derive(Error, Debug)]
pub enum SeoLensError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("HTTP status {status} for url ({url})")]
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

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors for file and stdin operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for SeoLensError.
pub type Result<T> = std::result::Result<T, SeoLensError>;
