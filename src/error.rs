//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! Transcript parsing degrades gracefully: a prefix that looks like a
//! timestamp but fails strict date parsing produces a record with an absent
//! timestamp, and a transcript without any recognized prefixes produces an
//! empty record sequence. Errors are reserved for wholesale problems
//! (unreadable input) and for misconfigured external resources (an empty
//! stop-word list or sentiment lexicon).

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The input is not valid UTF-8 (surfaced by `read_to_string`)
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An external analysis resource was empty.
    ///
    /// Raised when a stop-word list or sentiment lexicon is loaded but
    /// contains no entries. These are caller configuration problems and are
    /// surfaced rather than silently recovered.
    #[error("Empty {resource}: at least one entry is required")]
    EmptyResource {
        /// Name of the offending resource (e.g., "stop-word list")
        resource: &'static str,
    },

    /// CSV writing error.
    ///
    /// This can occur when exporting the record table to CSV.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    ///
    /// This can occur when exporting the record table to JSON or JSONL.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an empty resource error.
    pub fn empty_resource(resource: &'static str) -> Self {
        ChatlensError::EmptyResource { resource }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if this is an empty resource error.
    pub fn is_empty_resource(&self) -> bool {
        matches!(self, ChatlensError::EmptyResource { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
