//! Filter records by date range and user.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering record collections before analysis.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | User | [`with_user`](FilterConfig::with_user) | Records from one participant |
//!
//! # Behavior Notes
//!
//! - Records without timestamps are **excluded** when date filters are active
//! - User matching is exact (the per-analysis [`Selection`](super::Selection)
//!   has the same semantics)
//! - Multiple filters are combined with AND logic
//!
//! # Examples
//!
//! ```
//! use chatlens::analysis::{FilterConfig, apply_filters};
//! use chatlens::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("Alice", "Hello"),
//!     MessageRecord::new("Bob", "Hi there"),
//!     MessageRecord::new("Alice", "How are you?"),
//! ];
//!
//! let config = FilterConfig::new().with_user("Alice");
//! let filtered = apply_filters(records, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```

use chrono::{NaiveDate, NaiveDateTime};

use crate::MessageRecord;
use crate::error::{ChatlensError, Result};

/// Configuration for filtering records by date and user.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this participant (exact match).
    pub user: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive).
    ///
    /// Only records on or after this date will be included.
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let naive = parse_filter_date(date_str)?;
        self.after = naive.and_hms_opt(0, 0, 0);
        Ok(self)
    }

    /// Sets the end date filter (inclusive).
    ///
    /// Only records on or before this date will be included.
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let naive = parse_filter_date(date_str)?;
        // End of the day to include the full day
        self.before = naive.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    /// Sets the user filter (exact match).
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.user.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the user filter is active.
    pub fn has_user_filter(&self) -> bool {
        self.user.is_some()
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_filter_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Filters a collection of records based on the provided configuration.
///
/// Returns a new vector containing only records that match all active
/// filters. If no filters are active, returns the original records
/// unchanged.
///
/// # Filter Behavior
///
/// - **User filter**: exact name match
/// - **Date filters**: records without timestamps are excluded
/// - **Multiple filters**: combined with AND logic
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            if let Some(ref user) = config.user {
                if record.sender != *user {
                    return false;
                }
            }

            if config.has_date_filter() {
                match record.timestamp {
                    Some(ts) => {
                        if config.after.is_some_and(|after| ts < after) {
                            return false;
                        }
                        if config.before.is_some_and(|before| ts > before) {
                            return false;
                        }
                    }
                    None => {
                        // No timestamp - exclude from date-filtered results
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}
