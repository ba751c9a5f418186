//! The structured message record produced by transcript parsing.
//!
//! This module provides [`MessageRecord`], one structured, attributed,
//! timestamped chat entry (or system notification). The parser emits records
//! in transcript order, one per recognized timestamp prefix, and the analysis
//! layer consumes the sequence read-only.
//!
//! # Overview
//!
//! A record consists of:
//! - **Always present**: `sender` and `body`
//! - **Optional**: `timestamp`, plus the calendar fields derived from it
//!
//! Lines with no human author (group created, user added, encryption notice)
//! are attributed to the [`GROUP_NOTIFICATION`] sentinel sender.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let record = MessageRecord::new("Alice", "Hello, world!");
//! assert_eq!(record.sender(), "Alice");
//! assert_eq!(record.body(), "Hello, world!");
//! assert!(record.timestamp().is_none());
//! ```
//!
//! ## Serialization
//!
//! Records serialize as one row of the tabular output, under the column
//! names `date`, `user`, `message` plus the derived columns:
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let record = MessageRecord::new("Alice", "Hello!");
//! let json = serde_json::to_string(&record)?;
//!
//! assert!(json.contains("\"user\":\"Alice\""));
//! assert!(json.contains("\"message\":\"Hello!\""));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::features::TimeFeatures;

/// Sentinel sender for transcript lines with no human author.
///
/// System/service lines (group creation, membership changes, the encryption
/// notice) have no `"Name: "` prefix; the segmenter attributes them to this
/// sentinel instead of a participant.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// One structured, attributed, timestamped chat entry.
///
/// This struct is the core data type in chatlens. The parser converts each
/// recognized transcript segment into one record; all aggregate views are
/// computed over an ordered `&[MessageRecord]` slice.
///
/// # Fields
///
/// | Field | Column | Type | Description |
/// |-------|--------|------|-------------|
/// | `timestamp` | `date` | `Option<NaiveDateTime>` | When the message was sent, if the prefix parsed |
/// | `sender` | `user` | `String` | Participant name, or [`GROUP_NOTIFICATION`] |
/// | `body` | `message` | `String` | Trimmed message text |
/// | `derived` | several | `Option<TimeFeatures>` | Calendar fields, present iff `timestamp` is |
///
/// The derived fields are computed exactly once, at construction, and are
/// flattened into the serialized row (`only_date`, `year`, `month_num`,
/// `month`, `day`, `day_name`, `hour`, `minute`, `period`).
///
/// # Absent timestamps
///
/// A prefix that matches the timestamp pattern but fails strict date parsing
/// (say, day 32) yields `timestamp: None`; every derived field is then absent
/// too. Absence is modeled with `Option`, never with a sentinel date, so
/// time-bucketed aggregations can skip such records type-safely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, if the timestamp prefix parsed.
    #[serde(rename = "date")]
    pub timestamp: Option<NaiveDateTime>,

    /// Participant name, or the [`GROUP_NOTIFICATION`] sentinel.
    #[serde(rename = "user")]
    pub sender: String,

    /// Trimmed message text.
    ///
    /// May contain newlines for multiline messages, and may equal the
    /// media placeholder (`<Media omitted>`) for attachment stand-ins.
    #[serde(rename = "message")]
    pub body: String,

    /// Calendar/time fields derived from `timestamp` at construction.
    #[serde(flatten)]
    pub derived: Option<TimeFeatures>,
}

impl MessageRecord {
    /// Creates a record with no timestamp.
    ///
    /// All derived fields are absent.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            sender: sender.into(),
            body: body.into(),
            derived: None,
        }
    }

    /// Creates a record from a possibly-absent timestamp.
    ///
    /// Derived calendar fields are computed here, once; they are never
    /// recomputed later.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::MessageRecord;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
    ///     .unwrap()
    ///     .and_hms_opt(9, 5, 0);
    /// let record = MessageRecord::with_timestamp("Alice", "Hello", ts);
    ///
    /// assert_eq!(record.year(), Some(2024));
    /// assert_eq!(record.period(), Some("9-10"));
    /// ```
    pub fn with_timestamp(
        sender: impl Into<String>,
        body: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            derived: timestamp.map(TimeFeatures::from_timestamp),
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Creates a system notification record.
    pub fn notification(body: impl Into<String>, timestamp: Option<NaiveDateTime>) -> Self {
        Self::with_timestamp(GROUP_NOTIFICATION, body, timestamp)
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp, if the prefix parsed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the calendar date, if the timestamp is present.
    pub fn only_date(&self) -> Option<NaiveDate> {
        self.derived.as_ref().map(|d| d.only_date)
    }

    /// Returns the year, if the timestamp is present.
    pub fn year(&self) -> Option<i32> {
        self.derived.as_ref().map(|d| d.year)
    }

    /// Returns the numeric month (1-12), if the timestamp is present.
    pub fn month_num(&self) -> Option<u32> {
        self.derived.as_ref().map(|d| d.month_num)
    }

    /// Returns the full English month name, if the timestamp is present.
    pub fn month(&self) -> Option<&str> {
        self.derived.as_ref().map(|d| d.month.as_str())
    }

    /// Returns the day of month, if the timestamp is present.
    pub fn day(&self) -> Option<u32> {
        self.derived.as_ref().map(|d| d.day)
    }

    /// Returns the full English weekday name, if the timestamp is present.
    pub fn day_name(&self) -> Option<&str> {
        self.derived.as_ref().map(|d| d.day_name.as_str())
    }

    /// Returns the hour of day (0-23), if the timestamp is present.
    pub fn hour(&self) -> Option<u32> {
        self.derived.as_ref().map(|d| d.hour)
    }

    /// Returns the minute, if the timestamp is present.
    pub fn minute(&self) -> Option<u32> {
        self.derived.as_ref().map(|d| d.minute)
    }

    /// Returns the activity period label, if the timestamp is present.
    pub fn period(&self) -> Option<&str> {
        self.derived.as_ref().map(|d| d.period.as_str())
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if this record is a system notification.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if this record's body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
