//! Calendar and time-of-day feature derivation.
//!
//! Every parsed timestamp is expanded once, at record creation, into the
//! calendar fields the analysis layer groups by: date, year, month, day,
//! weekday, hour, minute, and the hourly activity *period* bucket used for
//! heatmap pivoting.
//!
//! Derivation is a pure function of the timestamp: deriving twice from the
//! same timestamp always yields identical fields. Records without a
//! timestamp carry no derived fields at all.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Calendar/time fields derived from a message timestamp.
///
/// Field names double as column names in the exported record table.
/// Month and weekday names are full English names (`"January"`, `"Monday"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Calendar date without the time component.
    pub only_date: NaiveDate,
    /// Four-digit year.
    pub year: i32,
    /// Numeric month, 1-12.
    pub month_num: u32,
    /// Full English month name.
    pub month: String,
    /// Day of month, 1-31.
    pub day: u32,
    /// Full English weekday name.
    pub day_name: String,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Activity period bucket, see [`period_label`].
    pub period: String,
}

impl TimeFeatures {
    /// Derives all calendar/time fields from a timestamp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::features::TimeFeatures;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
    ///     .unwrap()
    ///     .and_hms_opt(9, 5, 0)
    ///     .unwrap();
    /// let features = TimeFeatures::from_timestamp(ts);
    ///
    /// assert_eq!(features.year, 2024);
    /// assert_eq!(features.month, "January");
    /// assert_eq!(features.day_name, "Monday");
    /// assert_eq!(features.period, "9-10");
    /// ```
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            only_date: ts.date(),
            year: ts.year(),
            month_num: ts.month(),
            month: ts.format("%B").to_string(),
            day: ts.day(),
            day_name: ts.format("%A").to_string(),
            hour: ts.hour(),
            minute: ts.minute(),
            period: period_label(ts.hour()),
        }
    }
}

/// Returns the activity period label for an hour of day.
///
/// The labeling is intentionally irregular at the day boundaries and carries
/// no zero padding elsewhere:
///
/// - hour 23 → `"23-00"`
/// - hour 0 → `"00-1"`
/// - any other hour h → `"{h}-{h+1}"` (e.g. `"9-10"`, `"12-13"`)
///
/// Downstream heatmaps group by these exact strings, so the labels are part
/// of the stable output contract.
pub fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{h}-{}", h + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_period_label_boundaries() {
        assert_eq!(period_label(0), "00-1");
        assert_eq!(period_label(23), "23-00");
        assert_eq!(period_label(12), "12-13");
        assert_eq!(period_label(9), "9-10");
        assert_eq!(period_label(1), "1-2");
        assert_eq!(period_label(22), "22-23");
    }

    #[test]
    fn test_from_timestamp() {
        let features = TimeFeatures::from_timestamp(ts(2024, 1, 1, 9, 5));
        assert_eq!(features.only_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(features.year, 2024);
        assert_eq!(features.month_num, 1);
        assert_eq!(features.month, "January");
        assert_eq!(features.day, 1);
        assert_eq!(features.day_name, "Monday");
        assert_eq!(features.hour, 9);
        assert_eq!(features.minute, 5);
        assert_eq!(features.period, "9-10");
    }

    #[test]
    fn test_from_timestamp_midnight() {
        let features = TimeFeatures::from_timestamp(ts(2024, 6, 15, 0, 0));
        assert_eq!(features.hour, 0);
        assert_eq!(features.period, "00-1");
        assert_eq!(features.day_name, "Saturday");
    }

    #[test]
    fn test_from_timestamp_late_evening() {
        let features = TimeFeatures::from_timestamp(ts(2024, 12, 31, 23, 59));
        assert_eq!(features.period, "23-00");
        assert_eq!(features.month, "December");
        assert_eq!(features.minute, 59);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let t = ts(2024, 3, 10, 14, 30);
        assert_eq!(
            TimeFeatures::from_timestamp(t),
            TimeFeatures::from_timestamp(t)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let features = TimeFeatures::from_timestamp(ts(2024, 1, 1, 9, 5));
        let json = serde_json::to_string(&features).unwrap();
        assert!(json.contains("\"only_date\":\"2024-01-01\""));
        assert!(json.contains("\"period\":\"9-10\""));
        let parsed: TimeFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, features);
    }
}
