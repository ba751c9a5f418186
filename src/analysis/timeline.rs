//! Time-based activity distributions.
//!
//! All queries here bucket by the derived calendar fields, so records with
//! an absent timestamp are skipped; they never error and never land in a
//! default bucket.
//!
//! Timelines come back in chronological order. Activity maps (weekday,
//! month, hour) come back the way analysts read them: weekday and month
//! counts sorted busiest-first, hourly counts sorted by hour.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::Selection;
use crate::MessageRecord;

/// One month's message count in the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Four-digit year.
    pub year: i32,
    /// Numeric month, 1-12.
    pub month_num: u32,
    /// Full English month name.
    pub month: String,
    /// Messages in that month.
    pub count: usize,
    /// Axis label, e.g. `"January-2024"`.
    pub label: String,
}

/// Message counts per (year, month), chronological.
pub fn monthly_timeline(records: &[MessageRecord], selection: &Selection) -> Vec<MonthlyCount> {
    let mut counts: HashMap<(i32, u32, String), usize> = HashMap::new();

    for record in records.iter().filter(|r| selection.matches(r)) {
        if let (Some(year), Some(month_num), Some(month)) =
            (record.year(), record.month_num(), record.month())
        {
            *counts.entry((year, month_num, month.to_string())).or_default() += 1;
        }
    }

    let mut timeline: Vec<MonthlyCount> = counts
        .into_iter()
        .map(|((year, month_num, month), count)| MonthlyCount {
            label: format!("{month}-{year}"),
            year,
            month_num,
            month,
            count,
        })
        .collect();

    timeline.sort_by_key(|m| (m.year, m.month_num));
    timeline
}

/// Message counts per calendar date, chronological.
pub fn daily_timeline(
    records: &[MessageRecord],
    selection: &Selection,
) -> Vec<(NaiveDate, usize)> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();

    for record in records.iter().filter(|r| selection.matches(r)) {
        if let Some(date) = record.only_date() {
            *counts.entry(date).or_default() += 1;
        }
    }

    let mut timeline: Vec<(NaiveDate, usize)> = counts.into_iter().collect();
    timeline.sort_by_key(|&(date, _)| date);
    timeline
}

/// Message counts per weekday name, busiest first.
pub fn week_activity(records: &[MessageRecord], selection: &Selection) -> Vec<(String, usize)> {
    activity_counts(records, selection, |r| r.day_name().map(str::to_string))
}

/// Message counts per month name, busiest first.
pub fn month_activity(records: &[MessageRecord], selection: &Selection) -> Vec<(String, usize)> {
    activity_counts(records, selection, |r| r.month().map(str::to_string))
}

/// Message counts per hour of day, sorted by hour.
pub fn hourly_activity(records: &[MessageRecord], selection: &Selection) -> Vec<(u32, usize)> {
    let mut counts: HashMap<u32, usize> = HashMap::new();

    for record in records.iter().filter(|r| selection.matches(r)) {
        if let Some(hour) = record.hour() {
            *counts.entry(hour).or_default() += 1;
        }
    }

    let mut table: Vec<(u32, usize)> = counts.into_iter().collect();
    table.sort_by_key(|&(hour, _)| hour);
    table
}

fn activity_counts(
    records: &[MessageRecord],
    selection: &Selection,
    key: impl Fn(&MessageRecord) -> Option<String>,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records.iter().filter(|r| selection.matches(r)) {
        if let Some(k) = key(record) {
            *counts.entry(k).or_default() += 1;
        }
    }

    let mut table: Vec<(String, usize)> = counts.into_iter().collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    table
}

/// Weekday x period pivot of message counts, for time-of-day heatmaps.
///
/// Rows are the weekdays observed in the selection, in Monday-first
/// chronological order; columns are the observed period labels sorted by
/// their starting hour. Cells without messages hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// Row labels: weekday names, Monday first.
    pub day_names: Vec<String>,
    /// Column labels: period buckets, ordered by starting hour.
    pub periods: Vec<String>,
    /// `counts[row][col]` is the message count for that weekday and period.
    pub counts: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    /// Returns the count for a weekday/period pair, zero if either label is
    /// not part of the pivot.
    pub fn get(&self, day_name: &str, period: &str) -> usize {
        let Some(row) = self.day_names.iter().position(|d| d == day_name) else {
            return 0;
        };
        let Some(col) = self.periods.iter().position(|p| p == period) else {
            return 0;
        };
        self.counts[row][col]
    }

    /// Returns `true` if the pivot has no cells.
    pub fn is_empty(&self) -> bool {
        self.day_names.is_empty()
    }
}

/// Fixed weekday ordering for heatmap rows.
const WEEKDAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Pivots message counts by (weekday, period) for a selection.
///
/// Records without timestamps are excluded. An empty selection produces an
/// empty pivot rather than an error.
pub fn activity_heatmap(records: &[MessageRecord], selection: &Selection) -> ActivityHeatmap {
    let mut cells: HashMap<(String, String), usize> = HashMap::new();

    for record in records.iter().filter(|r| selection.matches(r)) {
        if let (Some(day), Some(period)) = (record.day_name(), record.period()) {
            *cells.entry((day.to_string(), period.to_string())).or_default() += 1;
        }
    }

    let day_names: Vec<String> = WEEKDAY_ORDER
        .iter()
        .filter(|day| cells.keys().any(|(d, _)| d == *day))
        .map(|day| (*day).to_string())
        .collect();

    let mut periods: Vec<String> = cells
        .keys()
        .map(|(_, p)| p.clone())
        .collect::<std::collections::HashSet<_>>()
        .into_iter()
        .collect();
    periods.sort_by_key(|p| period_start_hour(p));

    let counts = day_names
        .iter()
        .map(|day| {
            periods
                .iter()
                .map(|period| {
                    cells
                        .get(&(day.clone(), period.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    ActivityHeatmap {
        day_names,
        periods,
        counts,
    }
}

/// Starting hour encoded in a period label (`"9-10"` → 9, `"23-00"` → 23).
fn period_start_hour(period: &str) -> u32 {
    period
        .split('-')
        .next()
        .and_then(|h| h.parse().ok())
        .unwrap_or(0)
}
