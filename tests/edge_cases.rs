//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions of the transcript format that
//! might not be covered by regular unit and integration tests.

use chatlens::prelude::*;

fn parse(input: &str) -> Vec<MessageRecord> {
    TranscriptParser::new().parse_str(input)
}

// =========================================================================
// Degenerate inputs
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
}

#[test]
fn test_input_without_any_headers() {
    let records = parse("This file was exported from somewhere.\nIt has no dated lines.\n");
    assert!(records.is_empty());
}

#[test]
fn test_zero_records_handled_by_every_aggregation() {
    let records: Vec<MessageRecord> = vec![];
    let stop = StopWords::from_text("the").unwrap();

    assert_eq!(fetch_stats(&records, &Selection::Overall).messages, 0);
    assert!(most_busy_users(&records, 5).is_empty());
    assert!(word_frequencies(&records, &Selection::Overall, &stop).is_empty());
    assert!(emoji_counts(&records, &Selection::Overall).is_empty());
    assert!(monthly_timeline(&records, &Selection::Overall).is_empty());
    assert!(daily_timeline(&records, &Selection::Overall).is_empty());
    assert!(week_activity(&records, &Selection::Overall).is_empty());
    assert!(month_activity(&records, &Selection::Overall).is_empty());
    assert!(hourly_activity(&records, &Selection::Overall).is_empty());
    assert!(activity_heatmap(&records, &Selection::Overall).is_empty());

    let summary = sentiment_summary(&records, &Selection::Overall, &LexiconScorer::new());
    assert!(summary.messages.is_empty());
}

#[test]
fn test_preamble_before_first_header_is_discarded() {
    let records = parse(
        "Chat export\nwith two preamble lines\n01/01/24, 09:05 am - Alice: Hello\n",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body(), "Hello");
}

// =========================================================================
// Timestamp degradation
// =========================================================================

#[test]
fn test_impossible_date_degrades_to_absent_timestamp() {
    let records = parse("32/01/24, 09:05 am - Alice: still a record\n");
    assert_eq!(records.len(), 1);
    assert!(records[0].timestamp().is_none());
    assert!(records[0].only_date().is_none());
    assert!(records[0].year().is_none());
    assert!(records[0].period().is_none());
    assert_eq!(records[0].sender(), "Alice");
    assert_eq!(records[0].body(), "still a record");
}

#[test]
fn test_impossible_date_does_not_abort_following_records() {
    let records = parse(
        "31/02/24, 09:05 am - Alice: bad\n01/03/24, 09:06 am - Bob: good\n",
    );
    assert_eq!(records.len(), 2);
    assert!(records[0].timestamp().is_none());
    assert!(records[1].timestamp().is_some());
}

#[test]
fn test_four_digit_year_matches_but_does_not_parse() {
    let records = parse("01/01/2024, 09:05 am - Alice: Hello\n");
    assert_eq!(records.len(), 1);
    assert!(records[0].timestamp().is_none());
}

#[test]
fn test_absent_timestamp_excluded_from_time_buckets() {
    let records = parse(
        "32/01/24, 09:05 am - Alice: bad date\n01/01/24, 09:06 am - Alice: good date\n",
    );

    assert_eq!(records.len(), 2);
    assert_eq!(daily_timeline(&records, &Selection::Overall).len(), 1);

    let heatmap = activity_heatmap(&records, &Selection::Overall);
    let total: usize = heatmap.counts.iter().flatten().sum();
    assert_eq!(total, 1);
}

// =========================================================================
// Unicode whitespace normalization
// =========================================================================

#[test]
fn test_narrow_no_break_space_normalizes_like_ascii_space() {
    let plain = parse("01/01/24, 09:05 am - Alice: Hi\n");
    let narrow = parse("01/01/24, 09:05\u{202f}am - Alice: Hi\n");

    assert_eq!(plain.len(), 1);
    assert_eq!(narrow.len(), 1);
    assert_eq!(plain[0].timestamp(), narrow[0].timestamp());
    assert_eq!(plain[0].period(), narrow[0].period());
}

#[test]
fn test_non_breaking_space_normalizes_like_ascii_space() {
    let plain = parse("01/01/24, 09:05 am - Alice: Hi\n");
    let nbsp = parse("01/01/24,\u{a0}09:05\u{a0}am - Alice: Hi\n");

    assert_eq!(nbsp.len(), 1);
    assert_eq!(plain[0].timestamp(), nbsp[0].timestamp());
}

// =========================================================================
// Sender/body attribution edges
// =========================================================================

#[test]
fn test_no_delimiter_is_notification() {
    let records = parse("01/01/24, 09:05 am - Alice added Bob\n");
    assert_eq!(records[0].sender(), GROUP_NOTIFICATION);
    assert_eq!(records[0].body(), "Alice added Bob");
}

#[test]
fn test_known_ambiguity_colon_space_in_body() {
    // The second ": " is also consumed by the split and the parts are
    // rejoined with spaces; the inner delimiter is lost. Accepted behavior.
    let records = parse("01/01/24, 09:05 am - Alice: reminder: buy milk\n");
    assert_eq!(records[0].sender(), "Alice");
    assert_eq!(records[0].body(), "reminder buy milk");
}

#[test]
fn test_colon_without_following_space_is_kept() {
    let records = parse("01/01/24, 09:05 am - Alice: meet at 09:30 sharp\n");
    assert_eq!(records[0].sender(), "Alice");
    // ":" not followed by whitespace is not a delimiter.
    assert_eq!(records[0].body(), "meet at 09:30 sharp");
}

#[test]
fn test_round_trip_reconstruction() {
    let records = parse("01/01/24, 09:05 am - Alice: Hello there\n");
    let rebuilt = format!("{}: {}", records[0].sender(), records[0].body());
    assert_eq!(rebuilt, "Alice: Hello there");
}

#[test]
fn test_unicode_sender_and_body() {
    let records = parse("01/01/24, 09:05 am - Иван: Привет мир!\n");
    assert_eq!(records[0].sender(), "Иван");
    assert_eq!(records[0].body(), "Привет мир!");

    let records = parse("01/01/24, 09:05 am - 田中太郎: こんにちは 😂\n");
    assert_eq!(records[0].sender(), "田中太郎");
}

#[test]
fn test_body_trimmed_but_inner_whitespace_kept() {
    let records = parse("01/01/24, 09:05 am - Alice:   padded   body  \n");
    assert_eq!(records[0].body(), "padded   body");
}

// =========================================================================
// Period boundaries
// =========================================================================

#[test]
fn test_period_boundaries_through_parser() {
    let records = parse(
        "01/01/24, 12:10 am - Alice: midnight\n\
         01/01/24, 11:59 pm - Alice: late\n\
         01/01/24, 12:30 pm - Alice: noon\n",
    );

    assert_eq!(records[0].period(), Some("00-1"));
    assert_eq!(records[1].period(), Some("23-00"));
    assert_eq!(records[2].period(), Some("12-13"));
}

#[test]
fn test_period_label_directly() {
    assert_eq!(period_label(0), "00-1");
    assert_eq!(period_label(23), "23-00");
    assert_eq!(period_label(12), "12-13");
    assert_eq!(period_label(9), "9-10");
}

// =========================================================================
// Very long content
// =========================================================================

#[test]
fn test_very_long_body() {
    let long_body = "x".repeat(10 * 1024);
    let transcript = format!("01/01/24, 09:05 am - Alice: {long_body}\n");
    let records = parse(&transcript);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body().len(), 10 * 1024);
}

#[test]
fn test_many_records() {
    let mut transcript = String::new();
    for i in 0..1_000 {
        transcript.push_str(&format!(
            "{:02}/01/24, 09:{:02} am - Alice: message {}\n",
            i % 28 + 1,
            i % 60,
            i
        ));
    }

    let records = parse(&transcript);
    assert_eq!(records.len(), 1_000);
    assert!(records.iter().all(|r| r.timestamp().is_some()));
}
