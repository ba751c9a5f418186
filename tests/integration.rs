//! Integration tests: full parse-and-analyze runs over realistic transcripts.

use chatlens::prelude::*;

/// A small but realistic export: several participants, a notification, a
/// media placeholder, a shared link, a multiline message, and emoji.
/// 01/01/24 is a Monday.
const TRANSCRIPT: &str = "\
01/01/24, 09:05 am - Messages and calls are end-to-end encrypted.
01/01/24, 09:05 am - Alice: Hello there
01/01/24, 09:06 am - Bob: Hi Alice 😂
01/01/24, 09:07 am - Alice: look at https://example.com/article
01/01/24, 02:30 pm - Alice: <Media omitted>
02/01/24, 11:45 pm - Bob: first line
second line
03/01/24, 12:10 am - Alice added Charlie
03/01/24, 08:00 am - Charlie: morning 😂😂
";

fn parse() -> Vec<MessageRecord> {
    TranscriptParser::new().parse_str(TRANSCRIPT)
}

#[test]
fn test_record_count_matches_header_count() {
    let records = parse();
    assert_eq!(records.len(), 8);
}

#[test]
fn test_transcript_order_is_preserved() {
    let records = parse();
    let timestamps: Vec<_> = records.iter().filter_map(|r| r.timestamp()).collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(records[1].sender(), "Alice");
    assert_eq!(records[2].sender(), "Bob");
    assert_eq!(records[7].sender(), "Charlie");
}

#[test]
fn test_notifications_are_attributed_to_sentinel() {
    let records = parse();
    assert_eq!(records[0].sender(), GROUP_NOTIFICATION);
    assert_eq!(records[6].sender(), GROUP_NOTIFICATION);
    assert_eq!(records[6].body(), "Alice added Charlie");
}

#[test]
fn test_multiline_message_keeps_continuation() {
    let records = parse();
    assert_eq!(records[5].body(), "first line\nsecond line");
    assert_eq!(records[5].hour(), Some(23));
    assert_eq!(records[5].period(), Some("23-00"));
}

#[test]
fn test_derived_fields() {
    let records = parse();

    let hello = &records[1];
    assert_eq!(hello.year(), Some(2024));
    assert_eq!(hello.month(), Some("January"));
    assert_eq!(hello.month_num(), Some(1));
    assert_eq!(hello.day(), Some(1));
    assert_eq!(hello.day_name(), Some("Monday"));
    assert_eq!(hello.hour(), Some(9));
    assert_eq!(hello.minute(), Some(5));
    assert_eq!(hello.period(), Some("9-10"));

    let media = &records[4];
    assert_eq!(media.hour(), Some(14));
    assert_eq!(media.period(), Some("14-15"));

    let midnight = &records[6];
    assert_eq!(midnight.hour(), Some(0));
    assert_eq!(midnight.period(), Some("00-1"));
}

#[test]
fn test_overall_stats() {
    let records = parse();
    let stats = fetch_stats(&records, &Selection::Overall);

    assert_eq!(stats.messages, 8);
    assert_eq!(stats.media, 1);
    assert_eq!(stats.links, 1);
    assert!(stats.words > 0);
}

#[test]
fn test_per_user_stats() {
    let records = parse();

    let alice = fetch_stats(&records, &Selection::user("Alice"));
    assert_eq!(alice.messages, 3);
    assert_eq!(alice.media, 1);
    assert_eq!(alice.links, 1);

    let bob = fetch_stats(&records, &Selection::user("Bob"));
    assert_eq!(bob.messages, 2);
    assert_eq!(bob.links, 0);

    let nobody = fetch_stats(&records, &Selection::user("Mallory"));
    assert_eq!(nobody.messages, 0);
}

#[test]
fn test_busy_users() {
    let records = parse();
    let ranking = most_busy_users(&records, 5);

    assert_eq!(ranking[0].user, "Alice");
    assert_eq!(ranking[0].count, 3);
    let total_percent: f64 = ranking.iter().map(|u| u.percent).sum();
    assert!((total_percent - 100.0).abs() < 0.1);
}

#[test]
fn test_word_frequencies_respect_stop_words() {
    let records = parse();
    let stop = StopWords::from_text("at the look hi hello there first second line").unwrap();

    let words = word_frequencies(&records, &Selection::Overall, &stop);
    assert!(words.iter().all(|(w, _)| !stop.contains(w)));
    assert!(words.iter().any(|(w, _)| w == "morning"));
    // Media rows and notifications never contribute.
    assert!(words.iter().all(|(w, _)| w != "<media" && w != "added"));
}

#[test]
fn test_emoji_counts_across_users() {
    let records = parse();

    let overall = emoji_counts(&records, &Selection::Overall);
    assert_eq!(overall[0], ("😂".to_string(), 3));

    let charlie = emoji_counts(&records, &Selection::user("Charlie"));
    assert_eq!(charlie, vec![("😂".to_string(), 2)]);
}

#[test]
fn test_timelines() {
    let records = parse();

    let monthly = monthly_timeline(&records, &Selection::Overall);
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].label, "January-2024");
    assert_eq!(monthly[0].count, 8);

    let daily = daily_timeline(&records, &Selection::Overall);
    assert_eq!(daily.len(), 3);
    assert_eq!(daily[0].1, 5);

    let hourly = hourly_activity(&records, &Selection::Overall);
    assert!(hourly.contains(&(9, 4)));
}

#[test]
fn test_heatmap_pivot() {
    let records = parse();
    let heatmap = activity_heatmap(&records, &Selection::Overall);

    // Monday 9-10 has the encrypted notice, the greetings, and the link.
    assert_eq!(heatmap.get("Monday", "9-10"), 4);
    assert_eq!(heatmap.get("Monday", "14-15"), 1);
    assert_eq!(heatmap.get("Tuesday", "23-00"), 1);
    assert_eq!(heatmap.get("Wednesday", "00-1"), 1);
    assert_eq!(heatmap.get("Wednesday", "8-9"), 1);

    // Row and column sums equal the record count with timestamps.
    let total: usize = heatmap.counts.iter().flatten().sum();
    assert_eq!(total, 8);
}

#[test]
fn test_sentiment_summary_runs_over_selection() {
    let records = parse();
    let summary = sentiment_summary(&records, &Selection::Overall, &LexiconScorer::new());

    assert_eq!(summary.messages.len(), 8);
    assert_eq!(
        summary.positive + summary.negative + summary.neutral,
        summary.messages.len()
    );
}

#[test]
fn test_filtered_view_leaves_original_intact() {
    let records = parse();
    let before = records.clone();

    let view = select(&records, &Selection::user("Alice"));
    assert_eq!(view.len(), 3);
    assert_eq!(records, before);
}

#[test]
fn test_date_filter_pipeline() {
    let records = parse();

    let config = FilterConfig::new()
        .with_date_from("2024-01-02")
        .unwrap()
        .with_date_to("2024-01-02")
        .unwrap();
    let filtered = apply_filters(records, &config);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].sender(), "Bob");
}

#[test]
fn test_parse_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{TRANSCRIPT}").unwrap();

    let records = TranscriptParser::new().parse(file.path()).unwrap();
    assert_eq!(records.len(), 8);
}
