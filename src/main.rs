//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::analysis::{
    FilterConfig, Selection, apply_filters,
    emoji::emoji_counts,
    sentiment::{LexiconScorer, sentiment_summary},
    stats::{fetch_stats, most_busy_users},
    timeline::{activity_heatmap, monthly_timeline, week_activity},
    words::most_common_words,
};
use chatlens::cli::{Args, ExportFormat};
use chatlens::config::StopWords;
use chatlens::output::{write_csv, write_json, write_jsonl};
use chatlens::parser::TranscriptParser;
use chatlens::{ChatlensError, MessageRecord};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    let selection = match args.user {
        Some(ref user) => Selection::user(user.clone()),
        None => Selection::Overall,
    };
    println!("👤 View:    {}", selection);
    println!();

    // Step 1: Parse
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let records = TranscriptParser::new().parse(Path::new(&args.input))?;
    let original_count = records.len();
    println!(
        "   Found {} records ({:.2}s)",
        original_count,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Date filter (before any analysis)
    let records = if filter_config.has_date_filter() {
        let filtered = apply_filters(records, &filter_config);
        println!("   {} records after date filtering", filtered.len());
        filtered
    } else {
        records
    };

    if records.is_empty() {
        println!();
        println!("⚠️  No records to analyze.");
        return Ok(());
    }

    // Step 3: Report
    print_totals(&records, &selection);
    print_busy_users(&records, args.top_users);
    print_timelines(&records, &selection);
    print_top_words(&records, &selection, args.stop_words.as_deref(), args.top_words)?;
    print_top_emoji(&records, &selection);

    if args.sentiment {
        print_sentiment(&records, &selection);
    }

    // Step 4: Export the record table if requested
    if let Some(ref export) = args.export {
        export_records(&records, export, args.format)?;
        println!();
        println!("💾 Record table written to {}", export);
    }

    println!();
    println!(
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_totals(records: &[MessageRecord], selection: &Selection) {
    let stats = fetch_stats(records, selection);
    println!();
    println!("📊 Totals ({selection}):");
    println!("   Messages:  {}", stats.messages);
    println!("   Words:     {}", stats.words);
    println!("   Media:     {}", stats.media);
    println!("   Links:     {}", stats.links);
}

fn print_busy_users(records: &[MessageRecord], top_n: usize) {
    let ranking = most_busy_users(records, top_n);
    if ranking.is_empty() {
        return;
    }

    println!();
    println!("👥 Most active:");
    for entry in &ranking {
        println!(
            "   {:<20} {:>6} messages ({:.2}%)",
            entry.user, entry.count, entry.percent
        );
    }
}

fn print_timelines(records: &[MessageRecord], selection: &Selection) {
    let monthly = monthly_timeline(records, selection);
    if let (Some(first), Some(last)) = (monthly.first(), monthly.last()) {
        println!();
        println!(
            "🗓️  Active from {} to {} ({} months)",
            first.label,
            last.label,
            monthly.len()
        );
        if let Some(peak) = monthly.iter().max_by_key(|m| m.count) {
            println!("   Peak month: {} ({} messages)", peak.label, peak.count);
        }
    }

    let weekdays = week_activity(records, selection);
    if let Some((day, count)) = weekdays.first() {
        println!("   Busiest weekday: {} ({} messages)", day, count);
    }

    let heatmap = activity_heatmap(records, selection);
    if !heatmap.is_empty() {
        println!(
            "   Heatmap: {} weekdays x {} periods",
            heatmap.day_names.len(),
            heatmap.periods.len()
        );
    }
}

fn print_top_words(
    records: &[MessageRecord],
    selection: &Selection,
    stop_words_path: Option<&str>,
    limit: usize,
) -> Result<(), ChatlensError> {
    let Some(path) = stop_words_path else {
        return Ok(());
    };

    let stop_words = StopWords::from_file(Path::new(path))?;
    let top = most_common_words(records, selection, &stop_words, limit);

    println!();
    println!("🔤 Top words:");
    for (word, count) in &top {
        println!("   {:<20} {}", word, count);
    }

    Ok(())
}

fn print_top_emoji(records: &[MessageRecord], selection: &Selection) {
    let table = emoji_counts(records, selection);
    if table.is_empty() {
        return;
    }

    println!();
    println!("😀 Top emoji:");
    for (emoji, count) in table.iter().take(10) {
        println!("   {}  {}", emoji, count);
    }
}

fn print_sentiment(records: &[MessageRecord], selection: &Selection) {
    let summary = sentiment_summary(records, selection, &LexiconScorer::new());

    println!();
    println!("💬 Sentiment:");
    println!("   Positive:  {}", summary.positive);
    println!("   Negative:  {}", summary.negative);
    println!("   Neutral:   {}", summary.neutral);
}

fn export_records(
    records: &[MessageRecord],
    path: &str,
    format: ExportFormat,
) -> Result<(), ChatlensError> {
    match format {
        ExportFormat::Csv => write_csv(records, path),
        ExportFormat::Json => write_json(records, path),
        ExportFormat::Jsonl => write_jsonl(records, path),
    }
}
