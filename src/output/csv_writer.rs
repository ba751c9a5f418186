//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::MessageRecord;
use crate::error::Result;

/// Column headers of the record table, in output order.
const HEADER: [&str; 12] = [
    "date", "user", "message", "only_date", "year", "month_num", "month", "day", "day_name",
    "hour", "minute", "period",
];

/// Writes the record table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `date`, `user`, `message` plus the derived calendar columns
/// - Absent timestamp fields become empty cells
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(records, file)
}

/// Returns the record table as a CSV string.
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_csv_to<W: Write>(records: &[MessageRecord], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build one CSV row; absent fields become empty cells.
fn build_row(record: &MessageRecord) -> Vec<String> {
    let opt = |value: Option<String>| value.unwrap_or_default();

    vec![
        opt(record
            .timestamp()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())),
        record.sender.clone(),
        record.body.clone(),
        opt(record.only_date().map(|d| d.to_string())),
        opt(record.year().map(|y| y.to_string())),
        opt(record.month_num().map(|m| m.to_string())),
        opt(record.month().map(str::to_string)),
        opt(record.day().map(|d| d.to_string())),
        opt(record.day_name().map(str::to_string)),
        opt(record.hour().map(|h| h.to_string())),
        opt(record.minute().map(|m| m.to_string())),
        opt(record.period().map(str::to_string)),
    ]
}
