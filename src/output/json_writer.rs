//! JSON output writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::MessageRecord;
use crate::error::Result;

/// Writes the record table as a pretty-printed JSON array.
///
/// Rows without a timestamp carry `"date": null` and no derived columns.
pub fn write_json(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Returns the record table as a pretty-printed JSON string.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
