//! JSON Lines output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::MessageRecord;
use crate::error::Result;

/// Writes the record table as JSON Lines, one row per line.
pub fn write_jsonl(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the record table as a JSON Lines string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut out = String::new();

    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }

    Ok(out)
}
