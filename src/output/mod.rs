//! Record table export writers.
//!
//! The parsed record sequence is a uniform table with the columns
//! `date`, `user`, `message`, `only_date`, `year`, `month_num`, `month`,
//! `day`, `day_name`, `hour`, `minute`, `period`. This module writes that
//! table out:
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one row per line) - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::output::{write_csv, write_json, to_csv};
//! use chatlens::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new()
//!     .parse_str("01/01/24, 09:05 am - Alice: Hello there");
//!
//! write_csv(&records, "records.csv")?;
//! write_json(&records, "records.json")?;
//!
//! // Or get the table as a string
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
