pub mod csv;
pub mod json;

use std::io::Write;
use std::str::FromStr;

use crate::Result;
use crate::analyze::MetricsRecord;

pub use self::csv::{COLUMNS, to_csv_string, write_csv};
pub use self::json::{JsonConfig, records_to_json, write_json};

/// Table format for metric rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: csv, json", s)),
        }
    }
}

/// Writes `records` to `writer` in the chosen format.
pub fn write_records<W: Write>(records: &[MetricsRecord], format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(records, writer),
        OutputFormat::Json => write_json(records, writer, &JsonConfig { pretty: true }),
    }
}
