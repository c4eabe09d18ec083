use std::io::Write;

use crate::Result;
use crate::analyze::MetricsRecord;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Writes records as a JSON array of flat objects keyed like the CSV header.
pub fn write_json<W: Write>(records: &[MetricsRecord], mut writer: W, config: &JsonConfig) -> Result<()> {
    if config.pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a `serde_json::Value` array.
pub fn records_to_json(records: &[MetricsRecord]) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(records)?)
}
