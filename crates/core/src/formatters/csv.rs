//! CSV output for metric rows.
//!
//! The `csv` crate cannot serialize `#[serde(flatten)]` structs, so rows are
//! written field by field in [`COLUMNS`] order.

use std::io::Write;

use crate::Result;
use crate::analyze::MetricsRecord;

/// Header row, file name first.
pub const COLUMNS: [&str; 13] = [
    "File Name",
    "positive_score",
    "negative_score",
    "polarity_score",
    "subjectivity_score",
    "avg_sentence_length",
    "percentage_complex_words",
    "complex_word_count",
    "word_count",
    "avg_word_length",
    "syllable_per_word",
    "fog_index",
    "pronoun_count",
];

/// Writes a header and one row per record to `writer`.
pub fn write_csv<W: Write>(records: &[MetricsRecord], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(COLUMNS)?;

    for record in records {
        out.write_record(row(record))?;
    }

    out.flush()?;
    Ok(())
}

/// Renders records as a CSV string.
pub fn to_csv_string(records: &[MetricsRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn row(record: &MetricsRecord) -> [String; 13] {
    let m = &record.metrics;
    [
        record.file_name.clone(),
        m.positive_score.to_string(),
        m.negative_score.to_string(),
        m.polarity_score.to_string(),
        m.subjectivity_score.to_string(),
        m.avg_sentence_length.to_string(),
        m.percentage_complex_words.to_string(),
        m.complex_word_count.to_string(),
        m.word_count.to_string(),
        m.avg_word_length.to_string(),
        m.syllable_per_word.to_string(),
        m.fog_index.to_string(),
        m.pronoun_count.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TextMetrics;

    fn record(name: &str) -> MetricsRecord {
        MetricsRecord {
            file_name: name.to_string(),
            metrics: TextMetrics {
                positive_score: 3,
                negative_score: 1,
                polarity_score: 0.5,
                subjectivity_score: 0.25,
                avg_sentence_length: 12.0,
                percentage_complex_words: 37.5,
                complex_word_count: 6,
                word_count: 16,
                avg_word_length: 6.125,
                syllable_per_word: 2.0,
                fog_index: 4.95,
                pronoun_count: 2,
            },
        }
    }

    #[test]
    fn test_header_order() {
        let out = to_csv_string(&[]).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("File Name,positive_score,negative_score,polarity_score"));
        assert!(header.ends_with("fog_index,pronoun_count"));
    }

    #[test]
    fn test_one_line_per_record() {
        let out = to_csv_string(&[record("bctech1.txt"), record("bctech2.txt")]).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "bctech1.txt,3,1,0.5,0.25,12,37.5,6,16,6.125,2,4.95,2");
    }

    #[test]
    fn test_file_names_with_commas_are_quoted() {
        let out = to_csv_string(&[record("a,b.txt")]).unwrap();
        assert!(out.contains("\"a,b.txt\""));
    }
}
