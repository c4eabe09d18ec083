//! Batch analysis over a directory of extracted articles.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::metrics::{TextMetrics, analyze_text};
use crate::{LexometerError, Result};

/// Selects which files in a directory are analyzed.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Required file name prefix (default: `bctech`).
    pub prefix: String,
    /// Required file name suffix (default: `.txt`).
    pub extension: String,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self { prefix: "bctech".to_string(), extension: ".txt".to_string() }
    }
}

impl AnalyzeConfig {
    pub fn builder() -> AnalyzeConfigBuilder {
        AnalyzeConfigBuilder::new()
    }

    /// True when `file_name` qualifies for analysis.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix) && file_name.ends_with(&self.extension)
    }
}

/// Builder for AnalyzeConfig.
pub struct AnalyzeConfigBuilder {
    config: AnalyzeConfig,
}

impl AnalyzeConfigBuilder {
    pub fn new() -> Self {
        Self { config: AnalyzeConfig::default() }
    }

    /// Sets the file name prefix; an empty prefix accepts every name.
    pub fn prefix(mut self, value: impl Into<String>) -> Self {
        self.config.prefix = value.into();
        self
    }

    pub fn extension(mut self, value: impl Into<String>) -> Self {
        self.config.extension = value.into();
        self
    }

    pub fn build(self) -> AnalyzeConfig {
        self.config
    }
}

impl Default for AnalyzeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One output row: the source file name plus its metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    #[serde(rename = "File Name")]
    pub file_name: String,
    #[serde(flatten)]
    pub metrics: TextMetrics,
}

/// A qualifying file that produced no row.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: LexometerError,
}

/// Outcome of analyzing a directory.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    /// One row per analyzed file, ordered by file name.
    pub records: Vec<MetricsRecord>,
    /// Empty files that were passed over.
    pub empty: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// Lists qualifying files in `dir`, sorted by file name.
pub fn collect_documents(dir: &Path, config: &AnalyzeConfig) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LexometerError::FileNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && config.matches(name)
        {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}

/// Analyzes every qualifying file in `dir`.
///
/// Unreadable files and files with nothing to measure are logged and listed
/// in [`AnalysisReport::skipped`]; only a missing or unreadable directory
/// fails the whole run.
pub fn analyze_directory(dir: &Path, config: &AnalyzeConfig, lexicon: &Lexicon) -> Result<AnalysisReport> {
    let mut report = AnalysisReport::default();

    for path in collect_documents(dir, config)? {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(file = %file_name, error = %err, "failed to read file");
                report.skipped.push(SkippedFile { path, error: err.into() });
                continue;
            }
        };

        if text.is_empty() {
            tracing::debug!(file = %file_name, "skipping empty file");
            report.empty.push(path);
            continue;
        }

        tracing::info!(file = %file_name, "processing file");

        match analyze_text(&text, lexicon) {
            Ok(metrics) => report.records.push(MetricsRecord { file_name, metrics }),
            Err(error) => {
                tracing::warn!(file = %file_name, error = %error, "skipping file");
                report.skipped.push(SkippedFile { path, error });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_config_matches() {
        let config = AnalyzeConfig::default();
        assert!(config.matches("bctech2011.txt"));
        assert!(!config.matches("bctech2011.md"));
        assert!(!config.matches("notes.txt"));

        let any = AnalyzeConfig::builder().prefix("").build();
        assert!(any.matches("notes.txt"));
    }

    #[test]
    fn test_collect_documents_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bctech2012.txt", "b");
        write(dir.path(), "bctech2011.txt", "a");
        write(dir.path(), "readme.txt", "x");
        write(dir.path(), "bctech2013.csv", "x");
        fs::create_dir(dir.path().join("bctech_dir.txt")).unwrap();

        let files = collect_documents(dir.path(), &AnalyzeConfig::default()).unwrap();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["bctech2011.txt", "bctech2012.txt"]);
    }

    #[test]
    fn test_missing_directory() {
        let result = collect_documents(Path::new("/nonexistent/lexometer"), &AnalyzeConfig::default());
        assert!(matches!(result, Err(LexometerError::FileNotFound(_))));
    }

    #[test]
    fn test_analyze_directory_rows_and_skips() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bctech1.txt", "Title\n\nMarkets rallied strongly. Investors were happy.");
        write(dir.path(), "bctech2.txt", "");
        write(dir.path(), "bctech3.txt", "It was what it was.");
        write(dir.path(), "other.txt", "Ignored entirely.");

        let report = analyze_directory(dir.path(), &AnalyzeConfig::default(), &Lexicon::builtin()).unwrap();

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].file_name, "bctech1.txt");
        assert_eq!(report.empty.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(report.skipped[0].error, LexometerError::EmptyDocument(_)));
    }
}
