//! Batch fetch-and-extract over a list of records.
//!
//! Records are processed one at a time. A failure on one URL is logged and
//! recorded, and the loop moves on; nothing is retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use lexometer_core::{ScrapeConfig, UrlRecord, scrape_records};
//!
//! # async fn example() {
//! let records = vec![UrlRecord { url: "https://example.com/post".into(), url_id: "bctech1".into() }];
//! let config = ScrapeConfig::builder().output_dir("articles").timeout(10).build();
//! let report = scrape_records(&records, &config).await;
//! println!("{} saved, {} failed", report.saved.len(), report.failures.len());
//! # }
//! ```

use std::path::PathBuf;

use crate::extract::{ExtractConfig, extract_to_file};
use crate::fetch::{FetchConfig, fetch_url};
use crate::input::UrlRecord;
use crate::{LexometerError, Result};

/// Configuration for a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Directory receiving `<URL_ID>.txt` files (default: current directory).
    pub output_dir: PathBuf,
    pub fetch: FetchConfig,
    pub extract: ExtractConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("."), fetch: FetchConfig::default(), extract: ExtractConfig::default() }
    }
}

impl ScrapeConfig {
    /// Creates a new builder for ScrapeConfig.
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::new()
    }
}

/// Builder for ScrapeConfig.
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ScrapeConfig::default() }
    }

    /// Sets the output directory.
    pub fn output_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.output_dir = value.into();
        self
    }

    /// Sets the HTTP timeout in seconds.
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.fetch.timeout = value;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the title selector.
    pub fn title_selector(mut self, value: impl Into<String>) -> Self {
        self.config.extract.title_selector = value.into();
        self
    }

    /// Sets the article body selector.
    pub fn body_selector(mut self, value: impl Into<String>) -> Self {
        self.config.extract.body_selector = value.into();
        self
    }

    /// Builds the config.
    pub fn build(self) -> ScrapeConfig {
        self.config
    }
}

impl Default for ScrapeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A record that could not be turned into a text file.
#[derive(Debug)]
pub struct ScrapeFailure {
    pub record: UrlRecord,
    pub error: LexometerError,
}

/// Outcome of a scrape run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Files written, in record order.
    pub saved: Vec<PathBuf>,
    pub failures: Vec<ScrapeFailure>,
}

impl ScrapeReport {
    /// Number of records attempted.
    pub fn attempted(&self) -> usize {
        self.saved.len() + self.failures.len()
    }
}

/// Fetches, extracts, and saves every record in order.
///
/// Never fails as a whole: per-record errors end up in
/// [`ScrapeReport::failures`].
pub async fn scrape_records(records: &[UrlRecord], config: &ScrapeConfig) -> ScrapeReport {
    let mut report = ScrapeReport::default();

    for record in records {
        match scrape_one(record, config).await {
            Ok(path) => {
                tracing::info!(url_id = %record.url_id, path = %path.display(), "article saved");
                report.saved.push(path);
            }
            Err(error) => {
                match &error {
                    LexometerError::ContentNotFound(_) => {
                        tracing::warn!(url = %record.url, "content not found for URL")
                    }
                    other => tracing::warn!(url = %record.url, error = %other, "an error occurred with URL"),
                }
                report.failures.push(ScrapeFailure { record: record.clone(), error });
            }
        }
    }

    report
}

async fn scrape_one(record: &UrlRecord, config: &ScrapeConfig) -> Result<PathBuf> {
    let html = fetch_url(&record.url, &config.fetch).await?;
    extract_to_file(&html, &record.url_id, &config.output_dir, &config.extract)
}
