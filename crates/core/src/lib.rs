pub mod analyze;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod input;
pub mod lexicon;
pub mod metrics;
pub mod parse;
#[cfg(feature = "fetch")]
pub mod scrape;
pub mod syllables;
pub mod tokenize;

pub use analyze::{
    AnalysisReport, AnalyzeConfig, AnalyzeConfigBuilder, MetricsRecord, SkippedFile, analyze_directory,
    collect_documents,
};
pub use error::{LexometerError, Result};
pub use extract::{ExtractConfig, ExtractedArticle, extract_article, extract_to_file};
pub use fetch::{FetchConfig, fetch_file, validate_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{OutputFormat, write_csv, write_json, write_records};
pub use input::{UrlRecord, read_records};
pub use lexicon::{Lexicon, LexiconLoader, LexiconLoaderBuilder, PERSONAL_PRONOUNS};
pub use metrics::{TextMetrics, analyze_text};
pub use parse::Document;
#[cfg(feature = "fetch")]
pub use scrape::{ScrapeConfig, ScrapeConfigBuilder, ScrapeFailure, ScrapeReport, scrape_records};
pub use syllables::{is_complex_word, syllable_count};
pub use tokenize::{sent_tokenize, word_tokenize};
