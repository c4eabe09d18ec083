//! Word lists used by the metric computation.
//!
//! A [`Lexicon`] holds the stopword set and the positive/negative opinion
//! lexicon. Built-in lists are compiled into the crate; a [`LexiconLoader`]
//! lets files from a custom or standard directory replace them one list at a
//! time.
//!
//! List files hold one word per line. Blank lines and lines starting with `;`
//! are ignored, which matches the Hu & Liu opinion lexicon distribution.
//!
//! An installed NLTK `opinion_lexicon` corpus (found through `NLTK_DATA`,
//! `~/nltk_data` or the usual system locations) is read for the two opinion
//! lists when neither lexicon directory provides them.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{LexometerError, Result};

/// File name of the stopword list inside a lexicon directory.
pub const STOPWORDS_FILE: &str = "stopwords.txt";
/// File name of the positive opinion list inside a lexicon directory.
pub const POSITIVE_FILE: &str = "positive-words.txt";
/// File name of the negative opinion list inside a lexicon directory.
pub const NEGATIVE_FILE: &str = "negative-words.txt";

/// Opinion lexicon location relative to an NLTK data directory.
const NLTK_OPINION_LEXICON: &str = "corpora/opinion_lexicon";

const NLTK_SYSTEM_DIRS: &[&str] =
    &["/usr/share/nltk_data", "/usr/local/share/nltk_data", "/usr/lib/nltk_data", "/usr/local/lib/nltk_data"];

const BUILTIN_STOPWORDS: &str = include_str!("../data/stopwords.txt");
const BUILTIN_POSITIVE: &str = include_str!("../data/positive-words.txt");
const BUILTIN_NEGATIVE: &str = include_str!("../data/negative-words.txt");

/// Personal pronouns counted by the analyzer.
pub const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "me", "my", "myself", "we", "us", "our", "ours", "ourselves", "you", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "they",
    "them", "their", "theirs", "themselves",
];

/// Stopwords plus the opinion lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub stopwords: HashSet<String>,
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The lists compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            stopwords: parse_word_list(BUILTIN_STOPWORDS),
            positive: parse_word_list(BUILTIN_POSITIVE),
            negative: parse_word_list(BUILTIN_NEGATIVE),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }
}

/// True for words in [`PERSONAL_PRONOUNS`] (case-insensitive).
pub fn is_personal_pronoun(word: &str) -> bool {
    PERSONAL_PRONOUNS.iter().any(|p| p.eq_ignore_ascii_case(word))
}

/// Parses a word list: trimmed, lowercased, comments and blanks dropped.
pub fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(str::to_lowercase)
        .collect()
}

/// Loads a [`Lexicon`], preferring files from the custom directory, then the
/// standard directory, then (opinion lists only) an NLTK data directory, then
/// the built-in lists.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    custom_dir: Option<PathBuf>,
    standard_dir: Option<PathBuf>,
    nltk_data_dir: Option<PathBuf>,
}

impl LexiconLoader {
    /// Loader with no directories; [`LexiconLoader::load`] returns the built-ins.
    pub fn new() -> Self {
        Self { custom_dir: None, standard_dir: None, nltk_data_dir: None }
    }

    pub fn builder() -> LexiconLoaderBuilder {
        LexiconLoaderBuilder::new()
    }

    /// Puts `path` ahead of every other lookup location.
    pub fn with_custom_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.custom_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Assembles the lexicon, list by list.
    pub fn load(&self) -> Result<Lexicon> {
        let builtin = Lexicon::builtin();

        Ok(Lexicon {
            stopwords: self.load_list(STOPWORDS_FILE)?.unwrap_or(builtin.stopwords),
            positive: self.load_list(POSITIVE_FILE)?.unwrap_or(builtin.positive),
            negative: self.load_list(NEGATIVE_FILE)?.unwrap_or(builtin.negative),
        })
    }

    fn load_list(&self, name: &str) -> Result<Option<HashSet<String>>> {
        match self.find_file(name) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading word list");
                read_word_list(&path).map(Some)
            }
            None => Ok(None),
        }
    }

    fn find_file(&self, name: &str) -> Option<PathBuf> {
        let opinion_dir = match name {
            POSITIVE_FILE | NEGATIVE_FILE => self.nltk_data_dir.as_ref().map(|dir| dir.join(NLTK_OPINION_LEXICON)),
            _ => None,
        };

        [self.custom_dir.clone(), self.standard_dir.clone(), opinion_dir]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Standard lexicon directory (`<config dir>/lexometer/lexicons`), if it exists
    fn default_standard_dir() -> Option<PathBuf> {
        let dir = dirs::config_dir()?.join("lexometer").join("lexicons");
        if dir.is_dir() { Some(dir) } else { None }
    }

    /// First NLTK data directory holding the opinion lexicon corpus.
    fn default_nltk_data_dir() -> Option<PathBuf> {
        let from_env = std::env::var_os("NLTK_DATA")
            .into_iter()
            .flat_map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>());
        let home = dirs::home_dir().map(|home| home.join("nltk_data"));

        from_env
            .chain(home)
            .chain(NLTK_SYSTEM_DIRS.iter().map(PathBuf::from))
            .find(|dir| dir.join(NLTK_OPINION_LEXICON).is_dir())
    }
}

impl Default for LexiconLoader {
    fn default() -> Self {
        let mut builder = LexiconLoaderBuilder::new();

        if let Some(standard_dir) = Self::default_standard_dir() {
            builder = builder.standard_dir(standard_dir);
        }
        if let Some(nltk_data_dir) = Self::default_nltk_data_dir() {
            builder = builder.nltk_data_dir(nltk_data_dir);
        }

        builder.build()
    }
}

/// Builder for LexiconLoader
#[derive(Debug, Default)]
pub struct LexiconLoaderBuilder {
    custom_dir: Option<PathBuf>,
    standard_dir: Option<PathBuf>,
    nltk_data_dir: Option<PathBuf>,
}

impl LexiconLoaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom lexicon directory
    pub fn custom_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.custom_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set standard lexicon directory
    pub fn standard_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.standard_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set NLTK data directory (the one containing `corpora/`)
    pub fn nltk_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.nltk_data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> LexiconLoader {
        LexiconLoader {
            custom_dir: self.custom_dir,
            standard_dir: self.standard_dir,
            nltk_data_dir: self.nltk_data_dir,
        }
    }
}

fn read_word_list(path: &Path) -> Result<HashSet<String>> {
    let bytes = fs::read(path).map_err(|e| LexometerError::LexiconError(format!("{}: {e}", path.display())))?;
    // The Hu & Liu lists ship as Latin-1; fall back byte-per-char when not UTF-8.
    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
    };
    Ok(parse_word_list(&content))
}
