use std::fs;
use std::path::{Path, PathBuf};

use crate::parse::Document;
use crate::{LexometerError, Result};

/// Configuration for article extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Selector whose first match supplies the title
    pub title_selector: String,
    /// Selector whose first match is the article body container
    pub body_selector: String,
    /// Selector for the paragraphs collected inside the body
    pub paragraph_selector: String,
    /// Paragraphs mentioning this word (case-insensitive) are dropped
    pub excluded_keyword: String,
    /// Lines starting with this prefix (after trimming) are dropped
    pub excluded_prefix: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            title_selector: "h1".to_string(),
            body_selector: "div.td-post-content".to_string(),
            paragraph_selector: "p".to_string(),
            excluded_keyword: "contact".to_string(),
            excluded_prefix: "Summarized:".to_string(),
        }
    }
}

/// Title and filtered body text of one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub body: String,
}

impl ExtractedArticle {
    /// Renders the on-disk form: title, a blank line, then the body.
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }

    /// Writes the article to `<dir>/<url_id>.txt` and returns the path.
    pub fn save(&self, dir: &Path, url_id: &str) -> Result<PathBuf> {
        let path = dir.join(format!("{url_id}.txt"));
        fs::write(&path, self.to_text())?;
        Ok(path)
    }
}

/// Extract the title and body paragraphs from a parsed page
pub fn extract_article(doc: &Document, config: &ExtractConfig) -> Result<ExtractedArticle> {
    let title = doc
        .select_first(&config.title_selector)?
        .map(|el| el.text())
        .ok_or_else(|| LexometerError::MissingTitle(config.title_selector.clone()))?;

    let body = doc
        .select_first(&config.body_selector)?
        .ok_or_else(|| LexometerError::ContentNotFound(config.body_selector.clone()))?;

    let keyword = config.excluded_keyword.to_lowercase();
    let paragraphs: Vec<String> = body
        .select(&config.paragraph_selector)?
        .iter()
        .map(|p| p.text())
        .filter(|text| keyword.is_empty() || !text.to_lowercase().contains(&keyword))
        .collect();

    let joined = paragraphs.join("\n");
    let body = strip_prefixed_lines(&joined, &config.excluded_prefix);

    Ok(ExtractedArticle { title, body })
}

/// Parse `html`, extract the article, and save it as `<url_id>.txt` in `dir`
pub fn extract_to_file(html: &str, url_id: &str, dir: &Path, config: &ExtractConfig) -> Result<PathBuf> {
    let doc = Document::parse(html)?;
    let article = extract_article(&doc, config)?;
    article.save(dir, url_id)
}

fn strip_prefixed_lines(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }

    text.split('\n')
        .filter(|line| !line.trim().starts_with(prefix))
        .collect::<Vec<_>>()
        .join("\n")
}
