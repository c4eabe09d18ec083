//! Readability and sentiment metrics for a single document.
//!
//! The computation is one pass over the text:
//!
//! 1. tokenize into words and sentences
//! 2. keep alphabetic words, lowercased, then drop stopwords ("cleaned" words)
//! 3. count complex words, opinion words, and personal pronouns
//! 4. derive ratios from the counts
//!
//! Sentiment ratios carry a small additive term ([`EPSILON`]) in the
//! denominator. Per-word and per-sentence averages have no such guard, so a
//! document without sentences or cleaned words is rejected with
//! [`LexometerError::EmptyDocument`].
//!
//! # Example
//!
//! ```rust
//! use lexometer_core::{Lexicon, analyze_text};
//!
//! let metrics = analyze_text("Prices fell sharply. Analysts fear a recession.", &Lexicon::builtin()).unwrap();
//! assert_eq!(metrics.negative_score, 3);
//! assert!(metrics.polarity_score < 0.0);
//! ```

use serde::Serialize;

use crate::lexicon::{Lexicon, is_personal_pronoun};
use crate::syllables::{is_complex_word, syllable_count};
use crate::tokenize::{normalize_words, sent_tokenize, word_tokenize};
use crate::{LexometerError, Result};

/// Additive term keeping sentiment ratios finite.
pub const EPSILON: f64 = 0.000001;

/// Weight applied to the Gunning fog sum.
pub const FOG_WEIGHT: f64 = 0.4;

/// Metrics for one document, in output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    /// (pos − neg) / (pos + neg + ε), within [-1, 1].
    pub polarity_score: f64,
    /// (pos + neg) / (word_count + ε).
    pub subjectivity_score: f64,
    /// Whitespace-separated tokens per sentence.
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub complex_word_count: usize,
    /// Number of cleaned words.
    pub word_count: usize,
    pub avg_word_length: f64,
    pub syllable_per_word: f64,
    /// 0.4 × (avg_sentence_length + complex_word_count / word_count).
    pub fog_index: f64,
    pub pronoun_count: usize,
}

/// Computes every metric for `text`.
pub fn analyze_text(text: &str, lexicon: &Lexicon) -> Result<TextMetrics> {
    let tokens = word_tokenize(text);
    let words = normalize_words(&tokens);
    let cleaned: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|word| !lexicon.is_stopword(word))
        .collect();

    let sentences = sent_tokenize(text);
    if sentences.is_empty() {
        return Err(LexometerError::EmptyDocument("no sentences found".to_string()));
    }
    if cleaned.is_empty() {
        return Err(LexometerError::EmptyDocument("no words left after removing stopwords".to_string()));
    }

    let sentence_tokens: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    let avg_sentence_length = sentence_tokens as f64 / sentences.len() as f64;

    let word_count = cleaned.len();
    let words_f = word_count as f64;

    let complex_word_count = cleaned.iter().filter(|w| is_complex_word(w)).count();
    let complex_ratio = complex_word_count as f64 / words_f;

    let pronoun_count = cleaned.iter().filter(|w| is_personal_pronoun(w)).count();

    let positive_score = cleaned.iter().filter(|w| lexicon.is_positive(w)).count();
    let negative_score = cleaned.iter().filter(|w| lexicon.is_negative(w)).count();
    let (pos, neg) = (positive_score as f64, negative_score as f64);

    let total_chars: usize = cleaned.iter().map(|w| w.chars().count()).sum();
    let total_syllables: usize = cleaned.iter().map(|w| syllable_count(w)).sum();

    Ok(TextMetrics {
        positive_score,
        negative_score,
        polarity_score: (pos - neg) / ((pos + neg) + EPSILON),
        subjectivity_score: (pos + neg) / (words_f + EPSILON),
        avg_sentence_length,
        percentage_complex_words: complex_ratio * 100.0,
        complex_word_count,
        word_count,
        avg_word_length: total_chars as f64 / words_f,
        syllable_per_word: total_syllables as f64 / words_f,
        fog_index: FOG_WEIGHT * (avg_sentence_length + complex_ratio),
        pronoun_count,
    })
}
