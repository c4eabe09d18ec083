//! Word and sentence tokenization for English prose.
//!
//! Words follow Penn Treebank conventions closely enough for counting:
//! punctuation is split off into its own tokens and contractions are split
//! (`don't` becomes `do` + `n't`, `cannot` becomes `can` + `not`). Text is
//! split into sentences first, and a period is only split off the last word
//! of a sentence, so `Mr.` or `etc.` inside a sentence stay whole tokens.
//!
//! Sentences end at `.`, `!` or `?` followed by whitespace, except after
//! common abbreviations, single-letter initials, or when the next word starts
//! lowercase.

use std::sync::LazyLock;

use regex::Regex;

static NON_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

/// Characters that always form a token of their own.
const SPLIT_PUNCT: &[char] = &[
    ',', ';', ':', '!', '?', '"', '(', ')', '[', ']', '{', '}', '<', '>', '\u{201C}', '\u{201D}', '\u{2026}',
];

const OPENING_QUOTES: &[char] = &['\'', '`', '\u{2018}'];
const CLOSING_QUOTES: &[char] = &['\'', '\u{2019}'];
const FINAL_MARKS: &[char] = &['.', '\'', '\u{2019}'];
const SENTENCE_CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{2019}', '\u{201D}'];

/// Contraction suffixes, longest first within each family.
const CONTRACTIONS: &[&str] = &[
    "n't", "n\u{2019}t", "'ll", "\u{2019}ll", "'re", "\u{2019}re", "'ve", "\u{2019}ve", "'s", "\u{2019}s", "'d",
    "\u{2019}d", "'m", "\u{2019}m",
];

/// Single words Treebank splits in two, with the split offset.
const COMPOUND_SPLITS: &[(&str, usize)] =
    &[("cannot", 3), ("gimme", 3), ("gonna", 3), ("gotta", 3), ("lemme", 3), ("wanna", 3)];

/// Lowercased forms that do not end a sentence when followed by a period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "no", "fig", "approx", "dept", "est", "gov",
    "gen", "sen", "rep", "mt", "rev", "capt", "col", "lt", "sgt", "ave", "blvd",
];

/// Splits `text` into word and punctuation tokens.
///
/// ```rust
/// use lexometer_core::tokenize::word_tokenize;
///
/// assert_eq!(word_tokenize("Don't stop, Alice."), vec!["Do", "n't", "stop", ",", "Alice", "."]);
/// ```
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for sentence in sent_tokenize(text) {
        tokenize_sentence(sentence, &mut tokens);
    }

    tokens
}

fn tokenize_sentence(sentence: &str, tokens: &mut Vec<String>) {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let last = chunks.len().saturating_sub(1);

    for (idx, chunk) in chunks.into_iter().enumerate() {
        let sentence_final = idx == last;
        let mut piece = String::new();
        for ch in chunk.chars() {
            if SPLIT_PUNCT.contains(&ch) {
                push_word(&std::mem::take(&mut piece), sentence_final, tokens);
                tokens.push(ch.to_string());
            } else {
                piece.push(ch);
            }
        }
        push_word(&piece, sentence_final, tokens);
    }
}

fn push_word(word: &str, sentence_final: bool, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }

    let rest = word.trim_start_matches(OPENING_QUOTES);
    let leading = &word[..word.len() - rest.len()];
    if !leading.is_empty() {
        tokens.push(leading.to_string());
    }

    let marks = if sentence_final { FINAL_MARKS } else { CLOSING_QUOTES };
    let mut core = rest.trim_end_matches(marks);
    let trailing = &rest[core.len()..];

    // An ellipsis is its own token anywhere in the sentence.
    let mut ellipsis = "";
    if core.ends_with("...") {
        let stem = core.trim_end_matches('.');
        ellipsis = &core[stem.len()..];
        core = stem;
    }

    if !core.is_empty() {
        split_contraction(core, tokens);
    }
    for mark in [ellipsis, trailing] {
        if !mark.is_empty() {
            tokens.push(mark.to_string());
        }
    }
}

fn split_contraction(word: &str, tokens: &mut Vec<String>) {
    if let Some(&(_, at)) = COMPOUND_SPLITS.iter().find(|(compound, _)| compound.eq_ignore_ascii_case(word)) {
        tokens.push(word[..at].to_string());
        tokens.push(word[at..].to_string());
        return;
    }

    for suffix in CONTRACTIONS {
        if word.len() <= suffix.len() {
            continue;
        }
        let cut = word.len() - suffix.len();
        if word.is_char_boundary(cut) && word[cut..].eq_ignore_ascii_case(suffix) {
            tokens.push(word[..cut].to_string());
            tokens.push(word[cut..].to_string());
            return;
        }
    }
    tokens.push(word.to_string());
}

/// Splits `text` into sentences, returned as slices of the input.
///
/// ```rust
/// use lexometer_core::tokenize::sent_tokenize;
///
/// let sentences = sent_tokenize("Dr. Smith arrived. He was late!");
/// assert_eq!(sentences, vec!["Dr. Smith arrived.", "He was late!"]);
/// ```
pub fn sent_tokenize(text: &str) -> Vec<&str> {
    let spans: Vec<(usize, usize)> = NON_SPACE.find_iter(text).map(|m| (m.start(), m.end())).collect();
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, &(token_start, token_end)) in spans.iter().enumerate() {
        let begin = *start.get_or_insert(token_start);
        let next = spans.get(idx + 1).map(|&(s, e)| &text[s..e]);

        if ends_sentence(&text[token_start..token_end], next) {
            sentences.push(&text[begin..token_end]);
            start = None;
        }
    }

    if let (Some(begin), Some(&(_, end))) = (start, spans.last()) {
        sentences.push(&text[begin..end]);
    }

    sentences
}

fn ends_sentence(token: &str, next: Option<&str>) -> bool {
    let body = token.trim_end_matches(SENTENCE_CLOSERS);
    let Some(last) = body.chars().last() else {
        return false;
    };
    if !matches!(last, '.' | '!' | '?') {
        return false;
    }

    if last == '.' && !body.ends_with("..") {
        let word = body.trim_end_matches('.').trim_start_matches(|c: char| !c.is_alphanumeric());
        let lower = word.to_lowercase();
        let is_initial = word.chars().count() == 1 && word.chars().all(char::is_alphabetic);
        if is_initial || word.contains('.') || ABBREVIATIONS.contains(&lower.as_str()) {
            return false;
        }
    }

    match next.and_then(|n| n.chars().find(|c| c.is_alphanumeric())) {
        Some(c) => !c.is_lowercase(),
        None => true,
    }
}

/// Keeps purely alphabetic tokens, lowercased.
pub fn normalize_words<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty() && t.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello, world.", &["Hello", ",", "world", "."])]
    #[case("It's (really) fine!", &["It", "'s", "(", "really", ")", "fine", "!"])]
    #[case("'Quoted' words", &["'", "Quoted", "'", "words"])]
    #[case("well-known U.S. firms", &["well-known", "U.S.", "firms"])]
    #[case("we can't", &["we", "ca", "n't"])]
    #[case("Mr. Smith met Dr. Jones today.", &["Mr.", "Smith", "met", "Dr.", "Jones", "today", "."])]
    #[case("We cannot wait", &["We", "can", "not", "wait"])]
    #[case("Wait... what?", &["Wait", "...", "what", "?"])]
    #[case("It grew. Then it fell.", &["It", "grew", ".", "Then", "it", "fell", "."])]
    fn test_word_tokenize(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(word_tokenize(input), expected);
    }

    #[test]
    fn test_normalize_words_drops_non_alpha() {
        let tokens = word_tokenize("The 3 cats didn't eat well-known food, 42 times.");
        assert_eq!(normalize_words(&tokens), vec!["the", "cats", "did", "eat", "food", "times"]);
    }

    #[test]
    fn test_normalize_drops_mid_sentence_abbreviations() {
        let tokens = word_tokenize("Mr. Smith met Dr. Jones today.");
        assert_eq!(normalize_words(&tokens), vec!["smith", "met", "jones", "today"]);
    }

    #[test]
    fn test_sentences_basic() {
        let text = "The market grew. Investors cheered! Was it enough? Nobody knows";
        assert_eq!(
            sent_tokenize(text),
            vec!["The market grew.", "Investors cheered!", "Was it enough?", "Nobody knows"]
        );
    }

    #[test]
    fn test_sentences_keep_abbreviations_and_initials() {
        let text = "Mr. Jones met J. K. Rowling in the U.S. on Monday. It went well.";
        assert_eq!(
            sent_tokenize(text),
            vec!["Mr. Jones met J. K. Rowling in the U.S. on Monday.", "It went well."]
        );
    }

    #[test]
    fn test_sentences_lowercase_continuation() {
        assert_eq!(sent_tokenize("It costs approx. five dollars. ok then."), vec![
            "It costs approx. five dollars. ok then."
        ]);
    }

    #[test]
    fn test_sentences_closing_quote() {
        assert_eq!(sent_tokenize("He said \"stop.\" Then he left."), vec![
            "He said \"stop.\"",
            "Then he left."
        ]);
    }

    #[test]
    fn test_sentences_span_newlines() {
        let text = "Title line\n\nFirst body sentence. Second one.";
        let sentences = sent_tokenize(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Title line\n\nFirst body sentence.");
    }

    #[test]
    fn test_empty_text() {
        assert!(sent_tokenize("   \n ").is_empty());
        assert!(word_tokenize("").is_empty());
    }
}
