//! Vowel-group syllable heuristic and complex-word classification.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Words with more syllables than this are complex.
pub const COMPLEX_SYLLABLE_THRESHOLD: usize = 2;

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Estimates the syllable count of `word`.
///
/// Counts a leading vowel, then every vowel that follows a non-vowel, and
/// discounts a silent final `e` unless it comes after `l` or `r`
/// (`table`, `acre`). Any non-empty word has at least one syllable; the
/// empty string has none.
///
/// ```rust
/// use lexometer_core::syllables::syllable_count;
///
/// assert_eq!(syllable_count("readability"), 5);
/// assert_eq!(syllable_count("make"), 1);
/// assert_eq!(syllable_count(""), 0);
/// ```
pub fn syllable_count(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let Some(&first) = chars.first() else {
        return 0;
    };

    let mut count: usize = usize::from(is_vowel(first));
    count += chars.windows(2).filter(|pair| is_vowel(pair[1]) && !is_vowel(pair[0])).count();

    if let [.., before, 'e'] = chars.as_slice()
        && !matches!(*before, 'l' | 'r')
    {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// True when `word` has more than two syllables.
pub fn is_complex_word(word: &str) -> bool {
    syllable_count(word) > COMPLEX_SYLLABLE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cat", 1)]
    #[case("apple", 2)]
    #[case("table", 2)]
    #[case("acre", 2)]
    #[case("make", 1)]
    #[case("rhythm", 1)]
    #[case("beautiful", 3)]
    #[case("readability", 5)]
    #[case("Queue", 1)]
    #[case("e", 1)]
    #[case("be", 1)]
    #[case("syllable", 3)]
    fn test_syllable_count(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(syllable_count(word), expected);
    }

    #[test]
    fn test_empty_word_has_no_syllables() {
        assert_eq!(syllable_count(""), 0);
    }

    #[test]
    fn test_nonempty_alphabetic_words_have_a_syllable() {
        for word in ["b", "x", "shh", "e", "the", "strengths", "zzz"] {
            assert!(syllable_count(word) >= 1, "{word}");
        }
    }

    #[test]
    fn test_is_complex_word() {
        assert!(is_complex_word("analysis"));
        assert!(is_complex_word("beautiful"));
        assert!(!is_complex_word("apple"));
        assert!(!is_complex_word("market"));
    }
}
