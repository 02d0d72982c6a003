//! Word-level text transforms.
//!
//! Each whitespace-separated chunk of a sentence is split into tokens: words
//! (optionally with a leading, inner or trailing apostrophe) and single
//! punctuation marks from `:;,.!?"`. Each token is transformed on its own, so
//! punctuation keeps its position. Characters that belong to no token are
//! dropped, and chunks are rejoined with single spaces.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'\w+|\w+'\w+|\w+'|\w+|[:;,.!?"]"#).expect("token pattern is valid")
});

fn transform_tokens<F>(sentence: &str, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    sentence
        .split_whitespace()
        .map(|chunk| {
            TOKEN_PATTERN
                .find_iter(chunk)
                .map(|token| transform(token.as_str()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reverses the characters of every word, leaving punctuation in place.
///
/// # Examples
///
/// ```
/// use salary_engine::text::reverse_words;
///
/// assert_eq!(reverse_words("Hello, world!"), "olleH, dlrow!");
/// assert_eq!(reverse_words("don't"), "t'nod");
/// ```
pub fn reverse_words(sentence: &str) -> String {
    transform_tokens(sentence, |token| token.chars().rev().collect())
}

/// Sorts the characters of every word case-insensitively, leaving
/// punctuation in place.
///
/// Characters that compare equal ignoring case keep their original order.
///
/// # Examples
///
/// ```
/// use salary_engine::text::sort_words;
///
/// assert_eq!(sort_words("Hello, world!"), "eHllo, dlorw!");
/// ```
pub fn sort_words(sentence: &str) -> String {
    transform_tokens(sentence, |token| {
        let mut chars: Vec<char> = token.chars().collect();
        chars.sort_by_key(|c| c.to_lowercase().collect::<String>());
        chars.into_iter().collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_keeps_punctuation_in_place() {
        assert_eq!(
            reverse_words("The quick, brown fox. Jumps?"),
            "ehT kciuq, nworb xof. spmuJ?"
        );
    }

    #[test]
    fn test_reverse_handles_quotes() {
        assert_eq!(reverse_words("\"Hello\" she said"), "\"olleH\" ehs dias");
    }

    #[test]
    fn test_reverse_apostrophes_move_with_word() {
        assert_eq!(reverse_words("don't"), "t'nod");
        assert_eq!(reverse_words("dogs'"), "'sgod");
        assert_eq!(reverse_words("'tis"), "sit'");
    }

    #[test]
    fn test_reverse_collapses_whitespace() {
        assert_eq!(reverse_words("  one   two  "), "eno owt");
    }

    #[test]
    fn test_reverse_drops_unmatched_characters() {
        assert_eq!(reverse_words("well-known"), "llewnwonk");
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(reverse_words(""), "");
        assert_eq!(sort_words("   "), "");
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        assert_eq!(sort_words("Banana"), "aaaBnn");
        assert_eq!(sort_words("dCbA"), "AbCd");
    }

    #[test]
    fn test_sort_is_stable_for_equal_letters() {
        assert_eq!(sort_words("aA"), "aA");
        assert_eq!(sort_words("Aa"), "Aa");
    }

    #[test]
    fn test_sort_keeps_punctuation_in_place() {
        assert_eq!(sort_words("zebra, apple!"), "aberz, aelpp!");
    }

    #[test]
    fn test_sort_orders_apostrophe_first() {
        assert_eq!(sort_words("can't"), "'acnt");
    }

    #[test]
    fn test_digits_are_word_characters() {
        assert_eq!(reverse_words("abc123"), "321cba");
        assert_eq!(sort_words("b2a1"), "12ab");
    }
}
