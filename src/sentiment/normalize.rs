//! # Text Normalization
//!
//! Review text cleaning for lexicon-based sentiment scoring.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Everything that is not an ASCII letter or whitespace gets stripped.
static NON_ALPHA_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s]").unwrap());

/// Tokens at or below this length carry no sentiment signal.
const MIN_TOKEN_LENGTH: usize = 3;

/// Standard English stop words plus `game`, which appears in virtually every
/// review of the domain and carries no signal.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "will",
    "would", "could", "should", "may", "might", "must", "shall", "can",
    "ought", "to", "of", "in", "for", "on", "with", "at", "by", "from",
    "as", "about", "against", "into", "through", "during", "before",
    "after", "above", "below", "up", "down", "out", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "any", "both", "each", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same",
    "so", "than", "too", "very", "just", "and", "but", "if", "or",
    "because", "until", "while", "i", "me", "my", "myself", "we", "our",
    "ours", "ourselves", "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
    "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those", "am",
    "don", "now", "game",
];

/// Text normalizer for review bodies.
///
/// Transformation order is fixed: lowercase, strip every character that is
/// not an ASCII letter or whitespace, tokenize on whitespace, drop stop
/// words and short tokens, rejoin with single spaces. Deterministic and
/// side-effect free.
pub struct TextNormalizer {
    /// Stop words to remove
    stop_words: HashSet<&'static str>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a new normalizer with the fixed English stop-word set
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Normalize review text for sentiment scoring.
    ///
    /// A text of only punctuation, digits or emoji normalizes to the empty
    /// string; the scorer treats that as a defined neutral input, never an
    /// error.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // NFC first so decomposed Latin letters do not split tokens
        // differently across platforms once the strip runs.
        let folded: String = text.nfc().collect::<String>().to_lowercase();

        let alpha_only = NON_ALPHA_REGEX.replace_all(&folded, "");

        alpha_only
            .split_whitespace()
            .filter(|token| token.len() >= MIN_TOKEN_LENGTH && !self.stop_words.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Tokenize already-normalized text
    pub fn tokenize<'a>(&self, normalized: &'a str) -> Vec<&'a str> {
        normalized.split_whitespace().collect()
    }

    /// Check whether a token is in the stop-word set
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("AMAZING!!! Graphics..."),
            "amazing graphics"
        );
    }

    #[test]
    fn test_stop_words_and_short_tokens_removed() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("This game is terrible. Too many bugs."),
            "terrible many bugs"
        );
    }

    #[test]
    fn test_digits_and_emoji_removed() {
        let normalizer = TextNormalizer::new();
        // "no0b" loses its zero and the leftover "nob" survives the length
        // filter; the emoji vanishes entirely.
        assert_eq!(normalizer.normalize("no0b players 🎮 123"), "nob players");
    }

    #[test]
    fn test_symbol_only_text_normalizes_to_empty() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("!!! 42 ... 🚀🚀"), "");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_output_alphabet_is_lowercase_letters_and_spaces() {
        let normalizer = TextNormalizer::new();
        let out = normalizer.normalize("Best FPS I've played since 2012 — 10/10, would frag again!");
        assert!(out.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        for token in normalizer.tokenize(&out) {
            assert!(token.len() >= MIN_TOKEN_LENGTH);
            assert!(!normalizer.is_stop_word(token));
        }
    }

    #[test]
    fn test_deterministic() {
        let normalizer = TextNormalizer::new();
        let text = "Great game! I love playing this with my friends.";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }
}
