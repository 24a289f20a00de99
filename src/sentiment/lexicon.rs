//! # Game Review Lexicon
//!
//! Valence lexicon for rule-based sentiment analysis of game reviews.
//! Word valences follow the VADER convention: raw scores in [-4, 4],
//! negations flip-and-damp, intensifiers add a fixed boost in the
//! direction of the modified word's sign.

use std::collections::HashMap;

/// Valence added (or subtracted) by an intensifying booster word
pub const BOOST_INCREMENT: f64 = 0.293;

/// Damping factor applied to a valence that follows a negation
pub const NEGATION_SCALAR: f64 = -0.74;

/// Game review sentiment lexicon
///
/// Contains word-valence mappings for the vocabulary of game reviews,
/// plus the negation and intensifier word lists the scorer consults.
pub struct GameLexicon {
    /// Word to raw valence mapping, [-4, 4]
    valences: HashMap<&'static str, f64>,
    /// Negation words
    negations: Vec<&'static str>,
    /// Intensifier word to boost mapping
    boosters: HashMap<&'static str, f64>,
}

impl Default for GameLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLexicon {
    /// Create a new lexicon with the built-in vocabulary
    pub fn new() -> Self {
        let positive_words = [
            ("great", 3.1),
            ("love", 3.2),
            ("loved", 2.9),
            ("amazing", 2.8),
            ("awesome", 3.1),
            ("excellent", 2.7),
            ("best", 3.2),
            ("good", 1.9),
            ("fun", 2.3),
            ("enjoy", 2.0),
            ("enjoyable", 1.9),
            ("enjoyed", 1.9),
            ("recommend", 1.5),
            ("recommended", 1.5),
            ("smooth", 1.5),
            ("beautiful", 2.9),
            ("gorgeous", 2.8),
            ("perfect", 2.7),
            ("solid", 1.5),
            ("worth", 2.2),
            ("favorite", 2.0),
            ("favourite", 2.0),
            ("addictive", 1.2),
            ("polished", 1.7),
            ("masterpiece", 3.4),
            ("decent", 1.1),
            ("okay", 0.9),
            ("improved", 1.6),
            ("friendly", 2.2),
            ("happy", 2.7),
            ("impressive", 2.4),
            ("satisfying", 2.1),
            ("immersive", 1.9),
            ("rich", 1.6),
            ("deep", 1.2),
            ("balanced", 1.3),
            ("stable", 1.1),
            ("fair", 1.4),
            ("free", 1.2),
            ("win", 1.9),
        ];

        let negative_words = [
            ("terrible", -2.1),
            ("awful", -2.0),
            ("horrible", -2.5),
            ("bad", -2.5),
            ("worst", -3.1),
            ("boring", -1.3),
            ("broken", -1.6),
            ("bug", -1.3),
            ("bugs", -1.3),
            ("buggy", -1.9),
            ("glitch", -1.3),
            ("glitches", -1.3),
            ("lag", -1.4),
            ("laggy", -1.6),
            ("crash", -1.9),
            ("crashes", -1.9),
            ("waste", -1.8),
            ("trash", -2.2),
            ("garbage", -2.2),
            ("unplayable", -2.6),
            ("unbalanced", -1.4),
            ("toxic", -2.5),
            ("cheater", -2.1),
            ("cheaters", -2.1),
            ("hacker", -1.9),
            ("hackers", -1.9),
            ("disappointing", -2.0),
            ("disappointed", -1.9),
            ("disappointment", -2.0),
            ("annoying", -1.7),
            ("frustrating", -1.9),
            ("problem", -1.4),
            ("problems", -1.4),
            ("issue", -1.1),
            ("issues", -1.1),
            ("dead", -1.7),
            ("abandoned", -1.6),
            ("greedy", -2.1),
            ("scam", -2.6),
            ("refund", -1.3),
            ("refunded", -1.3),
            ("ruined", -2.1),
            ("repetitive", -1.1),
            ("grind", -0.9),
            ("grindy", -1.2),
            ("pain", -1.8),
            ("hate", -2.7),
            ("hated", -2.5),
            ("lose", -1.6),
            ("fail", -2.0),
            ("fails", -2.0),
        ];

        let mut valences = HashMap::new();
        for (word, valence) in positive_words {
            valences.insert(word, valence);
        }
        for (word, valence) in negative_words {
            valences.insert(word, valence);
        }

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "nowhere",
            "none", "cannot", "cant", "dont", "doesnt", "didnt", "wont",
            "wouldnt", "shouldnt", "couldnt", "isnt", "arent", "wasnt",
            "werent", "hardly", "barely", "scarcely", "without",
        ];

        let mut boosters = HashMap::new();
        for word in [
            "very", "really", "extremely", "incredibly", "absolutely",
            "completely", "totally", "truly", "highly", "super", "insanely",
        ] {
            boosters.insert(word, BOOST_INCREMENT);
        }
        for word in ["slightly", "somewhat", "kinda", "marginally", "mildly"] {
            boosters.insert(word, -BOOST_INCREMENT);
        }

        Self {
            valences,
            negations,
            boosters,
        }
    }

    /// Get raw valence for a word, if it carries sentiment
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }

    /// Get the boost an intensifier contributes, if any
    pub fn boost(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_valences() {
        let lexicon = GameLexicon::new();
        assert!(lexicon.valence("great").unwrap() > 0.0);
        assert!(lexicon.valence("amazing").unwrap() > 0.0);
    }

    #[test]
    fn test_negative_valences() {
        let lexicon = GameLexicon::new();
        assert!(lexicon.valence("terrible").unwrap() < 0.0);
        assert!(lexicon.valence("bugs").unwrap() < 0.0);
    }

    #[test]
    fn test_valences_within_vader_range() {
        let lexicon = GameLexicon::new();
        for word in ["masterpiece", "worst", "okay", "grind"] {
            let v = lexicon.valence(word).unwrap();
            assert!((-4.0..=4.0).contains(&v));
        }
    }

    #[test]
    fn test_neutral_words_have_no_valence() {
        let lexicon = GameLexicon::new();
        assert!(lexicon.valence("keyboard").is_none());
        assert!(lexicon.valence("players").is_none());
    }

    #[test]
    fn test_negations_and_boosters() {
        let lexicon = GameLexicon::new();
        assert!(lexicon.is_negation("never"));
        assert!(!lexicon.is_negation("great"));
        assert!(lexicon.boost("really").unwrap() > 0.0);
        assert!(lexicon.boost("slightly").unwrap() < 0.0);
    }
}
