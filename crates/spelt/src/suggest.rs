// Similarity ranking of correction candidates.

use std::cmp::Ordering;

use crate::dictionary::Dictionary;

/// A ranked correction candidate.
#[derive(Debug, Clone)]
pub struct Suggestion {
    /// The suggested dictionary word.
    pub value: String,
    /// Similarity score in [0, 1]; 1.0 means identical.
    pub score: f64,
}

impl Suggestion {
    /// Create a suggestion.
    pub fn new(value: impl Into<String>, score: f64) -> Self {
        Self {
            value: value.into(),
            score,
        }
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.score == other.score
    }
}

impl Eq for Suggestion {}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suggestion {
    /// Best suggestion first: descending score, then ascending word so
    /// that ties break deterministically for a fixed dictionary.
    fn cmp(&self, other: &Self) -> Ordering {
        match other.score.partial_cmp(&self.score).unwrap_or(Ordering::Equal) {
            Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

/// Options controlling suggestion generation.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Minimum similarity score a candidate must reach.
    pub threshold: f64,
    /// Re-case suggestions to the case pattern of the misspelled word.
    pub match_case: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 3,
            threshold: 0.65,
            match_case: false,
        }
    }
}

/// Rank dictionary words by similarity to a misspelled word.
///
/// Scores the lower-cased word against every dictionary entry with a
/// normalized Levenshtein ratio, keeps candidates at or above the
/// threshold, and returns the best `max_suggestions` of them. May be
/// empty when nothing in the dictionary comes close.
pub fn suggest(word: &str, dictionary: &Dictionary, config: &SuggestConfig) -> Vec<Suggestion> {
    let needle = word.to_lowercase();

    let mut candidates: Vec<Suggestion> = dictionary
        .iter()
        .filter_map(|entry| {
            let score = strsim::normalized_levenshtein(&needle, entry);
            (score >= config.threshold).then(|| Suggestion::new(entry, score))
        })
        .collect();

    candidates.sort();
    candidates.truncate(config.max_suggestions);
    candidates
}
