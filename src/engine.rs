use crate::index::WordIndex;
use crate::normalize::normalize_word;
use crate::similarity::similar;
use crate::tokenize::tokenize;

/// A detected profanity: the token's span in the original text, the
/// dictionary word it matched, and how closely.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Byte offset of the token's first character.
    pub start: usize,
    /// Byte offset one past the token's last character.
    pub end: usize,
    /// The (normalized) dictionary word that matched.
    pub word: String,
    /// Similarity ratio; `1.0` for an exact hit.
    pub score: f64,
}

/// Scans until the first match and stops. Backs the boolean verdict.
pub(crate) fn first_match(text: &str, index: &WordIndex, threshold: f64) -> Option<Match> {
    if index.is_empty() {
        return None;
    }
    tokenize(text).find_map(|token| {
        evaluate(token.text, index, threshold).map(|(word, score)| Match {
            start: token.start,
            end: token.end,
            word,
            score,
        })
    })
}

/// Scans the whole text; every match is needed for redaction, so there is no
/// short-circuit. Matches come out in text order because tokens do.
pub(crate) fn all_matches(text: &str, index: &WordIndex, threshold: f64) -> Vec<Match> {
    if index.is_empty() {
        return Vec::new();
    }
    tokenize(text)
        .filter_map(|token| {
            evaluate(token.text, index, threshold).map(|(word, score)| Match {
                start: token.start,
                end: token.end,
                word,
                score,
            })
        })
        .collect()
}

/// Decides whether one token is profane: exact lookup first (score `1.0`,
/// skipping the fuzzy pass entirely), then the best similarity ratio over the
/// length-pruned candidates. A token matches iff the best score reaches the
/// threshold, inclusively.
fn evaluate(token: &str, index: &WordIndex, threshold: f64) -> Option<(String, f64)> {
    let normalized = normalize_word(token);
    if normalized.is_empty() {
        return None;
    }
    if index.contains(&normalized) {
        return Some((normalized, 1.0));
    }
    let mut best: Option<(&str, f64)> = None;
    for candidate in index.candidates(normalized.chars().count(), threshold) {
        let score = similar(&normalized, candidate);
        if best.map_or(true, |(_, high)| score > high) {
            best = Some((candidate, score));
        }
    }
    best.filter(|&(_, score)| score >= threshold)
        .map(|(word, score)| (word.to_owned(), score))
}
