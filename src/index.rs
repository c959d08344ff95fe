use crate::normalize::normalize_word;
use crate::{Map, Set};

/// Language bucket used for words supplied at runtime via
/// [`ProfanityFilter::add_words`](crate::ProfanityFilter::add_words).
pub const CUSTOM_LANGUAGE: &str = "custom";

/// The in-memory dictionary the match engine consults: per-language sets of
/// normalized words, a merged set for O(1) exact lookup across the active
/// languages, and a by-length view for the fuzzy pass.
///
/// Built once at initialization and only ever extended afterwards; the filter
/// wraps it in a lock so extensions are atomic relative to readers.
#[derive(Debug, Default)]
pub(crate) struct WordIndex {
    buckets: Map<String, Set<String>>,
    merged: Set<String>,
    by_len: Map<usize, Vec<String>>,
    max_len: usize,
}

impl WordIndex {
    /// Inserts a word into a language bucket, normalizing it first.
    /// Duplicate or empty-after-normalization words are dropped.
    pub fn insert(&mut self, language: &str, word: &str) {
        let word = normalize_word(word.trim());
        if word.is_empty() {
            return;
        }
        self.buckets
            .entry(language.to_owned())
            .or_default()
            .insert(word.clone());
        if self.merged.insert(word.clone()) {
            let len = word.chars().count();
            self.max_len = self.max_len.max(len);
            self.by_len.entry(len).or_default().push(word);
        }
    }

    /// Exact lookup of an already-normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.merged.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    /// Language codes with at least one word, sorted for reproducibility.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.buckets.keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Words whose similarity to a token of `token_len` characters could
    /// still reach `threshold`. A candidate of length `m` can score at most
    /// `2·min(n, m) / (n + m)`, so lengths outside the band are skipped
    /// without being scored. The bound is exact: pruning never changes which
    /// tokens match, it only avoids hopeless comparisons.
    pub fn candidates(&self, token_len: usize, threshold: f64) -> impl Iterator<Item = &str> + '_ {
        let n = token_len as f64;
        let shortest = if threshold <= 0.0 {
            1
        } else {
            ((threshold * n) / (2.0 - threshold)).ceil().max(1.0) as usize
        };
        let longest = if threshold <= 0.0 {
            self.max_len
        } else {
            self.max_len.min((n * (2.0 - threshold) / threshold) as usize)
        };
        (shortest..=longest)
            .filter_map(move |len| self.by_len.get(&len))
            .flatten()
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::WordIndex;

    fn index(words: &[&str]) -> WordIndex {
        let mut index = WordIndex::default();
        for word in words {
            index.insert("en", word);
        }
        index
    }

    #[test]
    fn exact_lookup_is_normalized() {
        let index = index(&["BadWord"]);
        assert!(index.contains("badword"));
        assert!(!index.contains("BadWord"));
    }

    #[test]
    fn blank_words_are_dropped() {
        let index = index(&["", "   "]);
        assert!(index.is_empty());
    }

    #[test]
    fn languages_are_sorted() {
        let mut index = WordIndex::default();
        index.insert("ru", "плохой");
        index.insert("en", "badword");
        assert_eq!(index.languages(), ["en", "ru"]);
    }

    #[test]
    fn candidates_respect_length_band() {
        let index = index(&["ab", "abcd", "abcdefgh"]);
        // Token of 4 chars at threshold 0.8: lengths 3..=6 qualify.
        let close: Vec<&str> = index.candidates(4, 0.8).collect();
        assert_eq!(close, ["abcd"]);
        // Threshold 0 prunes nothing.
        let all: Vec<&str> = index.candidates(4, 0.0).collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn duplicate_words_counted_once() {
        let index = index(&["badword", "BADWORD"]);
        assert_eq!(index.candidates(7, 0.0).count(), 1);
    }
}
