//! wordwash detects and redacts profanity in free-form text across any
//! number of languages.
//!
//! Candidate words are extracted from the input, normalized (case, accents,
//! leetspeak/homoglyph confusables), and compared against per-language word
//! lists: an O(1) exact lookup first, then a Ratcliff/Obershelp similarity
//! ratio against length-compatible dictionary words, accepted at a
//! configurable threshold. Redaction masks each offending word with a repeated
//! character of the same length, leaving everything else byte-for-byte
//! intact.
//!
//! ```
//! use wordwash::ProfanityFilter;
//!
//! let filter = ProfanityFilter::new();
//! filter.add_words(["badword"]);
//!
//! assert!(filter.is_profane("this badwrd here"));
//! assert_eq!(filter.censor("this badword here"), "this ******* here");
//! ```
//!
//! Word lists normally come from a [`WordSource`] (for example a
//! [`DirSource`] directory of `<language>.txt` files) via
//! [`ProfanityFilter::initialize`], which loads each requested language
//! independently and reports per-language failures without aborting the rest.

use rustc_hash::{FxHashMap, FxHashSet};

mod engine;
mod error;
mod filter;
mod index;
mod normalize;
mod redact;
mod similarity;
mod source;
mod tokenize;

pub use engine::Match;
pub use error::Error;
pub use filter::{Filtered, LoadReport, Options, ProfanityFilter};
pub use index::CUSTOM_LANGUAGE;
pub use similarity::similar;
pub use source::{DirSource, SliceSource, WordSource};
pub use tokenize::{tokenize, Token, Tokens};

pub(crate) type Map<K, V> = FxHashMap<K, V>;
pub(crate) type Set<T> = FxHashSet<T>;

use doc_comment::doctest;
doctest!("../README.md");

#[cfg(test)]
mod tests {
    use crate::{DirSource, Error, Filtered, Options, ProfanityFilter, SliceSource};

    fn en_filter() -> ProfanityFilter {
        let filter = ProfanityFilter::new();
        filter.initialize(&SliceSource::new([("en", vec!["badword"])]), None);
        filter
    }

    #[test]
    fn verdict_and_redaction() {
        let filter = en_filter();

        assert!(filter.is_profane("this badword here"));
        assert_eq!(filter.censor("this badword here"), "this ******* here");

        // One deleted character still matches at the default threshold.
        assert!(filter.is_profane("this badwrd here"));
        assert_eq!(filter.censor("this badwrd here"), "this ****** here");
    }

    #[test]
    fn threshold_boundary() {
        let filter = en_filter();
        let fuzzy = Options {
            match_threshold: 0.8,
            replace_character: None,
        };
        let strict = Options {
            match_threshold: 0.99,
            replace_character: None,
        };
        let text = "this badwrd here";
        assert_eq!(
            filter.filter_text(text, &fuzzy).unwrap(),
            Filtered::Verdict(true)
        );
        assert_eq!(
            filter.filter_text(text, &strict).unwrap(),
            Filtered::Verdict(false)
        );
    }

    #[test]
    fn redaction_mode_finds_every_match() {
        let filter = en_filter();
        let options = Options {
            match_threshold: 0.8,
            replace_character: Some('*'),
        };
        assert_eq!(
            filter.filter_text("badword and badwrd", &options).unwrap(),
            Filtered::Redacted(String::from("******* and ******"))
        );
    }

    #[test]
    fn layout_survives_redaction() {
        let filter = en_filter();
        let text = "Badword, badword... BADWORD!\n\ttabs stay";
        let censored = filter.censor(text);
        assert_eq!(censored, "*******, *******... *******!\n\ttabs stay");
        assert_eq!(censored.chars().count(), text.chars().count());
    }

    #[test]
    fn evasive_spellings() {
        let filter = en_filter();
        assert!(filter.is_profane("b4dw0rd"));
        assert!(filter.is_profane("BÄDWÖRD"));
        assert_eq!(filter.censor("a b4dw0rd!"), "a *******!");
    }

    #[test]
    fn multiple_languages_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.txt"), "badword\n").unwrap();
        std::fs::write(dir.path().join("ru.txt"), "плохой\n").unwrap();

        let filter = ProfanityFilter::new();
        let report = filter.initialize(&DirSource::new(dir.path()), Some(&["en", "ru"]));
        assert!(report.is_complete());

        assert!(filter.is_profane("a badword"));
        assert_eq!(filter.censor("он плохой"), "он ******");
    }

    #[test]
    fn unknown_language_does_not_abort_the_rest() {
        let filter = ProfanityFilter::new();
        let report = filter.initialize(
            &SliceSource::new([("en", vec!["badword"])]),
            Some(&["de", "en"]),
        );
        assert_eq!(report.loaded, ["en"]);
        assert!(matches!(
            report.failed.as_slice(),
            [(_, Error::UnknownLanguage(_))]
        ));
        assert!(filter.is_profane("badword"));
    }

    #[test]
    fn uninitialized_filter_matches_nothing() {
        let filter = ProfanityFilter::new();
        assert!(!filter.is_profane("anything at all"));
        assert_eq!(filter.censor("anything at all"), "anything at all");
        assert!(filter.languages().is_empty());
    }
}
