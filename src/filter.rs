use crate::engine::{all_matches, first_match, Match};
use crate::index::{WordIndex, CUSTOM_LANGUAGE};
use crate::redact::redact;
use crate::source::WordSource;
use crate::Error;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Per-call knobs for [`ProfanityFilter::filter_text`], validated eagerly
/// before any scanning begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Minimum similarity ratio, inclusive, for a fuzzy match to count.
    pub match_threshold: f64,
    /// `Some(mask)` redacts; `None` asks for a boolean verdict.
    pub replace_character: Option<char>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            match_threshold: 0.8,
            replace_character: None,
        }
    }
}

impl Options {
    fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(Error::InvalidThreshold(self.match_threshold));
        }
        Ok(())
    }
}

/// What [`ProfanityFilter::filter_text`] produced: a verdict in boolean mode,
/// the rebuilt text in redaction mode.
#[derive(Clone, Debug, PartialEq)]
pub enum Filtered {
    Verdict(bool),
    Redacted(String),
}

/// The outcome of [`ProfanityFilter::initialize`]. Loading is fail-soft: a
/// language that cannot be loaded lands in `failed` with its error, and every
/// other language still loads.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Languages whose word lists are now in the index, in load order.
    pub loaded: Vec<String>,
    /// Languages that could not be loaded, with the reason.
    pub failed: Vec<(String, Error)>,
}

impl LoadReport {
    /// True when every requested language loaded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A multilingual profanity filter.
///
/// Construction is cheap and does no I/O; [`initialize`](Self::initialize)
/// then pulls word lists from a [`WordSource`] for the languages you pick.
/// After that the filter is read-only apart from
/// [`add_words`](Self::add_words), and all calls are safe to make
/// concurrently from multiple threads.
///
/// ```
/// use wordwash::{Filtered, Options, ProfanityFilter};
///
/// let filter = ProfanityFilter::new();
/// filter.add_words(["badword"]);
///
/// assert!(filter.is_profane("this badword here"));
/// assert!(filter.is_profane("this badwrd here")); // fuzzy, one deletion
/// assert_eq!(filter.censor("this badword here"), "this ******* here");
///
/// let outcome = filter
///     .filter_text("clean text", &Options::default())
///     .unwrap();
/// assert_eq!(outcome, Filtered::Verdict(false));
/// ```
#[derive(Debug)]
pub struct ProfanityFilter {
    index: RwLock<WordIndex>,
    match_threshold: f64,
    censor_replacement: char,
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfanityFilter {
    /// An empty filter with the default threshold (`0.8`) and mask (`'*'`).
    pub fn new() -> Self {
        Self {
            index: RwLock::new(WordIndex::default()),
            match_threshold: Options::default().match_threshold,
            censor_replacement: '*',
        }
    }

    /// Sets the default match threshold used by [`is_profane`](Self::is_profane)
    /// and [`censor`](Self::censor). Values are clamped to `0.0..=1.0`.
    pub fn with_match_threshold(&mut self, match_threshold: f64) -> &mut Self {
        self.match_threshold = match_threshold.clamp(0.0, 1.0);
        self
    }

    /// Sets the mask character used by [`censor`](Self::censor).
    pub fn with_censor_replacement(&mut self, censor_replacement: char) -> &mut Self {
        self.censor_replacement = censor_replacement;
        self
    }

    /// Loads word lists from `source` and replaces the filter's index with
    /// them. `languages` picks the active set; `None` takes everything the
    /// source offers.
    ///
    /// Fail-soft: an unknown language code or an unreadable list is logged,
    /// recorded in the returned [`LoadReport`], and does not stop the other
    /// languages from loading. Re-initializing discards previous contents,
    /// including custom words.
    pub fn initialize(
        &self,
        source: &dyn WordSource,
        languages: Option<&[&str]>,
    ) -> LoadReport {
        let available = source.languages();
        let requested: Vec<String> = match languages {
            Some(languages) => languages.iter().map(|&l| l.to_owned()).collect(),
            None => available.clone(),
        };

        let mut report = LoadReport::default();
        let mut index = WordIndex::default();
        for language in requested {
            if !available.contains(&language) {
                log::warn!("language '{}' is not supported by the word source", language);
                report
                    .failed
                    .push((language.clone(), Error::UnknownLanguage(language)));
                continue;
            }
            match source.load(&language) {
                Ok(words) => {
                    for word in &words {
                        index.insert(&language, word);
                    }
                    log::debug!("loaded {} words for '{}'", words.len(), language);
                    report.loaded.push(language);
                }
                Err(e) => {
                    log::warn!("skipping language '{}': {}", language, e);
                    report.failed.push((language, e));
                }
            }
        }
        *self.write_index() = index;
        report
    }

    /// Adds custom words to the synthetic `"custom"` language bucket, which
    /// is always active. The update is atomic relative to concurrent
    /// [`filter_text`](Self::filter_text) calls: readers see either the old
    /// index or the new one, never a partial insertion.
    pub fn add_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = self.write_index();
        for word in words {
            index.insert(CUSTOM_LANGUAGE, word.as_ref());
        }
    }

    /// Language codes currently in the index, sorted; includes `"custom"`
    /// once [`add_words`](Self::add_words) has been used.
    pub fn languages(&self) -> Vec<String> {
        self.read_index().languages()
    }

    /// Boolean verdict with the filter's default threshold. Stops scanning at
    /// the first match.
    pub fn is_profane(&self, text: &str) -> bool {
        first_match(text, &self.read_index(), self.match_threshold).is_some()
    }

    /// Redacts every match with the configured mask, preserving layout.
    /// Clean text comes back unchanged.
    pub fn censor(&self, text: &str) -> String {
        let index = self.read_index();
        let matches = all_matches(text, &index, self.match_threshold);
        redact(text, &matches, self.censor_replacement)
    }

    /// Like [`censor`](Self::censor) with an explicit mask, which must be
    /// exactly one character.
    pub fn redact(&self, text: &str, mask: &str) -> Result<String, Error> {
        let mask = single_char(mask)?;
        let index = self.read_index();
        let matches = all_matches(text, &index, self.match_threshold);
        Ok(redact(text, &matches, mask))
    }

    /// The general entry point: a boolean verdict when
    /// `options.replace_character` is `None`, the redacted text otherwise.
    /// Options are validated before any scanning.
    pub fn filter_text(&self, text: &str, options: &Options) -> Result<Filtered, Error> {
        options.validate()?;
        let index = self.read_index();
        match options.replace_character {
            None => Ok(Filtered::Verdict(
                first_match(text, &index, options.match_threshold).is_some(),
            )),
            Some(mask) => {
                let matches = all_matches(text, &index, options.match_threshold);
                Ok(Filtered::Redacted(redact(text, &matches, mask)))
            }
        }
    }

    /// Every match in text order, with the dictionary word and similarity
    /// score. This is the full scan; nothing short-circuits.
    pub fn find_matches(&self, text: &str, match_threshold: f64) -> Result<Vec<Match>, Error> {
        if !(0.0..=1.0).contains(&match_threshold) {
            return Err(Error::InvalidThreshold(match_threshold));
        }
        Ok(all_matches(text, &self.read_index(), match_threshold))
    }

    fn read_index(&self) -> RwLockReadGuard<'_, WordIndex> {
        match self.index.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_index(&self) -> RwLockWriteGuard<'_, WordIndex> {
        match self.index.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn single_char(mask: &str) -> Result<char, Error> {
    let mut chars = mask.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidReplacement),
    }
}
