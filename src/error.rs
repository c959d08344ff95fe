use std::io;
use thiserror::Error;

/// Everything that can go wrong while configuring or feeding the filter.
///
/// "No profanity found" is a normal negative result, never an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested language code is not offered by the word source.
    #[error("language '{0}' is not supported")]
    UnknownLanguage(String),

    /// A word list existed but could not be read. Reported per language;
    /// other languages still load.
    #[error("failed to load word list for '{language}'")]
    Load {
        language: String,
        #[source]
        source: io::Error,
    },

    /// The match threshold must lie in `0.0..=1.0`.
    #[error("match threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),

    /// The replacement mask must be exactly one character.
    #[error("replacement mask must be a single character")]
    InvalidReplacement,
}
