//! Error types for `wordroll-core`.

use thiserror::Error;

/// Errors produced while turning random numbers into a passphrase.
#[derive(Debug, Error)]
pub enum PassphraseError {
    /// The OS secure random number generator could not be read.
    #[error("secure randomness unavailable: {0}")]
    SourceUnavailable(String),

    /// A value needs more digits than the requested fixed width.
    #[error("value {value} does not fit in {width} base-{base} digits")]
    OutOfRange {
        /// The value being converted.
        value: u32,
        /// Numeric base of the conversion.
        base: u32,
        /// Fixed output width in digits.
        width: usize,
    },

    /// A string is not a five-digit dice key (digits `1`-`6`).
    #[error("invalid dice key: {0:?}")]
    InvalidKey(String),

    /// A dice key resolved to nothing in the word list.
    #[error("no word-list entry for key {0}")]
    LookupMiss(String),

    /// Requested word count is outside the accepted range.
    #[error("word count must be between {min} and {max}, got {got}")]
    InvalidWordCount {
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
        /// Count that was requested.
        got: usize,
    },

    /// A random source returned fewer (or more) numbers than requested.
    #[error("random source returned {got} numbers, expected {expected}")]
    ShortRead {
        /// Count that was requested.
        expected: usize,
        /// Count that was returned.
        got: usize,
    },

    /// The word list could not be read or failed validation.
    #[error("word list error: {0}")]
    Wordlist(String),
}
