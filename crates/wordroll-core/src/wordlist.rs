//! Diceware word list loading and lookup.
//!
//! The list is supplied as a text file in the EFF large-wordlist format
//! (`11111<TAB>abacus`, one entry per line) or as bare words in dice order.
//! It is parsed once at startup and shared read-only afterwards.

use std::fs;
use std::path::Path;

use crate::convert::DiceKey;
use crate::error::PassphraseError;

/// Number of words in a five-dice word list (6^5).
pub const WORDLIST_SIZE: usize = 7776;

/// An immutable list of exactly [`WORDLIST_SIZE`] words in dice-key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Box<[String]>,
}

impl Wordlist {
    /// Read and parse a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::Wordlist`] if the file cannot be read or
    /// its contents fail [`Wordlist::parse`].
    pub fn load(path: &Path) -> Result<Self, PassphraseError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            PassphraseError::Wordlist(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&raw)
    }

    /// Parse a newline-delimited word list.
    ///
    /// Each non-blank line is either `<key> <word>` or `<word>`; the two
    /// forms cannot be mixed. Keyed lines must be in dice order, i.e. the
    /// key on line `i` is the dice key of index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::Wordlist`] on malformed lines, out-of-order
    /// keys, duplicate words or a word count other than [`WORDLIST_SIZE`].
    pub fn parse(raw: &str) -> Result<Self, PassphraseError> {
        let mut words: Vec<String> = Vec::with_capacity(WORDLIST_SIZE);
        let mut keyed: Option<bool> = None;

        for (lineno, line) in raw.lines().enumerate().map(|(i, l)| (i.saturating_add(1), l)) {
            let mut fields = line.split_whitespace();
            let (key, word) = match (fields.next(), fields.next(), fields.next()) {
                (None, _, _) => continue,
                (Some(word), None, _) => (None, word),
                (Some(key), Some(word), None) => (Some(key), word),
                (Some(_), Some(_), Some(_)) => {
                    return Err(PassphraseError::Wordlist(format!(
                        "line {lineno}: expected `<key> <word>` or `<word>`"
                    )));
                }
            };

            if *keyed.get_or_insert(key.is_some()) != key.is_some() {
                return Err(PassphraseError::Wordlist(format!(
                    "line {lineno}: keyed and bare entries cannot be mixed"
                )));
            }

            if let Some(key) = key {
                let expected = u16::try_from(words.len())
                    .ok()
                    .and_then(|i| DiceKey::from_index(i).ok())
                    .ok_or_else(|| {
                        PassphraseError::Wordlist(format!(
                            "line {lineno}: more than {WORDLIST_SIZE} entries"
                        ))
                    })?;
                let found = DiceKey::parse(key).map_err(|e| {
                    PassphraseError::Wordlist(format!("line {lineno}: {e}"))
                })?;
                if found != expected {
                    return Err(PassphraseError::Wordlist(format!(
                        "line {lineno}: key {found} out of order, expected {expected}"
                    )));
                }
            }

            words.push(word.to_string());
        }

        Self::from_words(words)
    }

    /// Build a list from words already in dice order.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::Wordlist`] if there are not exactly
    /// [`WORDLIST_SIZE`] words, or a word is empty, contains whitespace or
    /// appears twice.
    pub fn from_words(words: Vec<String>) -> Result<Self, PassphraseError> {
        if words.len() != WORDLIST_SIZE {
            return Err(PassphraseError::Wordlist(format!(
                "word list must contain exactly {WORDLIST_SIZE} words, got {}",
                words.len()
            )));
        }
        if let Some(i) = words
            .iter()
            .position(|w| w.is_empty() || w.chars().any(char::is_whitespace))
        {
            return Err(PassphraseError::Wordlist(format!(
                "word at index {i} is empty or contains whitespace"
            )));
        }

        let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(PassphraseError::Wordlist(format!(
                "duplicate word {:?}",
                pair[0]
            )));
        }

        Ok(Self {
            words: words.into_boxed_slice(),
        })
    }

    /// Resolve a dice key.
    #[must_use]
    pub fn get(&self, key: DiceKey) -> Option<&str> {
        self.get_index(usize::from(key.index()))
    }

    /// Resolve a zero-based position (`0..7776`).
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Whether `word` is one of the entries.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of entries; always [`WORDLIST_SIZE`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in dice order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
