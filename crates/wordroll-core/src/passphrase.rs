//! Passphrase assembly: random indices → dice keys → words → `word-word-word`.

use crate::convert::DiceKey;
use crate::error::PassphraseError;
use crate::sanitize::{MAX_WORD_COUNT, MIN_WORD_COUNT};
use crate::wordlist::Wordlist;

/// Separator between words.
pub const SEPARATOR: &str = "-";

/// Check that `count` is within [`MIN_WORD_COUNT`]..=[`MAX_WORD_COUNT`].
///
/// # Errors
///
/// Returns [`PassphraseError::InvalidWordCount`] otherwise.
pub fn validate_word_count(count: usize) -> Result<(), PassphraseError> {
    if count < MIN_WORD_COUNT || count > MAX_WORD_COUNT {
        return Err(PassphraseError::InvalidWordCount {
            min: MIN_WORD_COUNT,
            max: MAX_WORD_COUNT,
            got: count,
        });
    }
    Ok(())
}

/// Resolve `numbers` through `wordlist` and join them, preserving order.
///
/// Repeated numbers produce repeated words.
///
/// # Errors
///
/// - [`PassphraseError::OutOfRange`] if a number exceeds `7775`
/// - [`PassphraseError::LookupMiss`] if a key has no entry
pub fn assemble(numbers: &[u16], wordlist: &Wordlist) -> Result<String, PassphraseError> {
    let words = numbers
        .iter()
        .map(|&n| {
            let key = DiceKey::from_index(n)?;
            wordlist
                .get(key)
                .ok_or_else(|| PassphraseError::LookupMiss(key.to_string()))
        })
        .collect::<Result<Vec<&str>, _>>()?;
    Ok(words.join(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::DEFAULT_WORD_COUNT;
    use crate::source::LocalSource;
    use crate::wordlist::WORDLIST_SIZE;
    use std::collections::HashSet;

    fn wordlist() -> Wordlist {
        Wordlist::from_words((0..WORDLIST_SIZE).map(|i| format!("w{i}")).collect()).unwrap()
    }

    fn roll(count: usize, list: &Wordlist) -> String {
        assemble(&LocalSource.produce(count).unwrap(), list).unwrap()
    }

    #[test]
    fn default_passphrase() {
        let list = wordlist();
        let pp = roll(DEFAULT_WORD_COUNT, &list);
        let words: Vec<&str> = pp.split('-').collect();
        assert_eq!(words.len(), DEFAULT_WORD_COUNT);
        assert!(words.iter().all(|w| list.contains(w)));
    }

    #[test]
    fn min_and_max_counts() {
        let list = wordlist();
        assert_eq!(roll(MIN_WORD_COUNT, &list).split('-').count(), 1);
        assert_eq!(
            roll(MAX_WORD_COUNT, &list).split('-').count(),
            MAX_WORD_COUNT
        );
    }

    #[test]
    fn zero_word_count_rejected() {
        let err = validate_word_count(0).unwrap_err().to_string();
        assert!(err.contains("word count must be between"), "{err}");
    }

    #[test]
    fn above_max_word_count_rejected() {
        assert!(validate_word_count(MAX_WORD_COUNT + 1).is_err());
        assert!(validate_word_count(MIN_WORD_COUNT).is_ok());
        assert!(validate_word_count(MAX_WORD_COUNT).is_ok());
    }

    #[test]
    fn assemble_preserves_order_and_repeats() {
        let pp = assemble(&[0, 7775, 100, 0], &wordlist()).unwrap();
        assert_eq!(pp, "w0-w7775-w100-w0");
    }

    #[test]
    fn assemble_empty_is_empty() {
        assert_eq!(assemble(&[], &wordlist()).unwrap(), "");
    }

    #[test]
    fn assemble_rejects_out_of_range() {
        let err = assemble(&[1, 7776], &wordlist()).unwrap_err();
        assert!(matches!(err, PassphraseError::OutOfRange { value: 7776, .. }));
    }

    #[test]
    fn uniqueness_passphrase() {
        let list = wordlist();
        let passphrases: HashSet<String> = (0..100)
            .map(|_| roll(5, &list))
            .collect();
        assert_eq!(passphrases.len(), 100, "generated duplicate passphrases");
    }
}
