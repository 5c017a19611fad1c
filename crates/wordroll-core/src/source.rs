//! Local CSPRNG random source.
//!
//! Each number is drawn from 16 bits of `OsRng` output and reduced modulo
//! [`LOCAL_MODULUS`]. Because 65536 is not a multiple of 7776 the first
//! 3328 indices are hit 9 times per 65536 draws instead of 8. That bias is
//! accepted; no rejection sampling is done.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::PassphraseError;
use crate::wordlist::WORDLIST_SIZE;

/// Modulus applied to each 16-bit draw; covers every index `0..=7775`.
#[allow(clippy::cast_possible_truncation)]
pub const LOCAL_MODULUS: u16 = WORDLIST_SIZE as u16;

/// Synchronous random source backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocalSource;

impl LocalSource {
    /// Produce `count` indices in `0..=7775`.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::SourceUnavailable`] if the OS generator
    /// fails. No partial output is returned.
    pub fn produce(self, count: usize) -> Result<Vec<u16>, PassphraseError> {
        let len = count.checked_mul(2).ok_or_else(|| {
            PassphraseError::SourceUnavailable(format!("cannot draw {count} numbers"))
        })?;
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| PassphraseError::SourceUnavailable(format!("CSPRNG fill failed: {e}")))?;

        let numbers: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]) % LOCAL_MODULUS)
            .collect();
        bytes.zeroize();
        Ok(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::MAX_INDEX;

    #[test]
    fn produces_requested_count() {
        for count in [0, 1, 6, 1000] {
            assert_eq!(LocalSource.produce(count).unwrap().len(), count);
        }
    }

    #[test]
    fn values_in_range() {
        let numbers = LocalSource.produce(10_000).unwrap();
        assert!(numbers.iter().all(|&n| n <= MAX_INDEX));
    }

    #[test]
    fn modulus_reaches_last_index() {
        assert_eq!(u16::MAX % LOCAL_MODULUS, 3327);
        assert_eq!(LOCAL_MODULUS - 1, MAX_INDEX);
    }

    #[test]
    fn consecutive_draws_differ() {
        let a = LocalSource.produce(32).unwrap();
        let b = LocalSource.produce(32).unwrap();
        assert_ne!(a, b, "two 32-number draws collided");
    }
}
