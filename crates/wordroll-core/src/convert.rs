//! Fixed-width base conversion and five-digit dice keys.
//!
//! A random index in `0..=7775` becomes a [`DiceKey`] by writing it in
//! base 6 with five digits and shifting every digit up by one, so the key
//! reads like five rolls of a physical die: `0` is `11111`, `7775` is
//! `66666`.

use std::fmt;

use crate::error::PassphraseError;

/// Base of a dice roll.
pub const DICE_BASE: u32 = 6;

/// Number of rolls per word.
pub const DICE_WIDTH: usize = 5;

/// Largest index addressable by a dice key (`66666`).
pub const MAX_INDEX: u16 = 7775;

/// Write `value` in `base` as exactly `width` digits, most significant first.
///
/// Every digit (including left padding, which is a zero digit) is passed
/// through `offset` before being rendered in decimal and concatenated.
///
/// # Errors
///
/// Returns [`PassphraseError::OutOfRange`] if `base < 2` or if `value` needs
/// more than `width` digits.
pub fn convert(
    value: u32,
    base: u32,
    width: usize,
    offset: impl Fn(u32) -> u32,
) -> Result<String, PassphraseError> {
    let out_of_range = || PassphraseError::OutOfRange { value, base, width };
    if base < 2 {
        return Err(out_of_range());
    }

    // Least significant digit first.
    let mut digits: Vec<u32> = Vec::with_capacity(width);
    let mut rest = value;
    while rest > 0 {
        let (Some(digit), Some(next)) = (rest.checked_rem(base), rest.checked_div(base)) else {
            return Err(out_of_range());
        };
        digits.push(digit);
        rest = next;
    }
    if digits.len() > width {
        return Err(out_of_range());
    }
    digits.resize(width, 0);

    Ok(digits.iter().rev().map(|&d| offset(d).to_string()).collect())
}

/// A five-digit dice key such as `"35162"`, each digit in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceKey([u8; DICE_WIDTH]);

impl DiceKey {
    /// Convert a word-list index into its dice key.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::OutOfRange`] if `index > MAX_INDEX`.
    pub fn from_index(index: u16) -> Result<Self, PassphraseError> {
        if index > MAX_INDEX {
            return Err(PassphraseError::OutOfRange {
                value: u32::from(index),
                base: DICE_BASE,
                width: DICE_WIDTH,
            });
        }
        let rendered = convert(u32::from(index), DICE_BASE, DICE_WIDTH, |d| {
            d.saturating_add(1)
        })?;
        Self::parse(&rendered)
    }

    /// Parse a key written as five ASCII digits in `1..=6`.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::InvalidKey`] for any other input.
    pub fn parse(s: &str) -> Result<Self, PassphraseError> {
        let bytes: [u8; DICE_WIDTH] = s
            .as_bytes()
            .try_into()
            .map_err(|_| PassphraseError::InvalidKey(s.to_string()))?;
        if !bytes.iter().all(|b| (b'1'..=b'6').contains(b)) {
            return Err(PassphraseError::InvalidKey(s.to_string()));
        }
        Ok(Self(bytes))
    }

    /// The zero-based word-list position this key addresses.
    #[must_use]
    pub fn index(self) -> u16 {
        self.0.iter().fold(0u16, |acc, &b| {
            acc.saturating_mul(6)
                .saturating_add(u16::from(b.saturating_sub(b'1')))
        })
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for DiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
