//! `wordroll-core`: pure diceware primitives for wordroll.
//!
//! No network, no async: the word list, dice-key conversion, the local
//! CSPRNG source and passphrase assembly. The HTTP shell and the remote
//! random source build on top of this crate.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod convert;
pub mod wordlist;

pub mod source;

pub mod passphrase;
pub mod sanitize;

pub use convert::{convert, DiceKey, DICE_BASE, DICE_WIDTH, MAX_INDEX};
pub use error::PassphraseError;
pub use passphrase::{assemble, validate_word_count, SEPARATOR};
pub use sanitize::{
    parse_count, sanitize_count, DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT,
};
pub use source::{LocalSource, LOCAL_MODULUS};
pub use wordlist::{Wordlist, WORDLIST_SIZE};
