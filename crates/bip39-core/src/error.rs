//! Error types for `bip39-core`.

use thiserror::Error;

use crate::dictionary::Language;

/// Errors produced by dictionary lookups, mnemonic encoding/decoding, and
/// configuration loading.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Bip39Error {
    /// Entropy bit length outside 128..=256 or not a multiple of 32.
    #[error("invalid entropy length: {bits} bits, expected 128-256 in steps of 32")]
    InvalidEntropyLength {
        /// The rejected bit length.
        bits: usize,
    },

    /// Sentence word count is not one of 12, 15, 18, 21, 24.
    #[error("invalid sentence length: {words} words, expected 12/15/18/21/24")]
    InvalidSentenceLength {
        /// The rejected word count.
        words: usize,
    },

    /// A sentence word is absent from the active dictionary.
    #[error("unknown word '{word}' for the {language} dictionary")]
    UnknownWord {
        /// The offending word, verbatim.
        word: String,
        /// Dictionary the lookup was made against.
        language: Language,
    },

    /// The checksum embedded in a sentence does not match its entropy.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Wordlist resource missing, unreadable, or not exactly 2048 unique words.
    #[error("dictionary load failed: {0}")]
    DictionaryLoad(String),

    /// Word index outside 0..=2047.
    #[error("word index out of range: {index}, expected 0-2047")]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// Entropy accessor called on an empty entropy buffer.
    #[error("entropy is empty")]
    EmptyEntropy,

    /// The secure random source failed to produce bytes.
    #[error("random generation failed: {0}")]
    Random(String),

    /// Bit-packing arithmetic produced an impossible layout.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),

    /// Configuration file unreadable or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}
