//! `bip39-core`: BIP39 mnemonic codes.
//!
//! Converts between random entropy, checksummed word sentences drawn from a
//! 2048-word dictionary, and the 64-byte seed used for deterministic wallet
//! key derivation. Results are byte-identical to every other conforming
//! BIP39 implementation.
//!
//! ```
//! use bip39_core::Mnemonic;
//!
//! let mnemonic = Mnemonic::from_entropy(&[0x7f; 16], "TREZOR")?;
//! assert_eq!(
//!     mnemonic.sentence()?,
//!     "legal winner thank year wave sausage worth useful legal winner thank yellow"
//! );
//!
//! let restored = Mnemonic::from_sentence(mnemonic.sentence()?, "TREZOR")?;
//! assert_eq!(restored.entropy_hex()?, "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f");
//! # Ok::<(), bip39_core::Bip39Error>(())
//! ```
//!
//! Zero network, zero async. The only I/O is reading an optional wordlist
//! or configuration file.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod dictionary;
pub mod entropy;

pub mod mnemonic;
pub mod seed;

pub mod config;

pub use config::Bip39Config;
pub use dictionary::{index_to_word, word_to_index, Dictionary, Language, WORDLIST_SIZE};
pub use entropy::{validate_entropy_bits, word_count_for_bits, VALID_WORD_COUNTS};
pub use error::Bip39Error;
pub use mnemonic::{checksum, Mnemonic};
pub use seed::{seed_from_sentence, Seed, PBKDF2_ROUNDS, SEED_LEN};
