//! Seed derivation: PBKDF2-HMAC-SHA512 over a mnemonic sentence.
//!
//! `seed = PBKDF2(HMAC-SHA512, password = sentence, salt = "mnemonic" || passphrase,
//! iterations = 2048, dkLen = 64)`. Both password and salt are the raw UTF-8
//! bytes of their inputs.

use std::fmt;
use std::num::NonZeroU32;

use ring::pbkdf2;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Seed length in bytes (512 bits).
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count fixed by BIP39.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Prefix of the PBKDF2 salt; the passphrase is appended to it.
const SALT_PREFIX: &str = "mnemonic";

const ROUNDS: NonZeroU32 = match NonZeroU32::new(PBKDF2_ROUNDS) {
    Some(n) => n,
    None => panic!("PBKDF2_ROUNDS must be non-zero"),
};

/// A 64-byte BIP39 seed.
///
/// Zeroized on drop; `Debug`/`Display` are masked.
#[derive(Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    /// Derive the seed for `sentence` and `passphrase`.
    ///
    /// The sentence is used verbatim: it is neither validated against a
    /// dictionary nor normalized. Use [`crate::Mnemonic::to_seed`] to derive
    /// from a checked mnemonic.
    #[must_use]
    pub fn derive(sentence: &str, passphrase: &str) -> Self {
        let mut salt = Zeroizing::new(Vec::with_capacity(
            SALT_PREFIX.len().saturating_add(passphrase.len()),
        ));
        salt.extend_from_slice(SALT_PREFIX.as_bytes());
        salt.extend_from_slice(passphrase.as_bytes());

        let mut seed = Self {
            bytes: [0u8; SEED_LEN],
        };
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA512,
            ROUNDS,
            &salt,
            sentence.as_bytes(),
            &mut seed.bytes,
        );
        seed
    }

    /// The raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }

    /// Lowercase hex encoding of the seed (128 characters).
    #[must_use]
    pub fn to_hex(&self) -> String {
        data_encoding::HEXLOWER.encode(&self.bytes)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(***)")
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(***)")
    }
}

/// Derive the hex-encoded seed for an arbitrary sentence.
///
/// Shorthand for `Seed::derive(sentence, passphrase).to_hex()`.
#[must_use]
pub fn seed_from_sentence(sentence: &str, passphrase: &str) -> String {
    Seed::derive(sentence, passphrase).to_hex()
}
