//! Entropy sizing rules and secure random entropy.
//!
//! BIP39 entropy (`ENT`) is 128–256 bits in steps of 32. A checksum of
//! `ENT / 32` bits is appended, and the total is split into 11-bit words:
//!
//! | ENT | CS | ENT+CS | words |
//! |-----|----|--------|-------|
//! | 128 | 4  | 132    | 12    |
//! | 160 | 5  | 165    | 15    |
//! | 192 | 6  | 198    | 18    |
//! | 224 | 7  | 231    | 21    |
//! | 256 | 8  | 264    | 24    |

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::Bip39Error;

/// Bits encoded by a single word.
pub const WORD_BITS: usize = 11;

/// Minimum entropy length in bits.
pub const MIN_ENTROPY_BITS: usize = 128;

/// Maximum entropy length in bits.
pub const MAX_ENTROPY_BITS: usize = 256;

/// Entropy length must be a multiple of this many bits.
pub const ENTROPY_BITS_STEP: usize = 32;

/// Valid BIP39 mnemonic word counts.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Check an entropy bit length against the BIP39 size rule.
///
/// # Errors
///
/// Returns [`Bip39Error::InvalidEntropyLength`] unless
/// `128 <= bits <= 256` and `bits % 32 == 0`.
pub fn validate_entropy_bits(bits: usize) -> Result<(), Bip39Error> {
    if !(MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&bits)
        || !bits.is_multiple_of(ENTROPY_BITS_STEP)
    {
        return Err(Bip39Error::InvalidEntropyLength { bits });
    }
    Ok(())
}

/// Checksum length in bits for `entropy_bits` of entropy.
#[must_use]
pub const fn checksum_bits_for(entropy_bits: usize) -> usize {
    entropy_bits / ENTROPY_BITS_STEP
}

/// Number of words a sentence encoding `entropy_bits` of entropy has.
///
/// # Errors
///
/// Returns [`Bip39Error::InvalidEntropyLength`] for a bit length that
/// fails [`validate_entropy_bits`].
pub fn word_count_for_bits(entropy_bits: usize) -> Result<usize, Bip39Error> {
    validate_entropy_bits(entropy_bits)?;
    // Bounded by MAX_ENTROPY_BITS above.
    #[allow(clippy::arithmetic_side_effects)]
    let total = entropy_bits + checksum_bits_for(entropy_bits);
    Ok(total / WORD_BITS)
}

/// Entropy bit length implied by a sentence of `word_count` words.
///
/// Solves `E + E / 32 = word_count * 11`, i.e. `E = word_count * 11 * 32 / 33`.
///
/// # Errors
///
/// Returns [`Bip39Error::InvalidSentenceLength`] unless `word_count` is one
/// of [`VALID_WORD_COUNTS`].
pub fn entropy_bits_for_word_count(word_count: usize) -> Result<usize, Bip39Error> {
    if !VALID_WORD_COUNTS.contains(&word_count) {
        return Err(Bip39Error::InvalidSentenceLength { words: word_count });
    }
    // word_count <= 24, so the products stay tiny.
    #[allow(clippy::arithmetic_side_effects)]
    let entropy_bits = word_count * WORD_BITS * ENTROPY_BITS_STEP / (ENTROPY_BITS_STEP + 1);
    Ok(entropy_bits)
}

/// Fill a fresh buffer with `bits / 8` bytes from `rng`.
///
/// The buffer is zeroized on drop.
///
/// # Errors
///
/// Returns [`Bip39Error::InvalidEntropyLength`] for an invalid `bits`, or
/// [`Bip39Error::Random`] if the generator fails.
pub fn random_entropy<R>(rng: &mut R, bits: usize) -> Result<Zeroizing<Vec<u8>>, Bip39Error>
where
    R: RngCore + CryptoRng,
{
    validate_entropy_bits(bits)?;
    let mut bytes = Zeroizing::new(vec![0u8; bits / 8]);
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| Bip39Error::Random(format!("CSPRNG fill failed: {e}")))?;
    Ok(bytes)
}
