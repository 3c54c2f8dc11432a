//! BIP39 mnemonic codec.
//!
//! A [`Mnemonic`] is built from exactly one of: a requested random strength,
//! explicit entropy bytes, or an existing sentence. It is immutable afterwards.
//! The sentence of an entropy-built mnemonic is rendered on first access and
//! cached; the seed is derived afresh on every request.
//!
//! # Encoding
//!
//! ```text
//! entropy (ENT bits) || SHA-256(entropy)[..ENT/32 bits]  →  11-bit groups  →  words
//! ```
//!
//! All bit packing is MSB-first. Decoding reverses the split and rejects a
//! sentence whose trailing checksum bits disagree with its leading entropy.

use std::fmt;
use std::sync::OnceLock;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::dictionary::Dictionary;
use crate::entropy::{
    checksum_bits_for, entropy_bits_for_word_count, random_entropy, validate_entropy_bits,
    word_count_for_bits, WORD_BITS,
};
use crate::error::Bip39Error;
use crate::seed::Seed;

/// Mask selecting the low 11 bits of an accumulator.
const WORD_MASK: u32 = (1 << WORD_BITS) - 1;

// ── Types ──────────────────────────────────────────────────────────

/// An immutable BIP39 mnemonic bound to a dictionary.
///
/// Entropy is held in a zeroizing buffer and the passphrase in a
/// [`SecretString`]. `Debug` output never includes either.
pub struct Mnemonic<'d> {
    dictionary: &'d Dictionary,
    entropy: Zeroizing<Vec<u8>>,
    passphrase: SecretString,
    sentence: OnceLock<Zeroizing<String>>,
}

impl Mnemonic<'static> {
    /// Generate a mnemonic from `bits` of OS randomness, using the embedded
    /// English dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] for an invalid `bits`,
    /// [`Bip39Error::Random`] if the OS CSPRNG fails, or
    /// [`Bip39Error::DictionaryLoad`] if the embedded wordlist is corrupt.
    pub fn generate(bits: usize, passphrase: &str) -> Result<Self, Bip39Error> {
        Self::generate_in(Dictionary::english()?, bits, passphrase)
    }

    /// Build a mnemonic from known entropy, using the embedded English
    /// dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] unless the entropy is
    /// 16, 20, 24, 28, or 32 bytes long.
    pub fn from_entropy(entropy: &[u8], passphrase: &str) -> Result<Self, Bip39Error> {
        Self::from_entropy_in(Dictionary::english()?, entropy, passphrase)
    }

    /// Parse a sentence against the embedded English dictionary.
    ///
    /// # Errors
    ///
    /// See [`Mnemonic::from_sentence_in`].
    pub fn from_sentence(sentence: &str, passphrase: &str) -> Result<Self, Bip39Error> {
        Self::from_sentence_in(Dictionary::english()?, sentence, passphrase)
    }
}

impl<'d> Mnemonic<'d> {
    /// Generate a mnemonic from `bits` of OS randomness against `dictionary`.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] for an invalid `bits`, or
    /// [`Bip39Error::Random`] if the OS CSPRNG fails.
    pub fn generate_in(
        dictionary: &'d Dictionary,
        bits: usize,
        passphrase: &str,
    ) -> Result<Self, Bip39Error> {
        Self::generate_with_rng(dictionary, &mut OsRng, bits, passphrase)
    }

    /// Generate a mnemonic drawing `bits / 8` bytes from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] for an invalid `bits`, or
    /// [`Bip39Error::Random`] if `rng` fails.
    pub fn generate_with_rng<R>(
        dictionary: &'d Dictionary,
        rng: &mut R,
        bits: usize,
        passphrase: &str,
    ) -> Result<Self, Bip39Error>
    where
        R: RngCore + CryptoRng,
    {
        let entropy = random_entropy(rng, bits)?;
        tracing::trace!(bits, "generated random mnemonic entropy");
        Ok(Self::with_entropy(dictionary, entropy, passphrase, None))
    }

    /// Build a mnemonic from known entropy against `dictionary`.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] unless
    /// `entropy.len() * 8` is 128, 160, 192, 224, or 256.
    pub fn from_entropy_in(
        dictionary: &'d Dictionary,
        entropy: &[u8],
        passphrase: &str,
    ) -> Result<Self, Bip39Error> {
        validate_entropy_bits(entropy.len().saturating_mul(8))?;
        Ok(Self::with_entropy(
            dictionary,
            Zeroizing::new(entropy.to_vec()),
            passphrase,
            None,
        ))
    }

    /// Parse `sentence` against `dictionary`, recovering its entropy and
    /// verifying its checksum.
    ///
    /// Words are separated by any whitespace. The sentence string is kept
    /// verbatim and returned as-is by [`Mnemonic::sentence`].
    ///
    /// # Errors
    ///
    /// - [`Bip39Error::InvalidSentenceLength`] if the word count is not
    ///   12, 15, 18, 21, or 24
    /// - [`Bip39Error::UnknownWord`] for the first word not in `dictionary`
    /// - [`Bip39Error::ChecksumMismatch`] if the embedded checksum is wrong
    pub fn from_sentence_in(
        dictionary: &'d Dictionary,
        sentence: &str,
        passphrase: &str,
    ) -> Result<Self, Bip39Error> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        let entropy_bits = entropy_bits_for_word_count(words.len())?;

        let indices = words
            .iter()
            .map(|word| dictionary.word_to_index(word))
            .collect::<Result<Vec<u16>, _>>()?;

        let (entropy, claimed_checksum) = unpack_indices(&indices, entropy_bits)?;
        if claimed_checksum != checksum(&entropy) {
            tracing::debug!(words = words.len(), "mnemonic checksum mismatch");
            return Err(Bip39Error::ChecksumMismatch);
        }

        tracing::trace!(words = words.len(), "parsed mnemonic sentence");
        Ok(Self::with_entropy(
            dictionary,
            entropy,
            passphrase,
            Some(Zeroizing::new(sentence.to_owned())),
        ))
    }

    fn with_entropy(
        dictionary: &'d Dictionary,
        entropy: Zeroizing<Vec<u8>>,
        passphrase: &str,
        sentence: Option<Zeroizing<String>>,
    ) -> Self {
        Self {
            dictionary,
            entropy,
            passphrase: SecretString::from(passphrase.to_owned()),
            sentence: sentence.map_or_else(OnceLock::new, OnceLock::from),
        }
    }

    /// The mnemonic sentence.
    ///
    /// For a parsed mnemonic this is the caller's original string. Otherwise
    /// the words are rendered from the entropy on first call, joined with
    /// single spaces, and cached.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::EmptyEntropy`], [`Bip39Error::InternalInvariant`]
    /// or [`Bip39Error::OutOfRange`] only if the entropy bypassed validation;
    /// none occurs for a mnemonic built through the public constructors.
    pub fn sentence(&self) -> Result<&str, Bip39Error> {
        if let Some(cached) = self.sentence.get() {
            return Ok(cached.as_str());
        }
        let rendered = self.render_sentence()?;
        // A concurrent caller may have filled the cache first; both values
        // are identical, so whichever landed is returned.
        Ok(self.sentence.get_or_init(|| rendered).as_str())
    }

    /// The words of the sentence, in order.
    ///
    /// # Errors
    ///
    /// See [`Mnemonic::sentence`].
    pub fn words(&self) -> Result<impl Iterator<Item = &str>, Bip39Error> {
        Ok(self.sentence()?.split_whitespace())
    }

    /// Number of words the sentence has (12, 15, 18, 21, or 24).
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] only for a mnemonic
    /// whose entropy bypassed validation.
    pub fn word_count(&self) -> Result<usize, Bip39Error> {
        word_count_for_bits(self.entropy.len().saturating_mul(8))
    }

    /// Derive the 64-byte seed from the sentence and passphrase.
    ///
    /// Recomputed on every call.
    ///
    /// # Errors
    ///
    /// Propagates any failure of [`Mnemonic::sentence`].
    pub fn to_seed(&self) -> Result<Seed, Bip39Error> {
        let sentence = self.sentence()?;
        Ok(Seed::derive(sentence, self.passphrase.expose_secret()))
    }

    /// The seed as a lowercase hex string (128 characters).
    ///
    /// # Errors
    ///
    /// Propagates any failure of [`Mnemonic::sentence`].
    pub fn seed(&self) -> Result<String, Bip39Error> {
        Ok(self.to_seed()?.to_hex())
    }

    /// The raw entropy bytes, without checksum.
    #[must_use]
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// Lowercase hex of the entropy bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::EmptyEntropy`] if the entropy buffer is empty.
    pub fn entropy_hex(&self) -> Result<String, Bip39Error> {
        if self.entropy.is_empty() {
            return Err(Bip39Error::EmptyEntropy);
        }
        Ok(data_encoding::HEXLOWER.encode(&self.entropy))
    }

    /// The dictionary this mnemonic encodes against.
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    fn render_sentence(&self) -> Result<Zeroizing<String>, Bip39Error> {
        let indices = pack_entropy(&self.entropy)?;
        let mut sentence = Zeroizing::new(String::with_capacity(indices.len().saturating_mul(9)));
        for (i, &index) in indices.iter().enumerate() {
            if i > 0 {
                sentence.push(' ');
            }
            sentence.push_str(self.dictionary.index_to_word(usize::from(index))?);
        }
        Ok(sentence)
    }
}

impl fmt::Debug for Mnemonic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.dictionary.language())
            .field("entropy_bits", &self.entropy.len().saturating_mul(8))
            .finish_non_exhaustive()
    }
}

// ── Checksum ───────────────────────────────────────────────────────

/// First `ENT / 32` bits of SHA-256(`entropy`), right-aligned in a `u8`.
///
/// ENT is at most 256 bits, so the checksum never exceeds 8 bits and always
/// comes from the first hash byte.
#[must_use]
pub fn checksum(entropy: &[u8]) -> u8 {
    let cs_bits = checksum_bits_for(entropy.len().saturating_mul(8)).min(8);
    if cs_bits == 0 {
        return 0;
    }
    let hash = ring::digest::digest(&ring::digest::SHA256, entropy);
    let first = hash.as_ref()[0];
    // cs_bits is 1..=8.
    #[allow(clippy::arithmetic_side_effects)]
    let shift = 8 - cs_bits;
    first >> shift
}

// ── Bit Packing ────────────────────────────────────────────────────

/// Split `entropy || checksum` into 11-bit word indices, MSB-first.
fn pack_entropy(entropy: &[u8]) -> Result<Vec<u16>, Bip39Error> {
    if entropy.is_empty() {
        return Err(Bip39Error::EmptyEntropy);
    }
    let entropy_bits = entropy.len().saturating_mul(8);
    let cs_bits = checksum_bits_for(entropy_bits);
    let total_bits = entropy_bits.saturating_add(cs_bits);
    if !total_bits.is_multiple_of(WORD_BITS) || cs_bits > 8 {
        return Err(Bip39Error::InternalInvariant(format!(
            "{total_bits} bits cannot be split into {WORD_BITS}-bit words"
        )));
    }

    let mut indices = Vec::with_capacity(total_bits / WORD_BITS);
    let mut acc: u32 = 0;
    let mut acc_bits: usize = 0;

    // The accumulator never holds more than 10 + 8 live bits, so shifting
    // an u32 left by 8 cannot lose data.
    #[allow(clippy::arithmetic_side_effects)]
    let mut push_bits = |value: u32, width: usize, indices: &mut Vec<u16>| {
        acc = (acc << width) | value;
        acc_bits += width;
        while acc_bits >= WORD_BITS {
            acc_bits -= WORD_BITS;
            // Masked to 11 bits.
            #[allow(clippy::cast_possible_truncation)]
            let index = ((acc >> acc_bits) & WORD_MASK) as u16;
            indices.push(index);
        }
        acc &= (1 << acc_bits) - 1;
    };

    for &byte in entropy {
        push_bits(u32::from(byte), 8, &mut indices);
    }
    push_bits(u32::from(checksum(entropy)), cs_bits, &mut indices);

    Ok(indices)
}

/// Join 11-bit word indices back into entropy bytes plus the trailing
/// checksum bits (right-aligned).
fn unpack_indices(
    indices: &[u16],
    entropy_bits: usize,
) -> Result<(Zeroizing<Vec<u8>>, u8), Bip39Error> {
    let entropy_len = entropy_bits / 8;
    let mut entropy = Zeroizing::new(Vec::with_capacity(entropy_len));
    let mut acc: u32 = 0;
    let mut acc_bits: usize = 0;

    // acc holds at most 7 + 11 live bits while bytes are drained, and at most
    // 8 checksum bits once the entropy is complete.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    for &index in indices {
        if u32::from(index) > WORD_MASK {
            return Err(Bip39Error::OutOfRange {
                index: usize::from(index),
            });
        }
        acc = (acc << WORD_BITS) | u32::from(index);
        acc_bits += WORD_BITS;
        while acc_bits >= 8 && entropy.len() < entropy_len {
            acc_bits -= 8;
            entropy.push((acc >> acc_bits) as u8);
        }
        acc &= (1 << acc_bits) - 1;
    }

    let cs_bits = checksum_bits_for(entropy_bits);
    if entropy.len() != entropy_len || acc_bits != cs_bits {
        return Err(Bip39Error::InternalInvariant(format!(
            "decoded {} entropy bytes and {acc_bits} checksum bits, expected {entropy_len} and {cs_bits}",
            entropy.len()
        )));
    }
    // acc_bits == cs_bits <= 8 after the mask above.
    #[allow(clippy::cast_possible_truncation)]
    let claimed = acc as u8;
    Ok((entropy, claimed))
}

// ── Tests ──────────────────────────────────────────────────────────
