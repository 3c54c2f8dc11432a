//! Mnemonic configuration, stored as plain JSON.
//!
//! Selects the dictionary language, the default strength for generated
//! mnemonics, and optionally a wordlist file that replaces the embedded
//! list. Holds no secrets.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, Language};
use crate::entropy::validate_entropy_bits;
use crate::error::Bip39Error;
use crate::mnemonic::Mnemonic;

/// Mnemonic settings.
///
/// All fields have defaults via [`Default`], so a partial JSON object
/// loads cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bip39Config {
    /// Wordlist language (`"english"`).
    #[serde(default)]
    pub language: Language,

    /// Entropy bits for generated mnemonics (128–256, multiple of 32).
    #[serde(default = "default_entropy_bits")]
    pub entropy_bits: usize,

    /// Newline-delimited wordlist to use instead of the embedded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordlist_path: Option<PathBuf>,
}

impl Default for Bip39Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            entropy_bits: default_entropy_bits(),
            wordlist_path: None,
        }
    }
}

const fn default_entropy_bits() -> usize {
    128
}

impl Bip39Config {
    /// Load configuration from `path`.
    ///
    /// Returns [`Default::default()`] when the file is missing or contains
    /// invalid JSON.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "corrupt BIP39 config, using defaults");
            Self::default()
        })
    }

    /// Parse configuration from a JSON string, rejecting malformed input.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::Config`] if the JSON does not parse.
    pub fn from_json(json: &str) -> Result<Self, Bip39Error> {
        serde_json::from_str(json).map_err(|e| Bip39Error::Config(e.to_string()))
    }

    /// Persist configuration to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::Config`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), Bip39Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Bip39Error::Config(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| Bip39Error::Config(format!("cannot write {}: {e}", path.display())))
    }

    /// Check the configured values.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] if `entropy_bits` is not
    /// a valid BIP39 strength.
    pub fn validate(&self) -> Result<(), Bip39Error> {
        validate_entropy_bits(self.entropy_bits)
    }

    /// The dictionary this configuration selects.
    ///
    /// Borrowed from the process-wide embedded list unless `wordlist_path`
    /// is set, in which case the file is read and validated.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::DictionaryLoad`] if the wordlist cannot be
    /// loaded.
    pub fn dictionary(&self) -> Result<Cow<'static, Dictionary>, Bip39Error> {
        match &self.wordlist_path {
            Some(path) => {
                tracing::debug!(language = %self.language, path = %path.display(), "loading wordlist file");
                Dictionary::from_file(self.language, path).map(Cow::Owned)
            }
            None => Dictionary::load(self.language).map(Cow::Borrowed),
        }
    }

    /// Generate a random mnemonic with the configured strength against
    /// `dictionary` (usually the result of [`Bip39Config::dictionary`]).
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::InvalidEntropyLength`] for an invalid configured
    /// strength, or [`Bip39Error::Random`] if the OS CSPRNG fails.
    pub fn generate<'d>(
        &self,
        dictionary: &'d Dictionary,
        passphrase: &str,
    ) -> Result<Mnemonic<'d>, Bip39Error> {
        Mnemonic::generate_in(dictionary, self.entropy_bits, passphrase)
    }
}
