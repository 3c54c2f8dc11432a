//! BIP39 dictionary index: a fixed bijection between 2048 words and the
//! 11-bit indices 0..=2047.
//!
//! This module provides:
//! - [`Language`]: identifier of a wordlist (only English ships embedded)
//! - [`Dictionary`]: an owned, validated wordlist with O(1) lookups both ways
//! - [`index_to_word`] / [`word_to_index`]: lookups against the embedded lists
//!
//! Embedded wordlists are parsed once per process on first access using
//! `OnceLock`. Custom wordlists (e.g. from a file named in the configuration)
//! are parsed into an owned [`Dictionary`] and passed by reference to the
//! mnemonic codec.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::Bip39Error;

/// Number of words in every BIP39 wordlist.
pub const WORDLIST_SIZE: usize = 2048;

const ENGLISH_RAW: &str = include_str!("wordlists/english.txt");

// ── Types ──────────────────────────────────────────────────────────

/// Supported BIP39 wordlist languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Language {
    /// English (2048 words, alphabetically sorted).
    #[default]
    English,
}

impl Language {
    /// Returns every language with an embedded wordlist.
    #[must_use]
    pub const fn all() -> [Self; 1] {
        [Self::English]
    }

    /// Lowercase identifier, as used in configuration and test-vector files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
        }
    }

    const fn embedded_raw(self) -> &'static str {
        match self {
            Self::English => ENGLISH_RAW,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Bip39Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Self::English),
            other => Err(Bip39Error::DictionaryLoad(format!(
                "no wordlist for language '{other}'"
            ))),
        }
    }
}

/// A validated BIP39 wordlist.
///
/// Holds exactly [`WORDLIST_SIZE`] unique words in index order plus the
/// reverse map. Immutable once built.
#[derive(Clone, Debug)]
pub struct Dictionary {
    language: Language,
    words: Box<[String]>,
    index: HashMap<String, u16>,
}

impl Dictionary {
    /// Parse a newline-delimited wordlist (one word per line, line order
    /// defines the index). A trailing newline and `\r\n` endings are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::DictionaryLoad`] if the text does not contain
    /// exactly 2048 lines, or contains an empty, duplicate, or
    /// whitespace-containing word.
    pub fn parse(language: Language, raw: &str) -> Result<Self, Bip39Error> {
        let words: Vec<String> = raw.lines().map(|line| line.trim().to_owned()).collect();
        if words.len() != WORDLIST_SIZE {
            return Err(load_failure(
                language,
                format!("expected {WORDLIST_SIZE} words, got {}", words.len()),
            ));
        }

        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(load_failure(
                    language,
                    format!("empty word at line {}", i.saturating_add(1)),
                ));
            }
            if word.contains(char::is_whitespace) {
                return Err(load_failure(
                    language,
                    format!("word '{word}' at line {} contains whitespace", i.saturating_add(1)),
                ));
            }
            let idx = u16::try_from(i)
                .map_err(|_| load_failure(language, format!("index {i} exceeds u16")))?;
            if index.insert(word.clone(), idx).is_some() {
                return Err(load_failure(language, format!("duplicate word '{word}'")));
            }
        }

        tracing::debug!(%language, words = WORDLIST_SIZE, "BIP39 dictionary parsed");
        Ok(Self {
            language,
            words: words.into_boxed_slice(),
            index,
        })
    }

    /// Read and parse a wordlist file in the newline-delimited format.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::DictionaryLoad`] if the file cannot be read or
    /// fails [`Dictionary::parse`] validation.
    pub fn from_file(language: Language, path: &Path) -> Result<Self, Bip39Error> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            load_failure(language, format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(language, &raw)
    }

    /// Returns the embedded dictionary for `language`.
    ///
    /// The wordlist is parsed on first access and cached for the lifetime
    /// of the process. Concurrent first calls block until the single parse
    /// completes, so every caller sees the fully built dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::DictionaryLoad`] if the embedded list is corrupt.
    /// The failure is cached: later calls return the same error.
    pub fn load(language: Language) -> Result<&'static Self, Bip39Error> {
        static ENGLISH: OnceLock<Result<Dictionary, Bip39Error>> = OnceLock::new();

        let cell = match language {
            Language::English => &ENGLISH,
        };
        cell.get_or_init(|| Self::parse(language, language.embedded_raw()))
            .as_ref()
            .map_err(Bip39Error::clone)
    }

    /// Shorthand for `Dictionary::load(Language::English)`.
    ///
    /// # Errors
    ///
    /// See [`Dictionary::load`].
    pub fn english() -> Result<&'static Self, Bip39Error> {
        Self::load(Language::English)
    }

    /// The language this dictionary was built for.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the word at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::OutOfRange`] if `index > 2047`.
    pub fn index_to_word(&self, index: usize) -> Result<&str, Bip39Error> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(Bip39Error::OutOfRange { index })
    }

    /// Returns the 0-based index of `word`. Matching is exact and
    /// case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Bip39Error::UnknownWord`] if `word` is not in the wordlist.
    pub fn word_to_index(&self, word: &str) -> Result<u16, Bip39Error> {
        self.index
            .get(word)
            .copied()
            .ok_or_else(|| Bip39Error::UnknownWord {
                word: word.to_owned(),
                language: self.language,
            })
    }

    /// Check whether `word` exists in this wordlist.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All words in index order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Returns the word at `index` in the embedded wordlist for `language`.
///
/// # Errors
///
/// Returns [`Bip39Error::OutOfRange`] for `index > 2047`, or
/// [`Bip39Error::DictionaryLoad`] if the embedded list is corrupt.
pub fn index_to_word(language: Language, index: usize) -> Result<&'static str, Bip39Error> {
    Dictionary::load(language)?.index_to_word(index)
}

/// Returns the index of `word` in the embedded wordlist for `language`.
///
/// # Errors
///
/// Returns [`Bip39Error::UnknownWord`] if the word is absent, or
/// [`Bip39Error::DictionaryLoad`] if the embedded list is corrupt.
pub fn word_to_index(language: Language, word: &str) -> Result<u16, Bip39Error> {
    Dictionary::load(language)?.word_to_index(word)
}

fn load_failure(language: Language, reason: String) -> Bip39Error {
    tracing::warn!(%language, %reason, "BIP39 dictionary rejected");
    Bip39Error::DictionaryLoad(format!("{language}: {reason}"))
}

// ── Tests ──────────────────────────────────────────────────────────
