//! BIP39 Known Answer Test vectors.
//!
//! English vectors from the Trezor reference implementation:
//! <https://github.com/trezor/python-mnemonic/blob/master/vectors.json>
//!
//! All of them use the passphrase `"TREZOR"`.

use bip39_core::{seed_from_sentence, Mnemonic};
use serde::Deserialize;

const PASSPHRASE: &str = "TREZOR";

/// `[entropy_hex, mnemonic, seed_hex, xprv]`; the xprv column is unused.
#[derive(Deserialize)]
struct Vectors {
    english: Vec<(String, String, String, String)>,
}

fn vectors() -> Vec<(String, String, String, String)> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/vectors.json");
    let json = std::fs::read_to_string(path).unwrap();
    let vectors: Vectors = serde_json::from_str(&json).unwrap();
    assert_eq!(vectors.english.len(), 24);
    vectors.english
}

#[test]
fn entropy_to_sentence() {
    for (entropy_hex, sentence, _, _) in vectors() {
        let entropy = data_encoding::HEXLOWER.decode(entropy_hex.as_bytes()).unwrap();
        let m = Mnemonic::from_entropy(&entropy, PASSPHRASE).unwrap();
        assert_eq!(m.sentence().unwrap(), sentence, "entropy {entropy_hex}");
    }
}

#[test]
fn sentence_to_entropy() {
    for (entropy_hex, sentence, _, _) in vectors() {
        let m = Mnemonic::from_sentence(&sentence, PASSPHRASE).unwrap();
        assert_eq!(m.entropy_hex().unwrap(), entropy_hex, "sentence {sentence}");
    }
}

#[test]
fn mnemonic_seed() {
    for (entropy_hex, _, seed_hex, _) in vectors() {
        let entropy = data_encoding::HEXLOWER.decode(entropy_hex.as_bytes()).unwrap();
        let m = Mnemonic::from_entropy(&entropy, PASSPHRASE).unwrap();
        assert_eq!(m.seed().unwrap(), seed_hex, "entropy {entropy_hex}");
    }
}

#[test]
fn free_function_seed_matches() {
    for (_, sentence, seed_hex, _) in vectors() {
        assert_eq!(seed_from_sentence(&sentence, PASSPHRASE), seed_hex);
    }
}

#[test]
fn every_vector_reports_its_word_count() {
    for (entropy_hex, sentence, _, _) in vectors() {
        let m = Mnemonic::from_sentence(&sentence, PASSPHRASE).unwrap();
        let bits = entropy_hex.len() * 4;
        assert_eq!(m.word_count().unwrap(), (bits + bits / 32) / 11);
    }
}
