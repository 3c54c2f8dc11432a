//! Verify that secret material never leaks through formatting.

use bip39_core::{Bip39Error, Mnemonic, Seed};
use zeroize::Zeroize;

const SENTENCE: &str =
    "legal winner thank year wave sausage worth useful legal winner thank yellow";
const PASSPHRASE: &str = "hunter2-passphrase";

#[test]
fn mnemonic_debug_hides_words_entropy_and_passphrase() {
    let m = Mnemonic::from_sentence(SENTENCE, PASSPHRASE).unwrap();
    let debug = format!("{m:?}");
    for word in SENTENCE.split(' ') {
        assert!(!debug.contains(word), "word '{word}' leaked: {debug}");
    }
    assert!(!debug.contains(PASSPHRASE));
    assert!(!debug.contains("7f7f"));
    assert!(!debug.contains("127"));
    assert!(debug.contains("entropy_bits: 128"));
}

#[test]
fn seed_formatting_is_masked() {
    let seed = Seed::derive(SENTENCE, PASSPHRASE);
    let hex = seed.to_hex();
    for rendered in [format!("{seed:?}"), format!("{seed}")] {
        assert_eq!(rendered, "Seed(***)");
        assert!(!rendered.contains(&hex[..8]));
    }
}

#[test]
fn checksum_error_does_not_echo_sentence() {
    let tampered = SENTENCE.replace("yellow", "zoo");
    let err = Mnemonic::from_sentence(&tampered, PASSPHRASE).unwrap_err();
    assert_eq!(err, Bip39Error::ChecksumMismatch);
    let msg = err.to_string();
    assert!(!msg.contains("legal"));
    assert!(!msg.contains(PASSPHRASE));
}

#[test]
fn seed_zeroize_clears_bytes() {
    let mut seed = Seed::derive(SENTENCE, PASSPHRASE);
    assert!(seed.as_bytes().iter().any(|&b| b != 0));
    seed.zeroize();
    assert!(seed.as_bytes().iter().all(|&b| b == 0));
}
