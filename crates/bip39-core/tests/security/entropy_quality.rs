//! Entropy quality tests for generated mnemonics.
//!
//! Smoke tests that `Mnemonic::generate` is actually backed by a working
//! CSPRNG and not producing degenerate output (all-zeros, repeats).
//!
//! | Sample             | Expected         | Our threshold |
//! |--------------------|------------------|---------------|
//! | 2 KB of entropy    | ~7.91 bits/byte  | 7.5           |
//! | 4800 word indices  | ~1850 distinct   | 1500          |

use std::collections::HashSet;

use bip39_core::{Dictionary, Mnemonic};

/// Shannon entropy of a byte slice (bits per byte).
///
/// H = -Σ p(x) * log2(p(x)) for each byte value x in [0, 255]
#[allow(clippy::cast_precision_loss)]
fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut freq = [0u64; 256];
    for &b in data {
        freq[usize::from(b)] = freq[usize::from(b)].saturating_add(1);
    }
    let len = data.len() as f64;
    freq.iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / len;
            -p * p.log2()
        })
        .sum()
}

#[test]
fn generated_entropy_has_high_shannon_entropy() {
    let mut pooled = Vec::with_capacity(64 * 32);
    for _ in 0..64 {
        let m = Mnemonic::generate(256, "").unwrap();
        pooled.extend_from_slice(m.entropy());
    }
    let entropy = shannon_entropy(&pooled);
    assert!(
        entropy > 7.5,
        "pooled mnemonic entropy too low: {entropy:.4} (expected > 7.5)"
    );
}

#[test]
fn generated_sentences_are_distinct() {
    let sentences: HashSet<String> = (0..100)
        .map(|_| {
            Mnemonic::generate(128, "")
                .unwrap()
                .sentence()
                .unwrap()
                .to_owned()
        })
        .collect();
    assert_eq!(sentences.len(), 100, "duplicate mnemonic generated");
}

#[test]
fn generated_words_cover_the_dictionary() {
    let dict = Dictionary::english().unwrap();
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let m = Mnemonic::generate(256, "").unwrap();
        for word in m.words().unwrap() {
            seen.insert(dict.word_to_index(word).unwrap());
        }
    }
    assert!(
        seen.len() > 1500,
        "only {} distinct word indices in 4800 draws",
        seen.len()
    );
}

#[test]
fn shannon_entropy_detects_degenerate_input() {
    assert!(shannon_entropy(&[0u8; 1024]) < f64::EPSILON);
    let repeating: Vec<u8> = [0u8, 1, 2, 3].repeat(256);
    assert!((shannon_entropy(&repeating) - 2.0).abs() < 1e-9);
}
