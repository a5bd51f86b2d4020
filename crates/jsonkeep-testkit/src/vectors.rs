//! Golden NFC vectors.
//!
//! Each vector pairs an input with its expected composed form. Inputs are
//! written with escapes so the source file's own encoding cannot change them.

use jsonkeep_core::normalize_str;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input text, usually decomposed.
    pub input: &'static str,
    /// Expected NFC output.
    pub expected: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "e with combining acute",
            input: "e\u{0301}",
            expected: "\u{00E9}",
        },
        GoldenVector {
            name: "n with combining tilde",
            input: "n\u{0303}",
            expected: "\u{00F1}",
        },
        GoldenVector {
            name: "o dot below then grave",
            input: "o\u{0323}\u{0300}",
            expected: "\u{1ECD}\u{0300}",
        },
        GoldenVector {
            // Marks are reordered by combining class before composing.
            name: "e acute then dot below",
            input: "e\u{0301}\u{0323}",
            expected: "\u{1EB9}\u{0301}",
        },
        GoldenVector {
            name: "s dot below dot above",
            input: "s\u{0323}\u{0307}",
            expected: "\u{1E69}",
        },
        GoldenVector {
            name: "angstrom sign singleton",
            input: "\u{212B}",
            expected: "\u{00C5}",
        },
        GoldenVector {
            name: "hangul jamo",
            input: "\u{1100}\u{1161}",
            expected: "\u{AC00}",
        },
        GoldenVector {
            name: "already composed word",
            input: "il\u{00E9}",
            expected: "il\u{00E9}",
        },
        GoldenVector {
            name: "plain ascii",
            input: "water",
            expected: "water",
        },
        GoldenVector {
            name: "empty string",
            input: "",
            expected: "",
        },
    ]
}

/// Normalize every vector and report `(name, matches, actual)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = normalize_str(v.input);
            (v.name.to_string(), actual == v.expected, actual)
        })
        .collect()
}
