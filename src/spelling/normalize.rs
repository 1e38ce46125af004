//! Canonical lookup keys for raw tokens.

/// Map a raw token to its canonical form.
///
/// Keeps only ASCII letters, lowercased, in their original order. Digits,
/// punctuation, whitespace and non-ASCII characters are dropped. An empty
/// result means the token is not a checkable word and must not be looked up.
pub fn normalize(raw: &str) -> String {
    normalize_bytes(raw.as_bytes())
}

/// [`normalize`] over raw bytes, which need not be valid UTF-8.
///
/// Word lists and texts in single-byte encodings such as Latin-1 keep their
/// ASCII letters; every other byte is dropped.
pub fn normalize_bytes(raw: &[u8]) -> String {
    let mut normalized = String::with_capacity(raw.len());
    normalized.extend(
        raw.iter()
            .copied()
            .filter(|&b| is_word_byte(b))
            .map(|b| char::from(b.to_ascii_lowercase())),
    );
    normalized
}

/// The letter predicate used by [`normalize`] and the tokenizer.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic()
}
