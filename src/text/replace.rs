//! Replacement of misspelled words in the source text.

use ahash::AHashMap;

use crate::spelling::checker::CheckedWord;

/// Chosen replacements, keyed by the raw (unnormalized) word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    map: AHashMap<String, String>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every occurrence of `word` with `replacement`.
    pub fn insert<W: Into<String>, R: Into<String>>(&mut self, word: W, replacement: R) {
        self.map.insert(word.into(), replacement.into());
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.map.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Rewrite `text`, substituting every span whose raw word has a replacement.
///
/// All bytes outside replaced spans are copied unchanged, whatever their
/// encoding; replacements may be longer or shorter than the words they replace.
pub fn apply<T: AsRef<[u8]> + ?Sized>(
    text: &T,
    words: &[CheckedWord],
    replacements: &Replacements,
) -> Vec<u8> {
    let text = text.as_ref();
    if replacements.is_empty() {
        return text.to_vec();
    }

    let mut output = Vec::with_capacity(text.len());
    let mut pos = 0;

    for word in words {
        if let Some(replacement) = replacements.get(&word.span.text) {
            output.extend_from_slice(&text[pos..word.span.start_offset]);
            output.extend_from_slice(replacement.as_bytes());
            pos = word.span.end_offset;
        }
    }
    output.extend_from_slice(&text[pos..]);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::checker::SpellChecker;
    use crate::spelling::dictionary::Dictionary;

    fn check<T: AsRef<[u8]> + ?Sized>(text: &T) -> Vec<CheckedWord> {
        SpellChecker::new(Dictionary::from_tokens(["the", "cat", "sat", "on", "mat"]))
            .check_text(text)
    }

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let text = "teh cat, teh mat";
        let words = check(text);
        let mut replacements = Replacements::new();
        replacements.insert("teh", "the");
        assert_eq!(apply(text, &words, &replacements), b"the cat, the mat");
    }

    #[test]
    fn test_apply_with_length_changes() {
        let text = "A ct sat on teh mt.\nEnd";
        let words = check(text);
        let mut replacements = Replacements::new();
        replacements.insert("ct", "cat");
        replacements.insert("teh", "a");
        replacements.insert("mt", "mattress");
        assert_eq!(
            apply(text, &words, &replacements),
            b"A cat sat on a mattress.\nEnd"
        );
    }

    #[test]
    fn test_apply_is_case_sensitive_on_raw_word() {
        let text = "Teh teh";
        let words = check(text);
        let mut replacements = Replacements::new();
        replacements.insert("teh", "the");
        assert_eq!(apply(text, &words, &replacements), b"Teh the");
    }

    #[test]
    fn test_apply_without_replacements() {
        let text = "nothing to do";
        assert_eq!(apply(text, &check(text), &Replacements::new()), text.as_bytes());
    }

    #[test]
    fn test_apply_keeps_non_utf8_bytes() {
        let text = &b"caf\xe9 teh mat\xff"[..];
        let words = check(text);
        let mut replacements = Replacements::new();
        replacements.insert("teh", "the");
        assert_eq!(apply(text, &words, &replacements), b"caf\xe9 the mat\xff");
    }
}
