//! Word span extraction.

use serde::{Deserialize, Serialize};

use crate::spelling::normalize::is_word_byte;

/// A maximal run of letters in a source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    /// The raw slice of the source.
    pub text: String,
    /// Index of the word among all words of the text (0-based).
    pub position: usize,
    /// Byte offset of the first character.
    pub start_offset: usize,
    /// Byte offset just past the last character.
    pub end_offset: usize,
}

impl WordSpan {
    /// Create a new span.
    pub fn new<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        WordSpan {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }
}

/// Split `text` into word spans. Anything that is not a letter separates words,
/// so "don't" yields "don" and "t".
///
/// Works on bytes: the text does not have to be valid UTF-8, and non-ASCII
/// bytes act as separators.
pub fn tokenize<T: AsRef<[u8]> + ?Sized>(text: &T) -> Vec<WordSpan> {
    let text = text.as_ref();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (offset, &b) in text.iter().enumerate() {
        match (is_word_byte(b), start) {
            (true, None) => start = Some(offset),
            (false, Some(begin)) => {
                spans.push(span(text, spans.len(), begin, offset));
                start = None;
            }
            _ => {}
        }
    }

    if let Some(begin) = start {
        spans.push(span(text, spans.len(), begin, text.len()));
    }

    spans
}

// Word bytes are ASCII letters, so each one maps to a single char.
fn span(text: &[u8], position: usize, start: usize, end: usize) -> WordSpan {
    let word: String = text[start..end].iter().copied().map(char::from).collect();
    WordSpan::new(word, position, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_offsets() {
        let spans = tokenize("Hello, world!");
        assert_eq!(
            spans,
            vec![
                WordSpan::new("Hello", 0, 0, 5),
                WordSpan::new("world", 1, 7, 12),
            ]
        );
    }

    #[test]
    fn test_tokenize_apostrophe_and_digits() {
        let words: Vec<String> = tokenize("don't stop 4ever").into_iter().map(|s| s.text).collect();
        assert_eq!(words, vec!["don", "t", "stop", "ever"]);
    }

    #[test]
    fn test_tokenize_non_ascii_separates() {
        let spans = tokenize("café au lait");
        assert_eq!(spans[0].text, "caf");
        assert_eq!(spans[1].text, "au");
        assert_eq!(spans[1].start_offset, "café ".len());
    }

    #[test]
    fn test_tokenize_latin1_bytes() {
        let spans = tokenize(&b"caf\xe9 na\xefve"[..]);
        assert_eq!(
            spans,
            vec![
                WordSpan::new("caf", 0, 0, 3),
                WordSpan::new("na", 1, 5, 7),
                WordSpan::new("ve", 2, 8, 10),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... 123 ").is_empty());
    }
}
