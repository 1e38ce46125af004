//! Rendering of checked text with misspelled words marked.

use colored::Colorize;

use crate::spelling::checker::CheckedWord;

/// Render `text` with every incorrect word shown in red.
///
/// Coloring follows the `colored` crate's terminal detection, so the output is
/// plain when stdout is not a terminal or `NO_COLOR` is set.
pub fn highlight<T: AsRef<[u8]> + ?Sized>(text: &T, words: &[CheckedWord]) -> String {
    highlight_with(text, words, |word| word.red().to_string())
}

/// Render `text`, passing every incorrect word through `mark`.
///
/// `words` must come from checking this same `text`. Bytes that are not
/// valid UTF-8 are shown as U+FFFD; the result is meant for display only.
pub fn highlight_with<T, F>(text: &T, words: &[CheckedWord], mut mark: F) -> String
where
    T: AsRef<[u8]> + ?Sized,
    F: FnMut(&str) -> String,
{
    let text = text.as_ref();
    let mut output = String::with_capacity(text.len());
    let mut pos = 0;

    for word in words.iter().filter(|w| !w.correct) {
        output.push_str(&String::from_utf8_lossy(&text[pos..word.span.start_offset]));
        output.push_str(&mark(&word.span.text));
        pos = word.span.end_offset;
    }
    output.push_str(&String::from_utf8_lossy(&text[pos..]));

    output
}

/// Unique incorrect raw words, in order of first appearance.
pub fn misspelled_words(words: &[CheckedWord]) -> Vec<&str> {
    let mut seen = ahash::AHashSet::new();
    words
        .iter()
        .filter(|w| !w.correct)
        .map(|w| w.span.text.as_str())
        .filter(|text| seen.insert(*text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::checker::SpellChecker;
    use crate::spelling::dictionary::Dictionary;

    fn checker() -> SpellChecker {
        SpellChecker::new(Dictionary::from_tokens(["the", "cat", "sat", "on", "mat"]))
    }

    #[test]
    fn test_highlight_with_markers() {
        let text = "The cta sat on teh mat.\n";
        let words = checker().check_text(text);
        let rendered = highlight_with(text, &words, |w| format!("[{w}]"));
        assert_eq!(rendered, "The [cta] sat on [teh] mat.\n");
    }

    #[test]
    fn test_highlight_all_correct_is_identity() {
        let text = "  the cat -- sat!  ";
        let words = checker().check_text(text);
        assert_eq!(highlight_with(text, &words, |w| format!("[{w}]")), text);
    }

    #[test]
    fn test_highlight_colors() {
        colored::control::set_override(true);
        let text = "the dgo";
        let words = checker().check_text(text);
        let rendered = highlight(text, &words);
        assert!(rendered.starts_with("the "));
        assert!(rendered.contains("\u{1b}[31mdgo\u{1b}[0m"));
    }

    #[test]
    fn test_highlight_non_utf8_text() {
        let text = &b"the d\xe9go cat"[..];
        let words = checker().check_text(text);
        let rendered = highlight_with(text, &words, |w| format!("[{w}]"));
        assert_eq!(rendered, "the [d]\u{fffd}[go] cat");
    }

    #[test]
    fn test_misspelled_words_unique_in_order() {
        let words = checker().check_text("teh cta teh mat cta zz");
        assert_eq!(misspelled_words(&words), vec!["teh", "cta", "zz"]);
    }
}
