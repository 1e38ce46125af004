//! Interactive choice of replacements for misspelled words.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::Result;
use crate::spelling::checker::{CheckedWord, SpellChecker};
use crate::spelling::normalize::normalize;
use crate::text::highlight::misspelled_words;
use crate::text::replace::Replacements;

/// A choice entered for one misspelled word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Use the suggestion at this index.
    Suggestion(usize),
    /// Ask for a custom replacement.
    Custom,
    /// Leave the word as is.
    Ignore,
}

impl Choice {
    /// Parse a user answer. Anything unrecognized is treated as ignore.
    ///
    /// An answer starting with a digit selects a suggestion by its leading
    /// digits, so "1abc" picks suggestion 1.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "c" => Choice::Custom,
            "i" => Choice::Ignore,
            _ => {
                let digits = input
                    .find(|c: char| !c.is_ascii_digit())
                    .map_or(input, |end| &input[..end]);
                digits
                    .parse::<usize>()
                    .map(Choice::Suggestion)
                    .unwrap_or(Choice::Ignore)
            }
        }
    }
}

/// Prompts on `output` and reads answers from `input` as whitespace-separated
/// tokens, so several answers may share a line.
pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractiveSession { input, output }
    }

    /// Ask about each unique misspelled word once and collect replacements.
    ///
    /// Running out of input ends the session with what was collected so far.
    pub fn run(&mut self, checker: &SpellChecker, words: &[CheckedWord]) -> Result<Replacements> {
        let mut replacements = Replacements::new();

        for word in misspelled_words(words) {
            writeln!(self.output)?;
            writeln!(self.output, "Incorrect word: {word}")?;

            let normalized = normalize(word);
            let suggestions = checker.suggest(&normalized, None);

            if suggestions.is_empty() {
                writeln!(self.output, "No suggestions found.")?;
                write!(self.output, "Enter 'c' for custom spelling, 'i' to ignore: ")?;
            } else {
                writeln!(self.output, "Suggestions:")?;
                for (i, suggestion) in suggestions.iter().enumerate() {
                    writeln!(self.output, "{i}. {suggestion}")?;
                }
                write!(
                    self.output,
                    "Enter choice (number), 'c' for custom, 'i' to ignore: "
                )?;
            }
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                debug!("Input closed, ending interactive session");
                break;
            };

            match Choice::parse(&answer) {
                Choice::Suggestion(index) => {
                    if let Some(suggestion) = suggestions.get(index) {
                        replacements.insert(word, suggestion.as_str());
                    }
                }
                Choice::Custom => {
                    write!(self.output, "Enter replacement: ")?;
                    self.output.flush()?;
                    match self.read_answer()? {
                        Some(custom) => replacements.insert(word, custom),
                        None => break,
                    }
                }
                Choice::Ignore => {}
            }
        }

        Ok(replacements)
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut token = Vec::new();

        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &b in buf {
                used += 1;
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
            }
            self.input.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::Dictionary;
    use std::io::Cursor;

    fn checker() -> SpellChecker {
        SpellChecker::new(Dictionary::from_tokens(["the", "cat", "sat", "on", "mat"]))
    }

    fn run(text: &str, answers: &str) -> (Replacements, String) {
        let checker = checker();
        let words = checker.check_text(text);
        let mut session = InteractiveSession::new(Cursor::new(answers.to_string()), Vec::new());
        let replacements = session.run(&checker, &words).unwrap();
        let transcript = String::from_utf8(session.into_output()).unwrap();
        (replacements, transcript)
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("0\n"), Choice::Suggestion(0));
        assert_eq!(Choice::parse(" 12 "), Choice::Suggestion(12));
        assert_eq!(Choice::parse("c"), Choice::Custom);
        assert_eq!(Choice::parse("i"), Choice::Ignore);
        assert_eq!(Choice::parse("what"), Choice::Ignore);
        assert_eq!(Choice::parse("-1"), Choice::Ignore);
        assert_eq!(Choice::parse("1abc"), Choice::Suggestion(1));
        assert_eq!(Choice::parse("99999999999999999999999"), Choice::Ignore);
    }

    #[test]
    fn test_pick_suggestion() {
        let (replacements, transcript) = run("the ct sat", "0\n");
        assert_eq!(replacements.get("ct"), Some("cat"));
        assert!(transcript.contains("Incorrect word: ct"));
        assert!(transcript.contains("0. cat"));
    }

    #[test]
    fn test_custom_and_ignore() {
        let (replacements, transcript) = run("xyzzy qq the", "c\nplugh\ni\n");
        assert_eq!(replacements.get("xyzzy"), Some("plugh"));
        assert_eq!(replacements.get("qq"), None);
        assert_eq!(replacements.len(), 1);
        assert!(transcript.contains("No suggestions found."));
    }

    #[test]
    fn test_answers_are_whitespace_tokens() {
        // Two answers on one line; the custom word stops at the space.
        let (replacements, _) = run("xyzzy ct the", "c plugh extra\n");
        assert_eq!(replacements.get("xyzzy"), Some("plugh"));
        assert_eq!(replacements.get("ct"), None);

        let (replacements, _) = run("ct", "  \n\n 0abc\n");
        assert_eq!(replacements.get("ct"), Some("cat"));
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let (replacements, _) = run("ct", "7\n");
        assert!(replacements.is_empty());
    }

    #[test]
    fn test_each_word_asked_once() {
        let (replacements, transcript) = run("ct ct ct", "0\n");
        assert_eq!(transcript.matches("Incorrect word").count(), 1);
        assert_eq!(replacements.get("ct"), Some("cat"));
    }

    #[test]
    fn test_input_exhausted() {
        let (replacements, transcript) = run("ct mt", "");
        assert!(replacements.is_empty());
        assert_eq!(transcript.matches("Incorrect word").count(), 1);
    }
}
