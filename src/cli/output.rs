//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpelltrieArgs};
use crate::error::Result;
use crate::spelling::checker::WordCheck;

/// Results that know how to print themselves for a terminal reader.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

/// A misspelled word and where it occurs.
#[derive(Debug, Serialize, Deserialize)]
pub struct Misspelling {
    pub word: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Result structure for checking a text.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub path: String,
    pub total_words: usize,
    pub misspellings: Vec<Misspelling>,
    /// Rendered text; omitted from JSON.
    #[serde(skip)]
    pub highlighted: String,
}

impl HumanOutput for CheckResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.highlighted)?;
        writeln!(
            out,
            "{} words, {} misspelled",
            self.total_words,
            self.misspellings.len()
        )?;
        Ok(())
    }
}

/// Result structure for word suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub words: Vec<WordCheck>,
}

impl HumanOutput for SuggestResults {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for check in &self.words {
            if check.normalized.is_empty() {
                writeln!(out, "{}: not a word", check.word)?;
            } else if check.correct {
                writeln!(out, "{}: ok", check.word)?;
            } else if check.suggestions.is_empty() {
                writeln!(out, "{}: no suggestions", check.word)?;
            } else {
                writeln!(out, "{}: {}", check.word, check.suggestions.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Result structure for interactive correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct FixResult {
    pub output_path: String,
    pub replaced_words: usize,
}

impl HumanOutput for FixResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "Corrected text saved to {} ({} words replaced)",
            self.output_path, self.replaced_words
        )?;
        Ok(())
    }
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub words: usize,
    pub trie_nodes: usize,
}

impl HumanOutput for DictionaryStats {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dictionary Statistics:")?;
        writeln!(out, "══════════════════════")?;
        writeln!(out, "Path: {}", self.path)?;
        writeln!(out, "Words: {}", self.words)?;
        writeln!(out, "Trie nodes: {}", self.trie_nodes)?;
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(out: &mut dyn Write, result: &T, args: &SpelltrieArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(out, result, args.pretty),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(out: &mut dyn Write, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(format: &str) -> SpelltrieArgs {
        SpelltrieArgs::try_parse_from(["spelltrie", "-f", format, "stats", "-d", "w"]).unwrap()
    }

    fn stats() -> DictionaryStats {
        DictionaryStats {
            path: "words.txt".to_string(),
            words: 4,
            trie_nodes: 9,
        }
    }

    #[test]
    fn test_human_stats() {
        let mut out = Vec::new();
        output_result(&mut out, &stats(), &args("human")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Words: 4"));
        assert!(text.contains("Trie nodes: 9"));
    }

    #[test]
    fn test_json_stats() {
        let mut out = Vec::new();
        output_result(&mut out, &stats(), &args("json")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["words"], 4);
        assert_eq!(value["trie_nodes"], 9);
    }

    #[test]
    fn test_human_suggestions() {
        let results = SuggestResults {
            words: vec![
                WordCheck {
                    word: "Cot".to_string(),
                    normalized: "cot".to_string(),
                    correct: false,
                    suggestions: vec!["cat".to_string(), "cut".to_string()],
                },
                WordCheck {
                    word: "42".to_string(),
                    normalized: String::new(),
                    correct: true,
                    suggestions: Vec::new(),
                },
            ],
        };
        let mut out = Vec::new();
        results.write_human(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cot: cat, cut\n42: not a word\n");
    }

    #[test]
    fn test_json_check_skips_highlighted() {
        let result = CheckResult {
            path: "in.txt".to_string(),
            total_words: 2,
            misspellings: vec![Misspelling {
                word: "teh".to_string(),
                start_offset: 0,
                end_offset: 3,
            }],
            highlighted: "ignored".to_string(),
        };
        let mut out = Vec::new();
        output_result(&mut out, &result, &args("json")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.get("highlighted").is_none());
        assert_eq!(value["misspellings"][0]["word"], "teh");
    }
}
