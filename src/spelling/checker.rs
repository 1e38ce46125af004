//! Spell checker tying the dictionary and the fuzzy search together.

use std::fs;
use std::path::Path;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpelltrieError};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::LENGTH_GAP_LIMIT;
use crate::spelling::normalize::normalize;
use crate::spelling::suggest::{SuggestionConfig, suggest_with_config};
use crate::text::tokenizer::{WordSpan, tokenize};

/// Configuration for the spell checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Suggestion settings.
    pub suggestion: SuggestionConfig,
}

impl CheckerConfig {
    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CheckerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the bounded distance cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion.default_distance > LENGTH_GAP_LIMIT {
            return Err(SpelltrieError::invalid_config(format!(
                "default_distance must be at most {LENGTH_GAP_LIMIT}, got {}",
                self.suggestion.default_distance
            )));
        }
        Ok(())
    }
}

/// One word of a checked text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedWord {
    /// Location and raw text in the source.
    pub span: WordSpan,
    /// Canonical form used for lookup.
    pub normalized: String,
    /// Whether the word is known (or not checkable).
    pub correct: bool,
}

/// Result of checking a single raw token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCheck {
    pub word: String,
    pub normalized: String,
    pub correct: bool,
    pub suggestions: Vec<String>,
}

/// Immutable spell checker. Build it once and share it by reference.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    config: CheckerConfig,
}

impl SpellChecker {
    /// Create a checker with the default configuration.
    pub fn new(dictionary: Dictionary) -> Self {
        SpellChecker {
            dictionary,
            config: CheckerConfig::default(),
        }
    }

    /// Create a checker with a custom configuration.
    pub fn with_config(dictionary: Dictionary, config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpellChecker { dictionary, config })
    }

    /// Load the vocabulary from `path` and build a checker.
    pub fn from_file<P: AsRef<Path>>(path: P, config: CheckerConfig) -> Result<Self> {
        let dictionary = Dictionary::load_from_file(path)?;
        Self::with_config(dictionary, config)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Exact check of a canonical word.
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Suggestions for a canonical word.
    ///
    /// `distance` falls back to the configured default when `None`.
    pub fn suggest(&self, word: &str, distance: Option<usize>) -> Vec<String> {
        let distance = distance.unwrap_or(self.config.suggestion.default_distance);
        let suggestions =
            suggest_with_config(self.dictionary.trie(), word, distance, &self.config.suggestion);
        debug!(
            "{} suggestions for {word:?} within distance {distance}",
            suggestions.len()
        );
        suggestions
    }

    /// Whether a raw token is acceptable: either known or without letters.
    pub fn is_correct(&self, raw: &str) -> bool {
        let normalized = normalize(raw);
        normalized.is_empty() || self.contains(&normalized)
    }

    /// Normalize, check and, when unknown, suggest for one raw token.
    pub fn check_word(&self, raw: &str) -> WordCheck {
        let normalized = normalize(raw);
        let correct = normalized.is_empty() || self.contains(&normalized);
        let suggestions = if correct {
            debug!("{normalized:?} found in vocabulary");
            Vec::new()
        } else {
            self.suggest(&normalized, None)
        };

        WordCheck {
            word: raw.to_string(),
            normalized,
            correct,
            suggestions,
        }
    }

    /// Split `text` into words and check each one. `text` may be any bytes.
    pub fn check_text<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Vec<CheckedWord> {
        tokenize(text)
            .into_iter()
            .map(|span| {
                let normalized = normalize(&span.text);
                let correct = normalized.is_empty() || self.contains(&normalized);
                CheckedWord {
                    span,
                    normalized,
                    correct,
                }
            })
            .collect()
    }

    /// Suggestions for several canonical words, computed in parallel.
    ///
    /// Output order follows input order.
    pub fn suggest_batch(&self, words: &[&str]) -> Vec<(String, Vec<String>)> {
        words
            .par_iter()
            .map(|word| (word.to_string(), self.suggest(word, None)))
            .collect()
    }
}
