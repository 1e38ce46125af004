//! Dictionary management for spell checking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::{info, warn};

use crate::error::{Result, SpelltrieError};
use crate::spelling::normalize::normalize_bytes;
use crate::spelling::trie::Trie;

/// Hash set of canonical words for constant-time exact checks.
#[derive(Debug, Clone, Default)]
pub struct VocabularySet {
    words: AHashSet<String>,
}

impl VocabularySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from already-normalized words. Empty words are skipped.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.into());
        }
        set
    }

    /// Insert a canonical word. Duplicates and empty words are no-ops.
    pub fn insert(&mut self, word: String) {
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    /// Check if a word exists in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The vocabulary indexed twice: a hash set for exact checks and a trie for
/// fuzzy search. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    exact: VocabularySet,
    trie: Trie,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a raw token and add it to both indexes.
    ///
    /// Returns false when the token has no letters and was skipped.
    pub fn add_token(&mut self, raw: &str) -> bool {
        self.add_raw_token(raw.as_bytes())
    }

    /// [`Dictionary::add_token`] for a token in any byte encoding.
    pub fn add_raw_token(&mut self, raw: &[u8]) -> bool {
        let word = normalize_bytes(raw);
        if word.is_empty() {
            return false;
        }
        self.trie.insert(&word);
        self.exact.insert(word);
        true
    }

    /// Build a dictionary from raw tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for token in tokens {
            dictionary.add_token(token.as_ref());
        }
        dictionary
    }

    /// Build a dictionary from a reader of whitespace-separated tokens.
    ///
    /// The source is read as bytes, so a word list that is not valid UTF-8
    /// still loads; only its ASCII letters reach the vocabulary.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut dictionary = Self::new();
        let mut skipped = 0usize;
        let mut line = Vec::new();

        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line).map_err(|e| {
                SpelltrieError::dictionary(format!("Cannot read vocabulary: {e}"))
            })?;
            if read == 0 {
                break;
            }
            for token in line.split(|&b| is_token_separator(b)) {
                if !token.is_empty() && !dictionary.add_raw_token(token) {
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {skipped} vocabulary tokens without letters");
        }
        Ok(dictionary)
    }

    /// Load a dictionary from a text file of whitespace-separated tokens.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SpelltrieError::dictionary(format!("Cannot open {}: {e}", path.display()))
        })?;

        let dictionary = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} words ({} trie nodes) from {}",
            dictionary.word_count(),
            dictionary.trie.node_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Exact membership of a canonical word.
    pub fn contains(&self, word: &str) -> bool {
        self.exact.contains(word)
    }

    /// The trie used for fuzzy search.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The exact-match index.
    pub fn vocabulary(&self) -> &VocabularySet {
        &self.exact
    }

    /// Number of distinct canonical words.
    pub fn word_count(&self) -> usize {
        self.exact.len()
    }
}

/// Token separators of a word list: ASCII whitespace, vertical tab included.
fn is_token_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}
