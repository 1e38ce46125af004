//! Fuzzy search over the vocabulary trie.
//!
//! A depth-first walk keeps the current path in a single buffer (push on
//! descent, pop on return) and compares every terminal path with the target
//! using [`bounded_distance_chars`]. Branches whose path would grow longer than
//! `target.len() + max_distance` are never entered: each extra character adds
//! at least one edit, so nothing below them can come back within bound.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::bounded_distance_chars;
use crate::spelling::trie::{NodeId, Trie};

/// Default cap on returned suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Default edit distance when a caller does not give one.
pub const DEFAULT_DISTANCE: usize = 1;

/// How matches are ordered before the cap is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionOrder {
    /// First matches met by the walk; the walk stops at the cap.
    #[default]
    Traversal,
    /// All matches sorted by distance, then word, then truncated.
    Ranked,
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Edit distance used when the caller omits one.
    pub default_distance: usize,
    /// Ordering of the returned list.
    pub order: SuggestionOrder,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            default_distance: DEFAULT_DISTANCE,
            order: SuggestionOrder::Traversal,
        }
    }
}

/// A match found by [`suggest_ranked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the target.
    pub distance: usize,
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Words within `max_distance` of `target`, at most `cap` of them, in walk order.
///
/// Children are visited in ascending character order, so for a given
/// vocabulary the result is deterministic; it is not ranked by distance.
pub fn suggest(trie: &Trie, target: &str, max_distance: usize, cap: usize) -> Vec<String> {
    let mut search = FuzzySearch::new(trie, target, max_distance, cap);
    search.run();
    search.matches.into_iter().map(|s| s.word).collect()
}

/// Every word within `max_distance` of `target`, sorted by distance then word,
/// truncated to `cap`.
pub fn suggest_ranked(
    trie: &Trie,
    target: &str,
    max_distance: usize,
    cap: usize,
) -> Vec<Suggestion> {
    if cap == 0 {
        return Vec::new();
    }
    let mut search = FuzzySearch::new(trie, target, max_distance, usize::MAX);
    search.run();

    let mut matches = search.matches;
    matches.sort_unstable();
    matches.truncate(cap);
    matches
}

/// Suggestions using the order chosen in `config`.
pub fn suggest_with_config(
    trie: &Trie,
    target: &str,
    max_distance: usize,
    config: &SuggestionConfig,
) -> Vec<String> {
    match config.order {
        SuggestionOrder::Traversal => suggest(trie, target, max_distance, config.max_suggestions),
        SuggestionOrder::Ranked => {
            suggest_ranked(trie, target, max_distance, config.max_suggestions)
                .into_iter()
                .map(|s| s.word)
                .collect()
        }
    }
}

struct FuzzySearch<'a> {
    trie: &'a Trie,
    target: Vec<char>,
    max_distance: usize,
    max_len: usize,
    cap: usize,
    path: Vec<char>,
    matches: Vec<Suggestion>,
}

impl<'a> FuzzySearch<'a> {
    fn new(trie: &'a Trie, target: &str, max_distance: usize, cap: usize) -> Self {
        let target: Vec<char> = target.chars().collect();
        let max_len = target.len() + max_distance;
        FuzzySearch {
            trie,
            target,
            max_distance,
            max_len,
            cap,
            path: Vec::with_capacity(max_len),
            matches: Vec::new(),
        }
    }

    fn run(&mut self) {
        if self.cap > 0 {
            self.visit(self.trie.root());
        }
    }

    fn is_full(&self) -> bool {
        self.matches.len() >= self.cap
    }

    fn visit(&mut self, id: NodeId) {
        let trie = self.trie;
        let node = trie.node(id);

        if node.is_terminal() && !self.path.is_empty() {
            let distance = bounded_distance_chars(&self.path, &self.target);
            if distance <= self.max_distance {
                self.matches.push(Suggestion {
                    word: self.path.iter().collect(),
                    distance,
                });
                if self.is_full() {
                    return;
                }
            }
        }

        // Children would be longer than any path that can still match.
        if self.path.len() >= self.max_len {
            return;
        }

        for (c, child) in node.children() {
            self.path.push(c);
            self.visit(child);
            self.path.pop();
            if self.is_full() {
                return;
            }
        }
    }
}
