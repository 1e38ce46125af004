//! Spell checking core for spelltrie.
//!
//! Vocabulary words are normalized, stored in a hash set for exact checks and
//! in a trie for bounded edit-distance suggestions.

pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod normalize;
pub mod suggest;
pub mod trie;

// Re-export commonly used types
pub use checker::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use normalize::*;
pub use suggest::*;
pub use trie::*;
