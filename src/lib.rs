//! # spelltrie
//!
//! Spell checking against a word list, with suggestions found by a bounded
//! edit-distance walk over a trie.
//!
//! ## Features
//!
//! - Constant-time exact checks through a hash set
//! - Fuzzy suggestions without scanning the whole vocabulary
//! - Highlighting and interactive correction of plain text
//!
//! ```
//! use spelltrie::prelude::*;
//!
//! let checker = SpellChecker::new(Dictionary::from_tokens(["cat", "cap", "car", "dog"]));
//! assert!(checker.contains("cat"));
//!
//! let suggestions = checker.suggest(&normalize("Cot"), None);
//! assert_eq!(suggestions, vec!["cap", "car", "cat"]);
//! ```

pub mod cli;
pub mod error;
pub mod spelling;
pub mod text;

pub mod prelude {
    pub use crate::error::{Result, SpelltrieError};
    pub use crate::spelling::checker::{CheckedWord, CheckerConfig, SpellChecker, WordCheck};
    pub use crate::spelling::dictionary::{Dictionary, VocabularySet};
    pub use crate::spelling::normalize::normalize;
    pub use crate::spelling::suggest::{SuggestionConfig, SuggestionOrder};
    pub use crate::spelling::trie::Trie;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
