//! Text handling around the spell checker: word spans, highlighted output and
//! replacement of misspelled words.

pub mod highlight;
pub mod interactive;
pub mod replace;
pub mod tokenizer;

pub use highlight::*;
pub use interactive::*;
pub use replace::*;
pub use tokenizer::*;
