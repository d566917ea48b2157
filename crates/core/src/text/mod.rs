//! Lexical features of tag content.

pub mod counts;
pub mod letters;

pub use counts::ContentCounts;
pub use letters::{LetterCorpus, LetterEncoder, LetterPosition};
