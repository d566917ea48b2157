//! Error types for pairwise feature extraction.

use thiserror::Error;

/// Primary error type for feature extraction.
///
/// Geometric and lexical edge cases (empty neighbor sets, unknown letters,
/// single-character content) are absorbed with fallback values and never
/// surface here. Only contract violations by collaborators do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("no tag type for tag id: {id}")]
    MissingTagType { id: String },

    #[error("unknown tag type label: {0}")]
    UnknownTagType(String),

    #[error("letter corpus index {index} for {letter:?} is out of range (corpus size {len})")]
    CorpusIndexOutOfRange {
        letter: char,
        index: usize,
        len: usize,
    },

    #[error("letter corpus key is not a single character: {0:?}")]
    InvalidCorpusKey(String),
}

/// Convenience Result type alias for FeatureError.
pub type Result<T> = std::result::Result<T, FeatureError>;
