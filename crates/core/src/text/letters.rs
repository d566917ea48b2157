//! One-hot encoding of boundary letters.
//!
//! Four positions of a tag's text are encoded: first, second, second-last and
//! last character. Each becomes a block of `L` values where `L` is the number
//! of distinct corpus indices:
//! - a known letter: zeros with a single `1` at its corpus index
//! - an unknown letter: all zeros
//! - a position that does not exist (second letter of a one-letter text,
//!   any letter of a padding tag): all `-1`

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{FeatureError, Result};
use crate::model::PairTag;

/// Value filling a block whose letter does not exist.
pub const MISSING_LETTER: f64 = -1.0;

/// Mapping from letter to one-hot index in `[0, L)`.
///
/// Several letters may share an index, so `L` counts distinct indices rather
/// than letters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterCorpus {
    indices: FxHashMap<char, usize>,
    len: usize,
}

impl LetterCorpus {
    /// Builds a corpus, rejecting any index outside `[0, L)`.
    pub fn new(entries: impl IntoIterator<Item = (char, usize)>) -> Result<Self> {
        let indices: FxHashMap<char, usize> = entries.into_iter().collect();
        let mut distinct: Vec<usize> = indices.values().copied().collect();
        distinct.sort_unstable();
        distinct.dedup();
        let len = distinct.len();

        if let Some((&letter, &index)) = indices.iter().find(|(_, index)| **index >= len) {
            return Err(FeatureError::CorpusIndexOutOfRange { letter, index, len });
        }

        debug!(letters = indices.len(), len, "built letter corpus");
        Ok(Self { indices, len })
    }

    /// Builds a corpus from string keys, each of which must be exactly one
    /// character.
    pub fn from_strings<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, usize)>) -> Result<Self> {
        let letters = entries
            .into_iter()
            .map(|(key, index)| {
                let key = key.as_ref();
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => Ok((letter, index)),
                    _ => Err(FeatureError::InvalidCorpusKey(key.to_string())),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(letters)
    }

    /// Size `L` of every one-hot block.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index_of(&self, letter: char) -> Option<usize> {
        self.indices.get(&letter).copied()
    }
}

/// Letter positions, in the order their blocks are emitted for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterPosition {
    First,
    Second,
    SecondLast,
    Last,
}

impl LetterPosition {
    pub const ALL: [LetterPosition; 4] = [
        LetterPosition::First,
        LetterPosition::Second,
        LetterPosition::SecondLast,
        LetterPosition::Last,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LetterPosition::First => "first_letter",
            LetterPosition::Second => "second_letter",
            LetterPosition::SecondLast => "second_last_letter",
            LetterPosition::Last => "last_letter",
        }
    }

    /// The letter at this position, if the text is long enough.
    pub fn letter_in(self, content: &str) -> Option<char> {
        match self {
            LetterPosition::First => content.chars().next(),
            LetterPosition::Second => content.chars().nth(1),
            LetterPosition::SecondLast => content.chars().rev().nth(1),
            LetterPosition::Last => content.chars().next_back(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LetterEncoder<'a> {
    corpus: &'a LetterCorpus,
}

impl<'a> LetterEncoder<'a> {
    pub fn new(corpus: &'a LetterCorpus) -> Self {
        Self { corpus }
    }

    /// Encodes one letter position of `tag` as a block of `L` values.
    pub fn encode(&self, tag: PairTag<'_>, position: LetterPosition) -> Vec<f64> {
        let mut block = Vec::with_capacity(self.corpus.len());
        self.encode_into(tag, position, &mut block);
        block
    }

    /// Appends the block for one letter position of `tag` to `out`.
    pub fn encode_into(&self, tag: PairTag<'_>, position: LetterPosition, out: &mut Vec<f64>) {
        let len = self.corpus.len();
        let letter = match tag {
            PairTag::Real(tag) => position.letter_in(&tag.content),
            PairTag::Pad(_) => None,
        };

        match letter {
            None => out.extend(std::iter::repeat_n(MISSING_LETTER, len)),
            Some(letter) => {
                let start = out.len();
                out.extend(std::iter::repeat_n(0.0, len));
                if let Some(index) = self.corpus.index_of(letter) {
                    out[start + index] = 1.0;
                }
            }
        }
    }

    /// Appends all four letter blocks of `tag`, in LetterPosition::ALL order.
    pub fn encode_all_into(&self, tag: PairTag<'_>, out: &mut Vec<f64>) {
        for position in LetterPosition::ALL {
            self.encode_into(tag, position, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Font, PadTag, Tag};

    fn corpus() -> LetterCorpus {
        LetterCorpus::new([('a', 0), ('b', 1), ('.', 2), ('A', 0)]).unwrap()
    }

    fn tag(content: &str) -> Tag {
        Tag::new("t", content, BoundingBox::default(), Font::default())
    }

    #[test]
    fn test_corpus_len_counts_distinct_indices() {
        let corpus = corpus();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.index_of('A'), Some(0));
        assert_eq!(corpus.index_of('z'), None);
    }

    #[test]
    fn test_corpus_rejects_gaps() {
        let err = LetterCorpus::new([('a', 0), ('b', 5)]).unwrap_err();
        assert_eq!(
            err,
            FeatureError::CorpusIndexOutOfRange {
                letter: 'b',
                index: 5,
                len: 2
            }
        );
    }

    #[test]
    fn test_corpus_from_strings() {
        let corpus = LetterCorpus::from_strings([("a", 0), ("é", 1)]).unwrap();
        assert_eq!(corpus.index_of('é'), Some(1));

        let err = LetterCorpus::from_strings([("ab", 0)]).unwrap_err();
        assert_eq!(err, FeatureError::InvalidCorpusKey("ab".to_string()));
    }

    #[test]
    fn test_letter_positions() {
        assert_eq!(LetterPosition::First.letter_in("abc"), Some('a'));
        assert_eq!(LetterPosition::Second.letter_in("abc"), Some('b'));
        assert_eq!(LetterPosition::SecondLast.letter_in("abc"), Some('b'));
        assert_eq!(LetterPosition::Last.letter_in("abc"), Some('c'));
        assert_eq!(LetterPosition::Second.letter_in("a"), None);
        assert_eq!(LetterPosition::SecondLast.letter_in("a"), None);
    }

    #[test]
    fn test_encode_known_and_unknown() {
        let corpus = corpus();
        let encoder = LetterEncoder::new(&corpus);
        let t = tag("ab.");

        assert_eq!(encoder.encode((&t).into(), LetterPosition::First), vec![1.0, 0.0, 0.0]);
        assert_eq!(encoder.encode((&t).into(), LetterPosition::Last), vec![0.0, 0.0, 1.0]);

        let unknown = tag("xyz");
        assert_eq!(encoder.encode((&unknown).into(), LetterPosition::First), vec![0.0; 3]);
    }

    #[test]
    fn test_encode_single_letter() {
        let corpus = corpus();
        let encoder = LetterEncoder::new(&corpus);
        let t = tag("b");

        assert_eq!(encoder.encode((&t).into(), LetterPosition::Second), vec![-1.0; 3]);
        assert_eq!(encoder.encode((&t).into(), LetterPosition::SecondLast), vec![-1.0; 3]);
        assert_eq!(
            encoder.encode((&t).into(), LetterPosition::First),
            encoder.encode((&t).into(), LetterPosition::Last)
        );
    }

    #[test]
    fn test_encode_pad() {
        let corpus = corpus();
        let encoder = LetterEncoder::new(&corpus);
        let pad = PadTag::default();

        let mut out = Vec::new();
        encoder.encode_all_into((&pad).into(), &mut out);
        assert_eq!(out, vec![-1.0; 12]);
    }
}
