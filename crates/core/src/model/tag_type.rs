//! Tag type labels supplied by the external tag-type classifier.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::FeatureError;

/// The seven block types a tag can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Text,
    Title,
    Figure,
    Table,
    List,
    Footnote,
    Formula,
}

impl TagType {
    /// All labels, in the order their one-hot flags are emitted.
    pub const ALL: [TagType; 7] = [
        TagType::Text,
        TagType::Title,
        TagType::Figure,
        TagType::Table,
        TagType::List,
        TagType::Footnote,
        TagType::Formula,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TagType::Text => "text",
            TagType::Title => "title",
            TagType::Figure => "figure",
            TagType::Table => "table",
            TagType::List => "list",
            TagType::Footnote => "footnote",
            TagType::Formula => "formula",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagType::ALL
            .into_iter()
            .find(|tag_type| tag_type.as_str() == s)
            .ok_or_else(|| FeatureError::UnknownTagType(s.to_string()))
    }
}

/// Source of per-tag type labels.
///
/// Implementations must cover every real tag that reaches the feature
/// builder; a missing label fails that build.
pub trait TagTypeProvider {
    fn tag_type(&self, tag_id: &str) -> Option<TagType>;
}

impl<T: TagTypeProvider + ?Sized> TagTypeProvider for &T {
    fn tag_type(&self, tag_id: &str) -> Option<TagType> {
        (**self).tag_type(tag_id)
    }
}

/// Labels held in a plain map, e.g. deserialized straight from classifier
/// output.
impl<S: BuildHasher> TagTypeProvider for HashMap<String, TagType, S> {
    fn tag_type(&self, tag_id: &str) -> Option<TagType> {
        self.get(tag_id).copied()
    }
}

/// Precomputed tag id to type mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagTypes {
    types: FxHashMap<SmolStr, TagType>,
}

impl TagTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag_id: impl Into<SmolStr>, tag_type: TagType) -> Option<TagType> {
        self.types.insert(tag_id.into(), tag_type)
    }

    pub fn get(&self, tag_id: &str) -> Option<TagType> {
        self.types.get(tag_id).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Builds a mapping from raw classifier labels, rejecting unknown labels.
    pub fn from_labels<I, K, V>(labels: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<SmolStr>,
        V: AsRef<str>,
    {
        let mut types = Self::new();
        for (tag_id, label) in labels {
            types.insert(tag_id, label.as_ref().parse()?);
        }
        Ok(types)
    }
}

impl TagTypeProvider for TagTypes {
    fn tag_type(&self, tag_id: &str) -> Option<TagType> {
        self.get(tag_id)
    }
}

impl<K: Into<SmolStr>> FromIterator<(K, TagType)> for TagTypes {
    fn from_iter<I: IntoIterator<Item = (K, TagType)>>(iter: I) -> Self {
        let mut types = Self::new();
        for (tag_id, tag_type) in iter {
            types.insert(tag_id, tag_type);
        }
        types
    }
}
