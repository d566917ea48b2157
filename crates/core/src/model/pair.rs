//! Tags as they appear in a pairwise query.
//!
//! A pair member is either a real tag from a page or a synthetic padding tag
//! standing for "no such neighbor". The padding case is a variant rather
//! than a magic id, so it cannot be confused with a real tag.

use super::document::{Font, Tag};
use super::geometry::BoundingBox;

/// Synthetic placeholder tag. It has geometry and a font but no content and
/// no type label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PadTag {
    pub bounding_box: BoundingBox,
    pub font: Font,
}

impl PadTag {
    pub fn new(bounding_box: BoundingBox, font: Font) -> Self {
        Self { bounding_box, font }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairTag<'a> {
    Real(&'a Tag),
    Pad(&'a PadTag),
}

impl<'a> PairTag<'a> {
    pub fn bounding_box(&self) -> &'a BoundingBox {
        match self {
            PairTag::Real(tag) => &tag.bounding_box,
            PairTag::Pad(pad) => &pad.bounding_box,
        }
    }

    pub fn font(&self) -> &'a Font {
        match self {
            PairTag::Real(tag) => &tag.font,
            PairTag::Pad(pad) => &pad.font,
        }
    }

    /// Text content; empty for a padding tag.
    pub fn content(&self) -> &'a str {
        match self {
            PairTag::Real(tag) => &tag.content,
            PairTag::Pad(_) => "",
        }
    }

    pub fn is_pad(&self) -> bool {
        matches!(self, PairTag::Pad(_))
    }
}

impl<'a> From<&'a Tag> for PairTag<'a> {
    fn from(tag: &'a Tag) -> Self {
        PairTag::Real(tag)
    }
}

impl<'a> From<&'a PadTag> for PairTag<'a> {
    fn from(pad: &'a PadTag) -> Self {
        PairTag::Pad(pad)
    }
}
