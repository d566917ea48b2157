//! Fonts, tags, pages and the document-level container.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::geometry::BoundingBox;

/// A font as referenced by tags. `font_id` is stable within a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Font {
    pub font_id: SmolStr,
    pub font_size: f64,
}

impl Font {
    pub fn new(font_id: impl Into<SmolStr>, font_size: f64) -> Self {
        Self {
            font_id: font_id.into(),
            font_size,
        }
    }
}

/// A single extracted text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: SmolStr,
    /// Text of the block; non-empty for every tag produced by ingestion.
    pub content: String,
    pub bounding_box: BoundingBox,
    pub font: Font,
}

impl Tag {
    pub fn new(
        id: impl Into<SmolStr>,
        content: impl Into<String>,
        bounding_box: BoundingBox,
        font: Font,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            bounding_box,
            font,
        }
    }
}

/// One page of tags, in reading/extraction order (not necessarily spatial).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    pub tags: Vec<Tag>,
    pub page_width: f64,
}

impl Page {
    pub fn new(tags: Vec<Tag>, page_width: f64) -> Self {
        Self { tags, page_width }
    }
}

/// All pages of a document plus the distinct fonts they use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PdfFeatures {
    pub pages: Vec<Page>,
    /// Distinct fonts keyed by `font_id`.
    pub fonts: Vec<Font>,
}

impl PdfFeatures {
    pub fn new(pages: Vec<Page>, fonts: Vec<Font>) -> Self {
        Self { pages, fonts }
    }

    /// Iterates over every tag of every page, in page order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.pages.iter().flat_map(|page| page.tags.iter())
    }

    /// Returns the fonts whose id equals `font_id`.
    pub fn fonts_with_id<'a>(&'a self, font_id: &'a str) -> impl Iterator<Item = &'a Font> {
        self.fonts.iter().filter(move |font| font.font_id.as_str() == font_id)
    }
}
