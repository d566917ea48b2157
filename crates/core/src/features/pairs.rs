//! Reading-order pair enumeration and batch building.

use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::model::{PadTag, Page, PairTag, Tag, TagTypeProvider};

use super::builder::PairFeatureBuilder;

/// Consecutive `(tags[i], tags[i + 1])` pairs of a page.
pub fn reading_order_pairs(page: &Page) -> Vec<(PairTag<'_>, PairTag<'_>)> {
    page.tags
        .iter()
        .map(PairTag::Real)
        .tuple_windows()
        .collect()
}

/// Consecutive pairs bracketed by `(pad, first)` and `(last, pad)`.
/// An empty page has no pairs.
pub fn padded_reading_order_pairs<'a>(page: &'a Page, pad: &'a PadTag) -> Vec<(PairTag<'a>, PairTag<'a>)> {
    if page.tags.is_empty() {
        return Vec::new();
    }
    std::iter::once(PairTag::Pad(pad))
        .chain(page.tags.iter().map(PairTag::Real))
        .chain(std::iter::once(PairTag::Pad(pad)))
        .tuple_windows()
        .collect()
}

impl<P: TagTypeProvider + Sync> PairFeatureBuilder<'_, P> {
    /// Builds every pair in parallel, preserving input order. The first
    /// failing pair fails the whole batch.
    pub fn build_batch(
        &self,
        pairs: &[(PairTag<'_>, PairTag<'_>)],
        tags_on_page: &[Tag],
    ) -> Result<Vec<Vec<f64>>> {
        pairs
            .par_iter()
            .map(|(tag_1, tag_2)| self.build(*tag_1, *tag_2, tags_on_page))
            .collect()
    }

    /// Builds the reading-order pairs of `page` against the page's own tags.
    pub fn build_page(&self, page: &Page) -> Result<Vec<Vec<f64>>> {
        let pairs = reading_order_pairs(page);
        debug!(tags = page.tags.len(), pairs = pairs.len(), "building page features");
        self.build_batch(&pairs, &page.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Font};

    fn page(ids: &[&str]) -> Page {
        let tags = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                Tag::new(
                    *id,
                    "x",
                    BoundingBox::new(0.0, 20.0 * i as f64, 50.0, 10.0),
                    Font::default(),
                )
            })
            .collect();
        Page::new(tags, 600.0)
    }

    fn ids(pairs: &[(PairTag<'_>, PairTag<'_>)]) -> Vec<(String, String)> {
        let id = |tag: &PairTag<'_>| match tag {
            PairTag::Real(tag) => tag.id.to_string(),
            PairTag::Pad(_) => "pad".to_string(),
        };
        pairs.iter().map(|(a, b)| (id(a), id(b))).collect()
    }

    #[test]
    fn test_reading_order_pairs() {
        let page = page(&["a", "b", "c"]);
        let pairs = reading_order_pairs(&page);
        assert_eq!(
            ids(&pairs),
            vec![("a".into(), "b".into()), ("b".into(), "c".into())]
        );
    }

    #[test]
    fn test_single_tag_has_no_pairs() {
        assert!(reading_order_pairs(&page(&["a"])).is_empty());
        assert!(reading_order_pairs(&page(&[])).is_empty());
    }

    #[test]
    fn test_padded_pairs() {
        let pad = PadTag::default();
        let page = page(&["a", "b"]);
        let pairs = padded_reading_order_pairs(&page, &pad);
        assert_eq!(
            ids(&pairs),
            vec![
                ("pad".into(), "a".into()),
                ("a".into(), "b".into()),
                ("b".into(), "pad".into())
            ]
        );
        assert!(padded_reading_order_pairs(&crate::model::Page::default(), &pad).is_empty());
    }
}
