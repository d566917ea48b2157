//! Pairwise feature builder.
//!
//! Turns an ordered pair of tags into the fixed-length vector consumed by the
//! paragraph classifier. Document-level statistics are computed once when the
//! builder is created; every `build` call is a pure function of the pair, the
//! candidate tags and that fixed state.

use tracing::{debug, trace};

use crate::error::{FeatureError, Result};
use crate::layout::{Envelope, LineNeighborFinder, PageLayoutStatistics};
use crate::model::{BoundingBox, PairTag, PdfFeatures, Tag, TagType, TagTypeProvider};
use crate::params::FeatureParams;
use crate::text::{ContentCounts, LetterCorpus, LetterEncoder};
use crate::utils::{flag, max_f64, min_f64};

use super::names::feature_len;

/// Immutable feature configuration, shared by reference across queries.
#[derive(Debug, Clone)]
pub struct PairFeatureBuilder<'a, P> {
    statistics: PageLayoutStatistics,
    corpus: &'a LetterCorpus,
    tag_types: &'a P,
    params: FeatureParams,
}

impl<'a, P: TagTypeProvider> PairFeatureBuilder<'a, P> {
    /// Computes the document statistics of `pdf` with default parameters.
    pub fn new(pdf: &PdfFeatures, corpus: &'a LetterCorpus, tag_types: &'a P) -> Self {
        Self::with_params(pdf, corpus, tag_types, FeatureParams::default())
    }

    pub fn with_params(
        pdf: &PdfFeatures,
        corpus: &'a LetterCorpus,
        tag_types: &'a P,
        params: FeatureParams,
    ) -> Self {
        let statistics = PageLayoutStatistics::compute(pdf, &params);
        Self::from_statistics(statistics, corpus, tag_types, params)
    }

    /// Uses already computed statistics.
    ///
    /// # Panics
    /// Panics if `params.font_size_scale` is zero or not finite.
    pub fn from_statistics(
        statistics: PageLayoutStatistics,
        corpus: &'a LetterCorpus,
        tag_types: &'a P,
        params: FeatureParams,
    ) -> Self {
        params.validate();
        debug!(
            letter_corpus_len = corpus.len(),
            feature_len = feature_len(corpus.len()),
            "created pair feature builder"
        );
        Self {
            statistics,
            corpus,
            tag_types,
            params,
        }
    }

    pub fn statistics(&self) -> &PageLayoutStatistics {
        &self.statistics
    }

    pub fn params(&self) -> &FeatureParams {
        &self.params
    }

    /// Length of every vector this builder produces.
    pub fn feature_len(&self) -> usize {
        feature_len(self.corpus.len())
    }

    /// Builds the feature vector of `(tag_1, tag_2)`.
    ///
    /// `tags_on_page` is the candidate set for neighbor and interior search,
    /// normally every tag of the page holding the pair. Fails only if a real
    /// tag has no type label.
    pub fn build(&self, tag_1: PairTag<'_>, tag_2: PairTag<'_>, tags_on_page: &[Tag]) -> Result<Vec<f64>> {
        let type_1 = self.resolve_type(tag_1)?;
        let type_2 = self.resolve_type(tag_2)?;
        trace!(
            pad_1 = tag_1.is_pad(),
            pad_2 = tag_2.is_pad(),
            candidates = tags_on_page.len(),
            "building pair features"
        );

        let box_1 = tag_1.bounding_box();
        let box_2 = tag_2.bounding_box();
        let geometry = PairGeometry::measure(box_1, box_2, tags_on_page);
        let stats = &self.statistics;
        let lines_space_mode = stats.lines_space_mode as f64;
        let right_space_mode = stats.right_space_mode as f64;

        let mut features = Vec::with_capacity(self.feature_len());
        features.extend([
            stats.font_size_mode / self.params.font_size_scale,
            flag(tag_1.font().font_id == tag_2.font().font_id),
            geometry.absolute_right_1,
            box_1.top,
            box_1.right,
            box_1.width,
            box_1.height,
            box_2.top,
            box_2.right,
            box_2.width,
            box_2.height,
            geometry.top_distance,
            geometry.top_distance - lines_space_mode,
            geometry.top_distance_gaps,
            lines_space_mode - geometry.top_distance_gaps,
            right_space_mode - geometry.absolute_right_1,
            geometry.top_distance - box_1.height,
            geometry.start_lines_differences,
            box_2.left - box_1.left - box_1.width,
            box_1.left - box_2.left,
            geometry.right_gap_1,
            geometry.left_gap_2,
            box_1.height - box_2.height,
            geometry.end_lines_difference,
        ]);

        for tag_type in [type_1, type_2] {
            features.extend(TagType::ALL.iter().map(|t| flag(tag_type == Some(*t))));
        }

        let counts_1 = ContentCounts::of(tag_1.content());
        let counts_2 = ContentCounts::of(tag_2.content());
        features.extend([
            counts_1.chars as f64,
            counts_2.chars as f64,
            counts_1.spaces as f64,
            counts_2.spaces as f64,
            counts_1.punctuation as f64,
            counts_2.punctuation as f64,
        ]);

        let encoder = LetterEncoder::new(self.corpus);
        encoder.encode_all_into(tag_1, &mut features);
        encoder.encode_all_into(tag_2, &mut features);

        debug_assert_eq!(features.len(), self.feature_len());
        Ok(features)
    }

    /// Type label of a pair member; padding tags have none.
    fn resolve_type(&self, tag: PairTag<'_>) -> Result<Option<TagType>> {
        match tag {
            PairTag::Pad(_) => Ok(None),
            PairTag::Real(tag) => self
                .tag_types
                .tag_type(&tag.id)
                .map(Some)
                .ok_or_else(|| FeatureError::MissingTagType {
                    id: tag.id.to_string(),
                }),
        }
    }
}

/// Distances between the two tags of a pair and their surroundings.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PairGeometry {
    right_gap_1: f64,
    left_gap_2: f64,
    absolute_right_1: f64,
    end_lines_difference: f64,
    start_lines_differences: f64,
    top_distance: f64,
    top_distance_gaps: f64,
}

impl PairGeometry {
    fn measure(box_1: &BoundingBox, box_2: &BoundingBox, tags_on_page: &[Tag]) -> Self {
        let finder = LineNeighborFinder::new(tags_on_page);
        let right_of_1 = finder.find_right_neighbor(box_1);
        let left_of_1 = finder.find_left_neighbor(box_1);
        let right_of_2 = finder.find_right_neighbor(box_2);
        let left_of_2 = finder.find_left_neighbor(box_2);

        let absolute_right_1 = absolute_right(box_1, right_of_1);
        let absolute_right_2 = absolute_right(box_2, right_of_2);

        let top_distance = box_2.top - box_1.top - box_1.height;
        let (gap_middle_top, gap_middle_bottom) = interior_gaps(box_1, box_2, tags_on_page);

        Self {
            right_gap_1: right_of_1.left - box_1.right,
            left_gap_2: box_2.left - left_of_2.right,
            absolute_right_1,
            end_lines_difference: (absolute_right_1 - absolute_right_2).abs(),
            start_lines_differences: absolute_left(box_1, left_of_1) - absolute_left(box_2, left_of_2),
            top_distance,
            top_distance_gaps: top_distance - (gap_middle_bottom - gap_middle_top),
        }
    }
}

/// Right end of the tag's line, including same-line blocks to its right.
fn absolute_right(bbox: &BoundingBox, right_of: Envelope) -> f64 {
    (bbox.left + bbox.width).max(right_of.right)
}

/// Left start of the tag's line, including same-line blocks to its left.
/// A left envelope starting at 0 counts as absent.
fn absolute_left(bbox: &BoundingBox, left_of: Envelope) -> f64 {
    let neighbor_left = if left_of.left == 0.0 {
        bbox.left
    } else {
        left_of.left
    };
    bbox.left.min(neighbor_left)
}

/// Gaps above and below the content lying vertically between the two tags.
///
/// ```text
///   +--------+
///   | tag 1  |
///   +--------+  -
///                 | gap_middle_top
///     +----+    -
///     |    |       interior tags (top in [tag_1.bottom, tag_2.top))
///     +----+    -
///                 | gap_middle_bottom
///   +--------+  -
///   | tag 2  |
/// ```
///
/// Both gaps are 0 when nothing lies in between.
fn interior_gaps(box_1: &BoundingBox, box_2: &BoundingBox, tags_on_page: &[Tag]) -> (f64, f64) {
    let interior: Vec<&BoundingBox> = tags_on_page
        .iter()
        .map(|tag| &tag.bounding_box)
        .filter(|bbox| box_1.bottom <= bbox.top && bbox.top < box_2.top)
        .collect();

    let middle_top = max_f64(interior.iter().map(|bbox| bbox.top)).unwrap_or(0.0);
    let middle_bottom = min_f64(interior.iter().map(|bbox| bbox.bottom)).unwrap_or(0.0);

    let gap_middle_top = if middle_top > 0.0 {
        middle_top - box_1.top - box_1.height
    } else {
        0.0
    };
    let gap_middle_bottom = if middle_bottom > 0.0 {
        box_2.top - middle_bottom
    } else {
        0.0
    };
    (gap_middle_top, gap_middle_bottom)
}
