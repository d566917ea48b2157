//! Document-wide dominant layout values.
//!
//! Three modes are sampled once per document:
//! - line spacing: the smallest vertical gap from each tag to any tag below it
//! - right margin: how far the most common flush-right edge sits from the
//!   right edge of the first page
//! - font size: the size of the most frequently used font
//!
//! Every sample list is seeded with `0`, so an empty document yields zeros.

use tracing::{debug, warn};

use crate::model::PdfFeatures;
use crate::params::{FeatureParams, ModeTieBreak};
use crate::utils::{ModeCounter, truncate};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageLayoutStatistics {
    /// Most frequent integer gap between a tag and the nearest tag below it.
    pub lines_space_mode: i64,
    /// First page width minus the most frequent flush-right edge, truncated.
    pub right_space_mode: i64,
    /// Size of the most used font, or 0 if it cannot be resolved.
    pub font_size_mode: f64,
}

impl PageLayoutStatistics {
    pub fn compute(pdf: &PdfFeatures, params: &FeatureParams) -> Self {
        let tie_break = params.tie_break;
        let (line_spaces, right_edges) = sample_line_geometry(pdf);

        let lines_space_mode = line_spaces.mode(tie_break).copied().unwrap_or(0);
        let right_edge_mode = right_edges.mode(tie_break).copied().unwrap_or(0);
        let page_width = pdf.pages.first().map_or(0.0, |page| page.page_width);
        let right_space_mode = truncate(page_width - right_edge_mode as f64);
        let font_size_mode = font_size_mode(pdf, params.font_tie_break).unwrap_or(0.0);

        debug!(
            pages = pdf.pages.len(),
            lines_space_mode, right_space_mode, font_size_mode, "computed layout statistics"
        );

        Self {
            lines_space_mode,
            right_space_mode,
            font_size_mode,
        }
    }
}

/// Collects the line-gap samples and flush-right edge samples of every tag.
fn sample_line_geometry(pdf: &PdfFeatures) -> (ModeCounter<i64>, ModeCounter<i64>) {
    let mut line_spaces: ModeCounter<i64> = std::iter::once(0).collect();
    let mut right_edges: ModeCounter<i64> = std::iter::once(0).collect();

    for page in &pdf.pages {
        for tag in &page.tags {
            let bbox = &tag.bounding_box;

            let gap_below = page
                .tags
                .iter()
                .map(|other| &other.bounding_box)
                .filter(|other| bbox.bottom < other.top)
                .map(|other| truncate(other.top - bbox.bottom))
                .min();
            if let Some(gap) = gap_below {
                line_spaces.push(gap);
            }

            //   +-----+   +-----+
            //   | tag |   |     |   <- something further right on the line:
            //   +-----+   +-----+      not flush right
            let flush_right = !page.tags.iter().any(|other| {
                bbox.shares_line_with(&other.bounding_box) && bbox.right < other.bounding_box.left
            });
            if flush_right {
                right_edges.push(truncate(bbox.right));
            }
        }
    }

    (line_spaces, right_edges)
}

/// Looks up the size of the most used font. Returns None when no tag exists
/// or when the winning id does not match exactly one known font.
fn font_size_mode(pdf: &PdfFeatures, tie_break: ModeTieBreak) -> Option<f64> {
    let usage: ModeCounter<&str> = pdf.tags().map(|tag| tag.font.font_id.as_str()).collect();
    let font_id = *usage.mode(tie_break)?;

    let mut matches = pdf.fonts_with_id(font_id);
    match (matches.next(), matches.next()) {
        (Some(font), None) => Some(font.font_size),
        _ => {
            warn!(font_id, "most used font is not uniquely known, font size mode left at 0");
            None
        }
    }
}
