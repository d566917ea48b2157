//! Same-line neighbor search.
//!
//! For a tag, the candidates sharing its line band are split into those
//! entirely to its right and those entirely to its left. Each side collapses
//! to an envelope `(min left, max right)` over all qualifying candidates, not
//! just the closest one:
//!
//! ```text
//!   +----+ +----+   +-----+   +----+ +----+
//!   | l1 | | l2 |   | tag |   | r1 | | r2 |
//!   +----+ +----+   +-----+   +----+ +----+
//!   |<--- left --->|          |<-- right -->|
//! ```

use crate::model::{BoundingBox, Tag};
use crate::utils::{max_f64, min_f64};

/// Horizontal extent of a group of same-line blocks.
/// `(0, 0)` stands for "no block on that side".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Envelope {
    pub left: f64,
    pub right: f64,
}

impl Envelope {
    pub const EMPTY: Envelope = Envelope {
        left: 0.0,
        right: 0.0,
    };

    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Envelope over the given boxes, or EMPTY if there are none.
    pub fn enclosing<'a>(boxes: impl IntoIterator<Item = &'a BoundingBox>) -> Self {
        let boxes: Vec<&BoundingBox> = boxes.into_iter().collect();
        match (
            min_f64(boxes.iter().map(|b| b.left)),
            max_f64(boxes.iter().map(|b| b.right)),
        ) {
            (Some(left), Some(right)) => Self { left, right },
            _ => Self::EMPTY,
        }
    }
}

/// Finds the blocks abutting a tag on its line among a fixed candidate set
/// (usually every tag on the page).
#[derive(Debug, Clone, Copy)]
pub struct LineNeighborFinder<'a> {
    candidates: &'a [Tag],
}

impl<'a> LineNeighborFinder<'a> {
    pub fn new(candidates: &'a [Tag]) -> Self {
        Self { candidates }
    }

    /// Candidates overlapping the line band `[top, top + height)` of `bbox`.
    fn on_line<'b>(&self, bbox: &'b BoundingBox) -> impl Iterator<Item = &'a BoundingBox> + 'b
    where
        'a: 'b,
    {
        let candidates: &'a [Tag] = self.candidates;
        candidates
            .iter()
            .map(|candidate| &candidate.bounding_box)
            .filter(move |candidate| bbox.line_band_contains(candidate))
    }

    /// Envelope of the same-line candidates starting right of `bbox.right`.
    pub fn find_right_neighbor(&self, bbox: &BoundingBox) -> Envelope {
        Envelope::enclosing(
            self.on_line(bbox)
                .filter(|candidate| bbox.right < candidate.left),
        )
    }

    /// Envelope of the same-line candidates ending left of `bbox.left`.
    pub fn find_left_neighbor(&self, bbox: &BoundingBox) -> Envelope {
        Envelope::enclosing(
            self.on_line(bbox)
                .filter(|candidate| candidate.right < bbox.left),
        )
    }
}
