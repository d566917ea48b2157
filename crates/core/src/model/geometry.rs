//! Bounding boxes in page-pixel units (top-left origin, y grows downward).

use serde::{Deserialize, Serialize};

/// Axis-aligned box of a tag on its page.
///
/// `right == left + width` and `bottom == top + height` are guaranteed by the
/// producer and are not re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Builds a box from its origin and size, deriving `right` and `bottom`.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Builds a box from its four edges, deriving `width` and `height`.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Returns true if `other` starts or ends inside the vertical band
    /// `[band_top, band_bottom)`.
    ///
    /// ```text
    ///   band_top    ---------------   +-------+
    ///                                 | other |   top inside the band
    ///   band_bottom ---------------   +-------+
    /// ```
    ///
    /// The test is asymmetric: a box that fully encloses the band without
    /// starting or ending inside it does not overlap.
    #[inline]
    pub fn band_overlaps(band_top: f64, band_bottom: f64, other: &BoundingBox) -> bool {
        (band_top <= other.top && other.top < band_bottom)
            || (band_top < other.bottom && other.bottom <= band_bottom)
    }

    /// Returns true if `other` shares this box's line, using `bottom` as the
    /// lower edge of the band.
    #[inline]
    pub fn shares_line_with(&self, other: &BoundingBox) -> bool {
        Self::band_overlaps(self.top, self.bottom, other)
    }

    /// Returns true if `other` overlaps this box's line band
    /// `[top, top + height)`.
    #[inline]
    pub fn line_band_contains(&self, other: &BoundingBox) -> bool {
        Self::band_overlaps(self.top, self.top + self.height, other)
    }
}
