//! Layout reasoning over the tags of a page.
//!
//! This module contains:
//! - PageLayoutStatistics, the document-wide dominant values used to
//!   normalize pairwise distances
//! - LineNeighborFinder, the same-line envelope search left and right of a tag

pub mod neighbors;
pub mod statistics;

pub use neighbors::{Envelope, LineNeighborFinder};
pub use statistics::PageLayoutStatistics;
