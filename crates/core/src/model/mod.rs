//! Page-and-tag model consumed by the feature builder.
//!
//! These are passive structures produced upstream by PDF ingestion. Nothing
//! in this crate mutates them after construction.

pub mod document;
pub mod geometry;
pub mod pair;
pub mod tag_type;

pub use document::{Font, Page, PdfFeatures, Tag};
pub use geometry::BoundingBox;
pub use pair::{PadTag, PairTag};
pub use tag_type::{TagType, TagTypeProvider, TagTypes};
