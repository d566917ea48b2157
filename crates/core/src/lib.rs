//! parafeat - pairwise layout features for PDF paragraph segmentation.
//!
//! Given two tags (text blocks) of a page, builds a fixed-length numeric
//! vector describing their relative geometry, typography and boundary
//! letters. The vector feeds an external classifier deciding whether both
//! tags belong to the same paragraph.
//!
//! ```no_run
//! use parafeat_core::{LetterCorpus, PairFeatureBuilder, PdfFeatures, TagTypes};
//!
//! # fn run(pdf: &PdfFeatures, corpus: &LetterCorpus, types: &TagTypes) -> parafeat_core::Result<()> {
//! let builder = PairFeatureBuilder::new(pdf, corpus, types);
//! for page in &pdf.pages {
//!     let rows = builder.build_page(page)?;
//!     assert!(rows.iter().all(|row| row.len() == builder.feature_len()));
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod features;
pub mod layout;
pub mod model;
pub mod params;
pub mod text;
pub mod utils;

pub use error::{FeatureError, Result};
pub use features::{PairFeatureBuilder, feature_len, feature_names};
pub use layout::{Envelope, LineNeighborFinder, PageLayoutStatistics};
pub use model::{
    BoundingBox, Font, PadTag, Page, PairTag, PdfFeatures, Tag, TagType, TagTypeProvider, TagTypes,
};
pub use params::{FeatureParams, ModeTieBreak};
pub use text::{ContentCounts, LetterCorpus, LetterEncoder, LetterPosition};
