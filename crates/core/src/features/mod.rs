//! Pairwise feature vectors for the paragraph classifier.
//!
//! This module contains:
//! - PairFeatureBuilder, the top-level `build(tag_1, tag_2, tags_on_page)`
//! - Column names and offsets of the emitted vector
//! - Reading-order pair enumeration and parallel batch building

pub mod builder;
pub mod names;
pub mod pairs;

pub use builder::PairFeatureBuilder;
pub use names::{
    SCALAR_FEATURE_COUNT, SCALAR_FEATURE_NAMES, TAG_1_TYPE_OFFSET, feature_len, feature_names,
    letter_block_offset,
};
pub use pairs::{padded_reading_order_pairs, reading_order_pairs};
