//! Tests for the serialized form of the page-and-tag model, as handed over by
//! upstream ingestion, and for end-to-end feature building from it.

use std::collections::HashMap;

use parafeat_core::features::padded_reading_order_pairs;
use parafeat_core::{
    LetterCorpus, PadTag, PairFeatureBuilder, PairTag, PdfFeatures, TagType, TagTypes, feature_len,
};

const DOCUMENT: &str = r#"{
  "pages": [
    {
      "page_width": 612.0,
      "tags": [
        {
          "id": "p1_t0",
          "content": "Introduction",
          "bounding_box": {"top": 72.0, "left": 72.0, "right": 190.0, "bottom": 88.0, "width": 118.0, "height": 16.0},
          "font": {"font_id": "heading", "font_size": 16.0}
        },
        {
          "id": "p1_t1",
          "content": "Layout features describe",
          "bounding_box": {"top": 100.0, "left": 72.0, "right": 540.0, "bottom": 112.0, "width": 468.0, "height": 12.0},
          "font": {"font_id": "body", "font_size": 11.0}
        },
        {
          "id": "p1_t2",
          "content": "how blocks relate.",
          "bounding_box": {"top": 114.0, "left": 72.0, "right": 300.0, "bottom": 126.0, "width": 228.0, "height": 12.0},
          "font": {"font_id": "body", "font_size": 11.0}
        }
      ]
    }
  ],
  "fonts": [
    {"font_id": "heading", "font_size": 16.0},
    {"font_id": "body", "font_size": 11.0}
  ]
}"#;

const TAG_TYPES: &str = r#"{"p1_t0": "title", "p1_t1": "text", "p1_t2": "text"}"#;

#[test]
fn test_deserialize_document() {
    let pdf: PdfFeatures = serde_json::from_str(DOCUMENT).unwrap();
    assert_eq!(pdf.pages.len(), 1);
    assert_eq!(pdf.pages[0].tags.len(), 3);
    assert_eq!(pdf.pages[0].tags[1].font.font_id.as_str(), "body");
    assert_eq!(pdf.tags().count(), 3);
    assert_eq!(pdf.fonts_with_id("heading").count(), 1);
}

#[test]
fn test_deserialize_tag_types() {
    let types: TagTypes = serde_json::from_str(TAG_TYPES).unwrap();
    assert_eq!(types.len(), 3);
    assert_eq!(types.get("p1_t0"), Some(TagType::Title));
    assert!(serde_json::from_str::<TagTypes>(r#"{"x": "caption"}"#).is_err());
}

#[test]
fn test_end_to_end_page_features() {
    let pdf: PdfFeatures = serde_json::from_str(DOCUMENT).unwrap();
    let types: TagTypes = serde_json::from_str(TAG_TYPES).unwrap();
    let corpus = LetterCorpus::from_strings([("I", 0), ("L", 1), ("h", 2), (".", 3), ("e", 4)]).unwrap();
    let builder = PairFeatureBuilder::new(&pdf, &corpus, &types);

    assert_eq!(builder.statistics().font_size_mode, 11.0);
    // every line gap occurs once, so the seeded 0 wins the tie
    assert_eq!(builder.statistics().lines_space_mode, 0);

    let page = &pdf.pages[0];
    let rows = builder.build_page(page).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.len() == feature_len(5)));

    // title then text: the first type flags differ between the two rows
    assert_eq!(rows[0][25], 1.0);
    assert_eq!(rows[1][24], 1.0);

    let pad = PadTag::default();
    let pairs = padded_reading_order_pairs(page, &pad);
    assert_eq!(pairs.len(), 4);
    assert!(matches!(pairs[0].0, PairTag::Pad(_)));
    let padded_rows = builder.build_batch(&pairs, &page.tags).unwrap();
    assert_eq!(padded_rows[1], rows[0]);
    assert_eq!(padded_rows[2], rows[1]);
}

#[test]
fn test_std_hashmap_labels_build_like_tag_types() {
    let pdf: PdfFeatures = serde_json::from_str(DOCUMENT).unwrap();
    let labels: HashMap<String, TagType> = serde_json::from_str(TAG_TYPES).unwrap();
    let types: TagTypes = serde_json::from_str(TAG_TYPES).unwrap();
    let corpus = LetterCorpus::default();

    let from_map = PairFeatureBuilder::new(&pdf, &corpus, &labels);
    let from_types = PairFeatureBuilder::new(&pdf, &corpus, &types);
    let page = &pdf.pages[0];
    assert_eq!(from_map.build_page(page).unwrap(), from_types.build_page(page).unwrap());
}
