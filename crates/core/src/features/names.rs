//! Column layout of the pairwise feature vector.
//!
//! The vector is `SCALAR_FEATURE_COUNT` scalars followed by eight letter
//! blocks of `L` values each (four per tag, in `LetterPosition::ALL` order).
//! Offsets only depend on `L`, so they are stable for a fixed corpus.

use crate::text::LetterPosition;

/// Number of scalar features preceding the letter blocks.
pub const SCALAR_FEATURE_COUNT: usize = 44;

/// Scalar column names, in emission order.
pub const SCALAR_FEATURE_NAMES: [&str; SCALAR_FEATURE_COUNT] = [
    "font_size_mode",
    "same_font",
    "absolute_right_1",
    "top_1",
    "right_1",
    "width_1",
    "height_1",
    "top_2",
    "right_2",
    "width_2",
    "height_2",
    "top_distance",
    "top_distance_minus_lines_space_mode",
    "top_distance_gaps",
    "lines_space_mode_minus_top_distance_gaps",
    "right_space_mode_minus_absolute_right_1",
    "top_distance_minus_height_1",
    "start_lines_differences",
    "right_distance",
    "left_distance",
    "right_gap_1",
    "left_gap_2",
    "height_difference",
    "end_lines_difference",
    "tag_1_type_text",
    "tag_1_type_title",
    "tag_1_type_figure",
    "tag_1_type_table",
    "tag_1_type_list",
    "tag_1_type_footnote",
    "tag_1_type_formula",
    "tag_2_type_text",
    "tag_2_type_title",
    "tag_2_type_figure",
    "tag_2_type_table",
    "tag_2_type_list",
    "tag_2_type_footnote",
    "tag_2_type_formula",
    "tag_1_length",
    "tag_2_length",
    "tag_1_spaces",
    "tag_2_spaces",
    "tag_1_punctuation",
    "tag_2_punctuation",
];

/// Length of the vector for a corpus of `letter_corpus_len` indices.
pub const fn feature_len(letter_corpus_len: usize) -> usize {
    SCALAR_FEATURE_COUNT + 8 * letter_corpus_len
}

/// Offset of the first type flag of tag 1; tag 2's flags follow after seven.
pub const TAG_1_TYPE_OFFSET: usize = 24;

/// Offset of one letter block. `tag` is 1 or 2.
pub fn letter_block_offset(letter_corpus_len: usize, tag: usize, position: LetterPosition) -> usize {
    debug_assert!(matches!(tag, 1 | 2), "tag must be 1 or 2, got {tag}");
    let slot = tag.saturating_sub(1) * LetterPosition::ALL.len() + position as usize;
    SCALAR_FEATURE_COUNT + slot * letter_corpus_len
}

/// Every column name, in emission order.
pub fn feature_names(letter_corpus_len: usize) -> Vec<String> {
    let mut names: Vec<String> = SCALAR_FEATURE_NAMES.iter().map(|n| n.to_string()).collect();
    names.reserve(8 * letter_corpus_len);
    for tag in ["tag_1", "tag_2"] {
        for position in LetterPosition::ALL {
            for index in 0..letter_corpus_len {
                names.push(format!("{tag}_{}_{index}", position.as_str()));
            }
        }
    }
    names
}
