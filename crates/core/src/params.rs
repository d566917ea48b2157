//! Feature extraction parameters.
//!
//! Contains FeatureParams for controlling normalization and mode statistics.

/// How a mode statistic picks a winner among equally frequent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeTieBreak {
    /// The smallest tied value wins. Font ids compare lexicographically.
    /// Independent of page and tag order.
    #[default]
    Smallest,
    /// The tied value encountered first in page/tag order wins.
    FirstSeen,
}

/// Parameters for pairwise feature extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureParams {
    /// The font-size mode is divided by this before it is emitted.
    pub font_size_scale: f64,

    /// Tie-break rule of the line spacing and right margin modes.
    pub tie_break: ModeTieBreak,

    /// Tie-break rule of the font size mode. Defaults to FirstSeen: among
    /// equally used fonts, the one used first in page/tag order wins.
    pub font_tie_break: ModeTieBreak,
}

impl Default for FeatureParams {
    fn default() -> Self {
        Self {
            font_size_scale: 100.0,
            tie_break: ModeTieBreak::Smallest,
            font_tie_break: ModeTieBreak::FirstSeen,
        }
    }
}

impl FeatureParams {
    /// Creates new feature parameters with the specified values. The font
    /// size mode keeps its FirstSeen default.
    ///
    /// # Panics
    /// Panics if font_size_scale is zero or not finite.
    pub fn new(font_size_scale: f64, tie_break: ModeTieBreak) -> Self {
        let params = Self {
            font_size_scale,
            tie_break,
            ..Self::default()
        };
        params.validate();
        params
    }

    /// Sets the tie-break rule of the font size mode.
    pub fn with_font_tie_break(mut self, font_tie_break: ModeTieBreak) -> Self {
        self.font_tie_break = font_tie_break;
        self
    }

    /// Checks the invariants `new` enforces, for parameters built as a
    /// struct literal.
    ///
    /// # Panics
    /// Panics if font_size_scale is zero or not finite.
    pub fn validate(&self) {
        assert!(
            self.font_size_scale.is_finite() && self.font_size_scale != 0.0,
            "font_size_scale should be a finite, non-zero number"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = FeatureParams::default();
        assert_eq!(params.font_size_scale, 100.0);
        assert_eq!(params.tie_break, ModeTieBreak::Smallest);
        assert_eq!(params.font_tie_break, ModeTieBreak::FirstSeen);
    }

    #[test]
    fn test_new_keeps_font_tie_break_default() {
        let params = FeatureParams::new(50.0, ModeTieBreak::FirstSeen);
        assert_eq!(params.font_tie_break, ModeTieBreak::FirstSeen);

        let params = params.with_font_tie_break(ModeTieBreak::Smallest);
        assert_eq!(params.font_tie_break, ModeTieBreak::Smallest);
        assert_eq!(params.font_size_scale, 50.0);
    }

    #[test]
    #[should_panic(expected = "font_size_scale")]
    fn test_validate_rejects_struct_literal() {
        let params = FeatureParams {
            font_size_scale: f64::NAN,
            ..FeatureParams::default()
        };
        params.validate();
    }

    #[test]
    #[should_panic(expected = "font_size_scale")]
    fn test_zero_scale_rejected() {
        FeatureParams::new(0.0, ModeTieBreak::FirstSeen);
    }
}
