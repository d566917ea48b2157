//! Character, space and punctuation counts of a tag's text.

/// Counts over a tag's content. Lengths are in chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentCounts {
    pub chars: usize,
    /// Occurrences of U+0020 only; other whitespace is not counted.
    pub spaces: usize,
    /// ASCII punctuation characters.
    pub punctuation: usize,
}

impl ContentCounts {
    pub fn of(content: &str) -> Self {
        content.chars().fold(Self::default(), |mut counts, c| {
            counts.chars += 1;
            if c == ' ' {
                counts.spaces += 1;
            }
            if c.is_ascii_punctuation() {
                counts.punctuation += 1;
            }
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let counts = ContentCounts::of("Hello, world! (1.5)");
        assert_eq!(counts.chars, 19);
        assert_eq!(counts.spaces, 2);
        assert_eq!(counts.punctuation, 5);
    }

    #[test]
    fn test_counts_are_char_based() {
        let counts = ContentCounts::of("déjà vu\u{00a0}«»");
        assert_eq!(counts.chars, 10);
        // the no-break space and guillemets are not counted
        assert_eq!(counts.spaces, 1);
        assert_eq!(counts.punctuation, 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(ContentCounts::of(""), ContentCounts::default());
    }
}
