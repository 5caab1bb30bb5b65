//! Word segmentation capability
//!
//! The breaker never walks text itself. It asks a [`Segmenter`] for the
//! word-boundary positions of a text once per call and then moves between
//! them through a [`Boundaries`](crate::Boundaries) table. Any segmenter that
//! reports boundaries at word, whitespace-run and punctuation edges can be
//! plugged in.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Source of word-boundary positions
pub trait Segmenter: Send + Sync + fmt::Debug {
    /// Byte offsets of every word boundary in `text`
    ///
    /// Offsets must lie on UTF-8 character boundaries. The start (0) and the
    /// end (`text.len()`) may be omitted; the boundary table adds them.
    fn boundaries(&self, text: &str) -> Vec<usize>;

    /// Short identifier for diagnostics
    fn name(&self) -> &'static str;
}

/// UAX#29 word boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl UnicodeWordSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for UnicodeWordSegmenter {
    fn boundaries(&self, text: &str) -> Vec<usize> {
        let mut offsets: Vec<usize> = text.split_word_bound_indices().map(|(idx, _)| idx).collect();
        offsets.push(text.len());
        offsets.dedup();
        offsets
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bounds_split_words_spaces_and_punctuation() {
        let segmenter = UnicodeWordSegmenter::new();
        // "Hello" | ", " is split into "," and " " | "world" | "."
        assert_eq!(
            segmenter.boundaries("Hello, world."),
            vec![0, 5, 6, 7, 12, 13]
        );
    }

    #[test]
    fn test_horizontal_whitespace_stays_together() {
        let segmenter = UnicodeWordSegmenter::new();
        assert_eq!(segmenter.boundaries("a   b"), vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_newline_is_its_own_segment() {
        let segmenter = UnicodeWordSegmenter::new();
        assert_eq!(segmenter.boundaries("end.\nNext"), vec![0, 3, 4, 5, 9]);
    }

    #[test]
    fn test_crlf_is_a_single_segment() {
        let segmenter = UnicodeWordSegmenter::new();
        assert_eq!(segmenter.boundaries("end.\r\nNext"), vec![0, 3, 4, 6, 10]);
    }

    #[test]
    fn test_multibyte_offsets_are_byte_offsets() {
        let segmenter = UnicodeWordSegmenter::new();
        // "café" is 5 bytes, then a space
        assert_eq!(segmenter.boundaries("caf\u{e9} au"), vec![0, 5, 6, 8]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(UnicodeWordSegmenter::new().boundaries(""), vec![0]);
    }

    #[test]
    fn test_name() {
        assert_eq!(UnicodeWordSegmenter::new().name(), "unicode_word");
    }
}
