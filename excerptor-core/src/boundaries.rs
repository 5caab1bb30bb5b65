//! Word-boundary table over a borrowed text
//!
//! Positions exposed by this table are character offsets. Byte offsets are
//! kept alongside so that slicing never rescans the text from the start.

use crate::segmenter::Segmenter;

/// Sorted word boundaries of a text, with `following`/`preceding` lookups
#[derive(Debug, Clone)]
pub struct Boundaries<'t> {
    text: &'t str,
    /// Character offset of each boundary, ascending, always starting at 0
    chars: Vec<usize>,
    /// Byte offset of each boundary, parallel to `chars`
    bytes: Vec<usize>,
}

impl<'t> Boundaries<'t> {
    /// Build a table from raw byte offsets reported by a segmenter
    ///
    /// Offsets that do not fall on a character boundary are discarded. The
    /// text start and end are always boundaries.
    pub fn new(text: &'t str, mut byte_offsets: Vec<usize>) -> Self {
        byte_offsets.retain(|&offset| text.is_char_boundary(offset));
        byte_offsets.push(0);
        byte_offsets.push(text.len());
        byte_offsets.sort_unstable();
        byte_offsets.dedup();

        let mut chars = Vec::with_capacity(byte_offsets.len());
        let mut count = 0;
        let mut last = 0;
        for &offset in &byte_offsets {
            count += text[last..offset].chars().count();
            chars.push(count);
            last = offset;
        }

        Self {
            text,
            chars,
            bytes: byte_offsets,
        }
    }

    /// Segment `text` with `segmenter` and build the table
    pub fn segment(text: &'t str, segmenter: &dyn Segmenter) -> Self {
        Self::new(text, segmenter.boundaries(text))
    }

    /// Length of the text in characters
    pub fn len(&self) -> usize {
        self.chars.last().copied().unwrap_or(0)
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of boundaries, text start and end included
    pub fn count(&self) -> usize {
        self.chars.len()
    }

    /// First boundary strictly after `pos`
    pub fn following(&self, pos: usize) -> Option<usize> {
        let idx = self.chars.partition_point(|&c| c <= pos);
        self.chars.get(idx).copied()
    }

    /// Last boundary strictly before `pos`
    pub fn preceding(&self, pos: usize) -> Option<usize> {
        let idx = self.chars.partition_point(|&c| c < pos);
        idx.checked_sub(1).map(|i| self.chars[i])
    }

    /// Byte offset of the character offset `pos`
    pub fn byte_offset(&self, pos: usize) -> Option<usize> {
        if pos > self.len() {
            return None;
        }

        // chars[0] == 0, so at least one entry satisfies the predicate
        let idx = self.chars.partition_point(|&c| c <= pos) - 1;
        let (base_char, base_byte) = (self.chars[idx], self.bytes[idx]);
        if pos == base_char {
            return Some(base_byte);
        }

        self.text[base_byte..]
            .char_indices()
            .nth(pos - base_char)
            .map(|(offset, _)| base_byte + offset)
    }

    /// Text between two character offsets
    pub fn slice(&self, start: usize, end: usize) -> Option<&'t str> {
        if start > end {
            return None;
        }
        let start = self.byte_offset(start)?;
        let end = self.byte_offset(end)?;
        self.text.get(start..end)
    }

    /// Character at offset `pos`
    pub fn char_at(&self, pos: usize) -> Option<char> {
        let offset = self.byte_offset(pos)?;
        self.text[offset..].chars().next()
    }
}
