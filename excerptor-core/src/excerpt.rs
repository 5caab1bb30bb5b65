//! Excerpt values and the chapter-chopping iterator

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::boundaries::Boundaries;
use crate::breaker::TextBreaker;
use crate::ReadDirection;

/// Length constraints for one side of a break search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Window {
    /// Characters skipped before a break is eligible
    pub min: usize,
    /// Characters within which a break must be found (`None` = unbounded)
    pub max: Option<usize>,
}

impl Window {
    /// Window with both limits
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Window with no upper limit
    pub fn unbounded(min: usize) -> Self {
        Self { min, max: None }
    }
}

/// A borrowed excerpt with its character offsets in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Excerpt<'t> {
    /// Excerpt from the lower to the higher of two offsets
    pub(crate) fn between(bounds: &Boundaries<'t>, a: usize, b: usize) -> Option<Self> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        bounds
            .slice(start, end)
            .map(|text| Self { text, start, end })
    }

    /// The excerpt text
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Character offset of the first character
    pub fn start(&self) -> usize {
        self.start
    }

    /// Character offset one past the last character
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the excerpt is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Copy into an owned excerpt
    pub fn into_owned(self) -> OwnedExcerpt {
        OwnedExcerpt {
            text: self.text.to_string(),
            start: self.start,
            end: self.end,
        }
    }
}

/// An owned excerpt, suitable for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedExcerpt {
    /// The excerpt text
    pub text: String,
    /// Character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
}

/// Consecutive forward excerpts covering a whole text
///
/// Created by [`TextBreaker::excerpts`]. The text is segmented once when the
/// iterator is created.
#[derive(Debug)]
pub struct Excerpts<'b, 't> {
    breaker: &'b TextBreaker,
    bounds: Boundaries<'t>,
    window: Window,
    pos: usize,
}

impl<'b, 't> Excerpts<'b, 't> {
    pub(crate) fn new(breaker: &'b TextBreaker, bounds: Boundaries<'t>, window: Window) -> Self {
        Self {
            breaker,
            bounds,
            window,
            pos: 0,
        }
    }
}

impl<'t> Iterator for Excerpts<'_, 't> {
    type Item = Excerpt<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.bounds.len();
        if self.pos >= len {
            return None;
        }

        let mut end = self
            .breaker
            .locate(
                &self.bounds,
                ReadDirection::Forward,
                self.pos,
                self.window.min,
                self.window.max,
            )
            .ok()?;

        // Always make progress, at least one word segment
        if end <= self.pos {
            end = self.bounds.following(self.pos).unwrap_or(len);
        }

        let excerpt = Excerpt::between(&self.bounds, self.pos, end)?;
        self.pos = end;
        Some(excerpt)
    }
}

impl FusedIterator for Excerpts<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BreakingPolicy;

    const TEXT: &str = "One two. Three four. Five six.";

    #[test]
    fn test_excerpt_accessors() {
        let bounds = Boundaries::new(TEXT, vec![]);
        let excerpt = Excerpt::between(&bounds, 8, 0).unwrap();
        assert_eq!(excerpt.as_str(), "One two.");
        assert_eq!(excerpt.start(), 0);
        assert_eq!(excerpt.end(), 8);
        assert_eq!(excerpt.len(), 8);
        assert!(!excerpt.is_empty());

        let owned = excerpt.into_owned();
        assert_eq!(owned.text, "One two.");
        assert_eq!((owned.start, owned.end), (0, 8));
    }

    #[test]
    fn test_excerpt_beyond_text_is_none() {
        let bounds = Boundaries::new(TEXT, vec![]);
        assert!(Excerpt::between(&bounds, 0, 31).is_none());
    }

    #[test]
    fn test_excerpts_split_at_sentences() {
        let breaker = TextBreaker::new();
        let pieces: Vec<&str> = breaker.excerpts(TEXT, 0, None).map(|e| e.as_str()).collect();
        assert_eq!(pieces, vec!["One two.", " Three four.", " Five six."]);
    }

    #[test]
    fn test_excerpts_cover_text_without_gaps() {
        let breaker = TextBreaker::with_policy(BreakingPolicy::Last, ReadDirection::Backward);
        let mut expected_start = 0;
        let mut joined = String::new();
        for excerpt in breaker.excerpts(TEXT, 5, Some(15)) {
            assert_eq!(excerpt.start(), expected_start);
            expected_start = excerpt.end();
            joined.push_str(excerpt.as_str());
        }
        assert_eq!(joined, TEXT);
    }

    #[test]
    fn test_excerpts_progress_with_zero_window() {
        let breaker = TextBreaker::new();
        let count = breaker.excerpts(TEXT, 0, Some(0)).count();
        // one excerpt per word segment
        assert_eq!(count, breaker.segment(TEXT).count() - 1);
    }

    #[test]
    fn test_excerpts_of_empty_text() {
        let breaker = TextBreaker::new();
        assert_eq!(breaker.excerpts("", 0, None).count(), 0);
    }

    #[test]
    fn test_window_constructors() {
        assert_eq!(Window::unbounded(3), Window { min: 3, max: None });
        assert_eq!(Window::new(1, Some(2)).max, Some(2));
    }
}
