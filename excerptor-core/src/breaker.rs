//! Word-safe break search
//!
//! [`TextBreaker`] finds the word boundary closest to an anchor at which an
//! excerpt can end. A boundary qualifies when the text between it and the
//! previous boundary is exactly one of the configured breakpoint tokens
//! (by default `"."` and `"\n"`), so the cut lands after a sentence or a
//! paragraph. The scan honours two limits at once:
//!
//! - `min` characters are skipped before a break becomes eligible;
//! - the break must lie fewer than `max` characters from the anchor.
//!
//! When no breakpoint lies in the window the breaker backs off to a word
//! boundary, so an excerpt never ends in the middle of a word.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::boundaries::Boundaries;
use crate::config::BreakerConfig;
use crate::excerpt::{Excerpt, Excerpts, OwnedExcerpt, Window};
use crate::input::Input;
use crate::segmenter::{Segmenter, UnicodeWordSegmenter};
use crate::{BreakingPolicy, Error, ReadDirection, Result};

/// Outcome of walking the window
struct Scan {
    /// Boundary recorded for the breakpoint selected by the policy
    candidate: Option<usize>,
    /// Boundary where the walk stopped; `None` when the text ran out
    stop: Option<usize>,
}

/// Finds sentence- and paragraph-level cut points without splitting words
///
/// The breaker owns configuration only; text is borrowed per call and
/// nothing is cached between calls. A shared `&TextBreaker` may be used from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct TextBreaker {
    policy: BreakingPolicy,
    direction: ReadDirection,
    breakpoints: BTreeSet<String>,
    mandatory_breakpoints: BTreeSet<String>,
    segmenter: Arc<dyn Segmenter>,
}

impl Default for TextBreaker {
    fn default() -> Self {
        Self::from_config(&BreakerConfig::default())
    }
}

impl TextBreaker {
    /// Breaker with `First` policy, `Forward` direction and the default tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Breaker with the given policy and direction and the default tokens
    pub fn with_policy(policy: BreakingPolicy, direction: ReadDirection) -> Self {
        Self {
            policy,
            direction,
            ..Self::default()
        }
    }

    /// Breaker built from a configuration
    pub fn from_config(config: &BreakerConfig) -> Self {
        Self {
            policy: config.policy,
            direction: config.direction,
            breakpoints: non_empty(config.breakpoints.iter().cloned()),
            mandatory_breakpoints: non_empty(config.mandatory_breakpoints.iter().cloned()),
            segmenter: Arc::new(UnicodeWordSegmenter::new()),
        }
    }

    /// Replace the breakpoint tokens
    pub fn with_breakpoints<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_breakpoints(tokens);
        self
    }

    /// Replace the mandatory breakpoint tokens
    pub fn with_mandatory_breakpoints<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_mandatory_breakpoints(tokens);
        self
    }

    /// Use a different word segmenter
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> BreakerConfig {
        BreakerConfig {
            policy: self.policy,
            direction: self.direction,
            breakpoints: self.breakpoints.clone(),
            mandatory_breakpoints: self.mandatory_breakpoints.clone(),
        }
    }

    /// Current breaking policy
    pub fn policy(&self) -> BreakingPolicy {
        self.policy
    }

    /// Set the breaking policy
    pub fn set_policy(&mut self, policy: BreakingPolicy) {
        self.policy = policy;
    }

    /// Current read direction
    pub fn direction(&self) -> ReadDirection {
        self.direction
    }

    /// Whether the breaker scans toward increasing offsets
    pub fn reads_forward(&self) -> bool {
        self.direction == ReadDirection::Forward
    }

    /// Set the read direction
    pub fn set_direction(&mut self, direction: ReadDirection) {
        self.direction = direction;
    }

    /// Tokens that qualify a boundary as a break
    pub fn breakpoints(&self) -> &BTreeSet<String> {
        &self.breakpoints
    }

    /// Replace the breakpoint tokens; empty tokens are dropped
    pub fn set_breakpoints<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breakpoints = non_empty(tokens.into_iter().map(Into::into));
    }

    /// Tokens meant to force a break
    ///
    /// These are stored and reported but the search does not consult them.
    pub fn mandatory_breakpoints(&self) -> &BTreeSet<String> {
        &self.mandatory_breakpoints
    }

    /// Replace the mandatory breakpoint tokens; empty tokens are dropped
    pub fn set_mandatory_breakpoints<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mandatory_breakpoints = non_empty(tokens.into_iter().map(Into::into));
    }

    /// The word segmenter in use
    pub fn segmenter(&self) -> &dyn Segmenter {
        self.segmenter.as_ref()
    }

    /// Word boundaries of `text` as seen by this breaker
    pub fn segment<'t>(&self, text: &'t str) -> Boundaries<'t> {
        Boundaries::segment(text, self.segmenter.as_ref())
    }

    /// Offset of the break closest to `from`
    ///
    /// Offsets count characters. `min` characters are skipped before a
    /// break is eligible and the break must lie fewer than `max` characters
    /// from `from`; `None`, or a `max` below `min`, leaves the window
    /// unbounded. The result lies on the `from` side of the text edge in the
    /// configured direction: at or after `from` when reading forward, at or
    /// before it when reading backward.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `from` is not below the text length.
    pub fn find_closest_breaking_point(
        &self,
        text: &str,
        from: usize,
        min: usize,
        max: Option<usize>,
    ) -> Result<usize> {
        let bounds = self.segment(text);
        self.locate(&bounds, self.direction, from, min, max)
    }

    /// Excerpt between `from` and the closest break
    ///
    /// Returns the text from the lower to the higher of the two offsets.
    /// `None` only if the break offset cannot be mapped back into the text.
    pub fn break_text<'t>(
        &self,
        text: &'t str,
        from: usize,
        min: usize,
        max: Option<usize>,
    ) -> Result<Option<&'t str>> {
        Ok(self
            .break_excerpt(text, from, min, max)?
            .map(|excerpt| excerpt.as_str()))
    }

    /// Like [`break_text`](Self::break_text), keeping the excerpt's offsets
    pub fn break_excerpt<'t>(
        &self,
        text: &'t str,
        from: usize,
        min: usize,
        max: Option<usize>,
    ) -> Result<Option<Excerpt<'t>>> {
        let bounds = self.segment(text);
        let index = self.locate(&bounds, self.direction, from, min, max)?;
        Ok(Excerpt::between(&bounds, from, index))
    }

    /// Read text from `input` and find its closest break
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when the input is not valid UTF-8,
    /// [`Error::Infrastructure`] when it cannot be read, and
    /// [`Error::IndexOutOfRange`] as for
    /// [`find_closest_breaking_point`](Self::find_closest_breaking_point).
    pub fn find_input(
        &self,
        input: Input,
        from: usize,
        min: usize,
        max: Option<usize>,
    ) -> Result<usize> {
        let text = input.into_text()?;
        self.find_closest_breaking_point(&text, from, min, max)
    }

    /// Read text from `input` and break it
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when the input is not valid UTF-8,
    /// [`Error::Infrastructure`] when it cannot be read, and
    /// [`Error::IndexOutOfRange`] as for
    /// [`find_closest_breaking_point`](Self::find_closest_breaking_point).
    pub fn break_input(
        &self,
        input: Input,
        from: usize,
        min: usize,
        max: Option<usize>,
    ) -> Result<Option<OwnedExcerpt>> {
        let text = input.into_text()?;
        Ok(self
            .break_excerpt(&text, from, min, max)?
            .map(|excerpt| excerpt.into_owned()))
    }

    /// Chop `text` into consecutive excerpts, reading forward from the start
    ///
    /// The configured policy and tokens apply; the configured direction does
    /// not. The excerpts cover the whole text without gaps.
    pub fn excerpts<'b, 't>(
        &'b self,
        text: &'t str,
        min: usize,
        max: Option<usize>,
    ) -> Excerpts<'b, 't> {
        Excerpts::new(self, self.segment(text), Window::new(min, max))
    }

    /// Excerpt enclosing `anchor`
    ///
    /// Reads backward from `anchor` within `before` and forward within
    /// `after`, using the configured policy and tokens.
    pub fn context_around<'t>(
        &self,
        text: &'t str,
        anchor: usize,
        before: Window,
        after: Window,
    ) -> Result<Option<Excerpt<'t>>> {
        let bounds = self.segment(text);
        let start = self.locate(
            &bounds,
            ReadDirection::Backward,
            anchor,
            before.min,
            before.max,
        )?;
        let end = self.locate(
            &bounds,
            ReadDirection::Forward,
            anchor,
            after.min,
            after.max,
        )?;
        Ok(Excerpt::between(&bounds, start, end))
    }

    /// Break search over an already segmented text
    pub(crate) fn locate(
        &self,
        bounds: &Boundaries<'_>,
        direction: ReadDirection,
        from: usize,
        min: usize,
        max: Option<usize>,
    ) -> Result<usize> {
        let len = bounds.len();
        if from >= len {
            return Err(Error::IndexOutOfRange { index: from, len });
        }

        let limit = max.filter(|&max| max >= min);

        // A zero-width window admits only the anchor itself
        if limit == Some(0) {
            return Ok(from);
        }

        let Some(start) = direction.advance(from, min, len) else {
            return Ok(direction.edge(len));
        };

        let scan = self.scan(bounds, direction, from, start, limit);

        let index = match (scan.candidate, direction) {
            (Some(candidate), ReadDirection::Forward) => candidate,
            (Some(candidate), ReadDirection::Backward) => skip_to_letter(bounds, candidate, from),
            (None, _) => match scan.stop {
                None => direction.edge(len),
                Some(stop) if direction == ReadDirection::Backward && min == 0 => stop,
                Some(stop) => back_off(bounds, direction, stop, from),
            },
        };

        Ok(index)
    }

    /// Walk boundaries from `start` until the policy is satisfied, the
    /// window is left, or the text ends
    fn scan(
        &self,
        bounds: &Boundaries<'_>,
        direction: ReadDirection,
        from: usize,
        start: usize,
        limit: Option<usize>,
    ) -> Scan {
        let mut prev = start;
        let mut candidate = None;

        while let Some(next) = direction.step(bounds, prev) {
            if limit.is_some_and(|limit| next.abs_diff(from) >= limit) {
                return Scan {
                    candidate,
                    stop: Some(next),
                };
            }

            if self.is_breakpoint(bounds, prev, next) {
                candidate = Some(next);
                if self.policy == BreakingPolicy::First {
                    return Scan {
                        candidate,
                        stop: Some(next),
                    };
                }
            }

            prev = next;
        }

        Scan {
            candidate,
            stop: None,
        }
    }

    fn is_breakpoint(&self, bounds: &Boundaries<'_>, a: usize, b: usize) -> bool {
        bounds
            .slice(a.min(b), a.max(b))
            .is_some_and(|span| self.breakpoints.contains(span))
    }
}

/// Undo the word that crossed the window edge and the separator before it
fn back_off(bounds: &Boundaries<'_>, direction: ReadDirection, stop: usize, from: usize) -> usize {
    direction
        .step_back(bounds, stop)
        .and_then(|pos| direction.step_back(bounds, pos))
        .map_or(from, |pos| match direction {
            ReadDirection::Forward => pos.max(from),
            ReadDirection::Backward => pos.min(from),
        })
}

/// Move past a breakpoint found while reading backward onto the first letter
/// of the following text, never beyond `from`
fn skip_to_letter(bounds: &Boundaries<'_>, candidate: usize, from: usize) -> usize {
    let mut pos = bounds.following(candidate).unwrap_or(from);
    while pos < from && !bounds.char_at(pos).is_some_and(|c| c.is_alphabetic()) {
        match bounds.following(pos) {
            Some(next) => pos = next,
            None => break,
        }
    }
    pos.min(from)
}

fn non_empty(tokens: impl Iterator<Item = String>) -> BTreeSet<String> {
    tokens.filter(|token| !token.is_empty()).collect()
}
