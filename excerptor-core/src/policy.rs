//! Breaking policy and read direction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::boundaries::Boundaries;
use crate::Error;

/// Tie-break rule when several breakpoints fall inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakingPolicy {
    /// Stop at the first breakpoint met while scanning
    #[default]
    First,
    /// Scan to the end of the window and keep the last breakpoint met
    Last,
}

impl BreakingPolicy {
    /// All policies, in declaration order
    pub const ALL: [BreakingPolicy; 2] = [BreakingPolicy::First, BreakingPolicy::Last];

    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakingPolicy::First => "first",
            BreakingPolicy::Last => "last",
        }
    }
}

impl fmt::Display for BreakingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(BreakingPolicy::First),
            "last" => Ok(BreakingPolicy::Last),
            _ => Err(Error::Configuration(format!("unknown breaking policy: {s}"))),
        }
    }
}

/// Direction in which the text is scanned from the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadDirection {
    /// Toward increasing offsets
    #[default]
    Forward,
    /// Toward decreasing offsets
    Backward,
}

impl ReadDirection {
    /// All directions, in declaration order
    pub const ALL: [ReadDirection; 2] = [ReadDirection::Forward, ReadDirection::Backward];

    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadDirection::Forward => "forward",
            ReadDirection::Backward => "backward",
        }
    }

    /// Offset reached after moving `distance` characters from `from`, or
    /// `None` when that leaves `[0, len]`
    pub(crate) fn advance(&self, from: usize, distance: usize, len: usize) -> Option<usize> {
        match self {
            ReadDirection::Forward => from.checked_add(distance).filter(|&pos| pos <= len),
            ReadDirection::Backward => from.checked_sub(distance),
        }
    }

    /// Text edge that lies in this direction
    pub(crate) fn edge(&self, len: usize) -> usize {
        match self {
            ReadDirection::Forward => len,
            ReadDirection::Backward => 0,
        }
    }

    /// Next word boundary in this direction
    pub(crate) fn step(&self, boundaries: &Boundaries<'_>, pos: usize) -> Option<usize> {
        match self {
            ReadDirection::Forward => boundaries.following(pos),
            ReadDirection::Backward => boundaries.preceding(pos),
        }
    }

    /// Next word boundary against this direction
    pub(crate) fn step_back(&self, boundaries: &Boundaries<'_>, pos: usize) -> Option<usize> {
        match self {
            ReadDirection::Forward => boundaries.preceding(pos),
            ReadDirection::Backward => boundaries.following(pos),
        }
    }
}

impl fmt::Display for ReadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(ReadDirection::Forward),
            "backward" => Ok(ReadDirection::Backward),
            _ => Err(Error::Configuration(format!("unknown read direction: {s}"))),
        }
    }
}
