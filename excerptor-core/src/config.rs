//! Breaker configuration

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BreakingPolicy, Error, ReadDirection, Result};

/// Default configuration constants
pub mod defaults {
    /// Sentence and paragraph breakpoint tokens
    ///
    /// A Windows line ending is one `"\r\n"` segment and does not match
    /// `"\n"`; add `"\r\n"` to break paragraphs in CRLF text.
    pub const BREAKPOINTS: [&str; 2] = [".", "\n"];

    /// Default number of characters skipped before a break is eligible
    pub const MIN_LENGTH: usize = 200;

    /// Default window within which a break must be found
    pub const MAX_LENGTH: usize = 400;
}

/// Serializable breaker configuration
///
/// Every field falls back to its default when missing, so a TOML file may
/// set only what it changes:
///
/// ```toml
/// policy = "last"
/// breakpoints = [".", "!", "?", "\n"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakerConfig {
    /// Tie-break rule between breakpoints in the window
    pub policy: BreakingPolicy,
    /// Scan direction from the anchor
    pub direction: ReadDirection,
    /// Tokens that qualify a word boundary as a break
    pub breakpoints: BTreeSet<String>,
    /// Tokens meant to force a break; stored but not consulted by the search
    pub mandatory_breakpoints: BTreeSet<String>,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            policy: BreakingPolicy::default(),
            direction: ReadDirection::default(),
            breakpoints: defaults::BREAKPOINTS.iter().map(|s| s.to_string()).collect(),
            mandatory_breakpoints: BTreeSet::new(),
        }
    }
}

impl BreakerConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BreakerConfig = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse breaker config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Configuration(format!("Failed to serialize breaker config: {e}")))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.breakpoints.iter().any(String::is_empty) {
            return Err(Error::Configuration(
                "breakpoints must not contain empty tokens".into(),
            ));
        }

        if self.mandatory_breakpoints.iter().any(String::is_empty) {
            return Err(Error::Configuration(
                "mandatory_breakpoints must not contain empty tokens".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`BreakerConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    policy: Option<BreakingPolicy>,
    direction: Option<ReadDirection>,
    breakpoints: Option<BTreeSet<String>>,
    mandatory_breakpoints: Option<BTreeSet<String>>,
}

impl ConfigBuilder {
    /// Set the breaking policy
    pub fn policy(mut self, policy: BreakingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the read direction
    pub fn direction(mut self, direction: ReadDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Replace the breakpoint tokens
    pub fn breakpoints<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breakpoints = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the mandatory breakpoint tokens
    pub fn mandatory_breakpoints<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mandatory_breakpoints = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<BreakerConfig> {
        let mut config = BreakerConfig::default();

        if let Some(policy) = self.policy {
            config.policy = policy;
        }

        if let Some(direction) = self.direction {
            config.direction = direction;
        }

        if let Some(breakpoints) = self.breakpoints {
            config.breakpoints = breakpoints;
        }

        if let Some(mandatory) = self.mandatory_breakpoints {
            config.mandatory_breakpoints = mandatory;
        }

        config.validate()?;
        Ok(config)
    }
}
