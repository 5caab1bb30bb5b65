//! Configuration module

use anyhow::{Context, Result};
use excerptor_core::{defaults, BreakerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Breaker configuration
    #[serde(default)]
    pub breaking: BreakerConfig,

    /// Excerpt length configuration
    #[serde(default)]
    pub excerpt: ExcerptConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Excerpt length configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExcerptConfig {
    /// Characters skipped before a break is eligible
    pub min: usize,

    /// Characters within which a break must be found (absent = unbounded)
    pub max: Option<usize>,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            min: defaults::MIN_LENGTH,
            max: Some(defaults::MAX_LENGTH),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config
            .breaking
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use excerptor_core::{BreakingPolicy, ReadDirection};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.breaking, BreakerConfig::default());
        assert_eq!(config.excerpt.min, defaults::MIN_LENGTH);
        assert_eq!(config.excerpt.max, Some(defaults::MAX_LENGTH));
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
[breaking]
policy = "last"
direction = "backward"
breakpoints = [".", "!", "?"]

[excerpt]
min = 40
max = 120

[output]
default_format = "json"
pretty_json = false
"#,
        )
        .unwrap();

        assert_eq!(config.breaking.policy, BreakingPolicy::Last);
        assert_eq!(config.breaking.direction, ReadDirection::Backward);
        assert_eq!(config.breaking.breakpoints.len(), 3);
        assert_eq!(config.excerpt.min, 40);
        assert_eq!(config.excerpt.max, Some(120));
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = CliConfig::from_toml_str("[excerpt]\nmin = 10\n").unwrap();
        assert_eq!(config.excerpt.min, 10);
        assert_eq!(config.excerpt.max, Some(defaults::MAX_LENGTH));
        assert_eq!(config.breaking, BreakerConfig::default());
    }

    #[test]
    fn test_empty_breakpoint_is_rejected() {
        let result = CliConfig::from_toml_str("[breaking]\nbreakpoints = [\"\"]\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndefault_format = \"markdown\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output.default_format, OutputFormat::Markdown);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/excerptor.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
