//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// An excerpt ready for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptRecord {
    /// Source file, when several files are processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The excerpt text
    pub text: String,
    /// Starting character offset in the source text
    pub start: usize,
    /// Character offset one past the excerpt
    pub end: usize,
}

impl ExcerptRecord {
    /// Build a record from a core excerpt
    pub fn new(excerpt: excerptor_core::OwnedExcerpt, source: Option<String>) -> Self {
        Self {
            source,
            text: excerpt.text,
            start: excerpt.start,
            end: excerpt.end,
        }
    }

    /// Length in characters
    pub fn length(&self) -> usize {
        self.end - self.start
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single excerpt
    fn format_excerpt(&mut self, excerpt: &ExcerptRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one excerpt per line
    #[default]
    Text,
    /// JSON array of excerpts with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

/// Create a formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
