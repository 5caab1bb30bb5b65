//! Markdown output formatter

use super::{ExcerptRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs excerpts as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    excerpt_count: usize,
    current_source: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            excerpt_count: 0,
            current_source: None,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_excerpt(&mut self, excerpt: &ExcerptRecord) -> Result<()> {
        if excerpt.source.is_some() && excerpt.source != self.current_source {
            if self.excerpt_count > 0 {
                writeln!(self.writer)?;
            }
            if let Some(source) = &excerpt.source {
                writeln!(self.writer, "## {source}")?;
                writeln!(self.writer)?;
            }
            self.current_source = excerpt.source.clone();
        }

        self.excerpt_count += 1;
        // Keep paragraph breaks inside one list item
        let body = excerpt.text.trim().replace('\n', "\n   ");
        writeln!(self.writer, "{}. {}", self.excerpt_count, body)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total excerpts: {}*", self.excerpt_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
