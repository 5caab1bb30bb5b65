//! JSON output formatter

use super::{ExcerptRecord, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs excerpts as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    excerpts: Vec<ExcerptData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
struct ExcerptData {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    text: String,
    start: usize,
    end: usize,
    length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            excerpts: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_excerpt(&mut self, excerpt: &ExcerptRecord) -> Result<()> {
        self.excerpts.push(ExcerptData {
            source: excerpt.source.clone(),
            text: excerpt.text.clone(),
            start: excerpt.start,
            end: excerpt.end,
            length: excerpt.length(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.excerpts)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.excerpts)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
