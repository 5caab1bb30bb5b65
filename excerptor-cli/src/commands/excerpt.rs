//! Excerpt command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{anchor_error, BreakArgs};
use crate::input::FileReader;
use crate::output::ExcerptRecord;

/// Arguments for the excerpt command
#[derive(Debug, Args)]
pub struct ExcerptArgs {
    /// Input file (`-` for stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Anchor character offset
    #[arg(long, value_name = "OFFSET", default_value_t = 0)]
    pub from: usize,

    #[command(flatten)]
    pub common: BreakArgs,
}

impl ExcerptArgs {
    /// Execute the excerpt command
    pub fn execute(&self) -> Result<()> {
        let settings = self.common.settings()?;
        let text = FileReader::read_text(&self.input)?;

        let excerpt = settings
            .breaker
            .break_excerpt(&text, self.from, settings.min, settings.max)
            .map_err(anchor_error)?;

        let mut formatter = self.common.formatter(&settings)?;
        if let Some(excerpt) = excerpt {
            log::info!("Excerpt spans {}..{}", excerpt.start(), excerpt.end());
            formatter.format_excerpt(&ExcerptRecord::new(excerpt.into_owned(), None))?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use excerptor_core::ReadDirection;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_backward_excerpt_as_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("chapter.txt");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, "One two. Three four. Five six.").unwrap();

        let args = ExcerptArgs {
            input,
            from: 29,
            common: BreakArgs {
                direction: Some(ReadDirection::Backward),
                min: Some(0),
                max: Some(-1),
                format: Some(OutputFormat::Json),
                output: Some(output.clone()),
                quiet: true,
                ..BreakArgs::default()
            },
        };
        args.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value[0]["text"], "Five six");
        assert_eq!(value[0]["start"], 21);
        assert_eq!(value[0]["end"], 29);
    }
}
