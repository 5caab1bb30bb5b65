//! Locate command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use super::{anchor_error, open_output, BreakArgs};
use crate::input::FileReader;
use crate::output::OutputFormat;

/// Arguments for the locate command
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Input file (`-` for stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Anchor character offset
    #[arg(long, value_name = "OFFSET", default_value_t = 0)]
    pub from: usize,

    #[command(flatten)]
    pub common: BreakArgs,
}

#[derive(Debug, Serialize)]
struct Located {
    from: usize,
    index: usize,
}

impl LocateArgs {
    /// Execute the locate command
    pub fn execute(&self) -> Result<()> {
        let settings = self.common.settings()?;

        let index = settings
            .breaker
            .find_input(
                FileReader::input(&self.input),
                self.from,
                settings.min,
                settings.max,
            )
            .map_err(anchor_error)?;
        log::info!("Break for offset {} found at {}", self.from, index);

        let mut out = open_output(self.common.output.as_deref())?;
        match settings.format {
            OutputFormat::Json => {
                let located = Located {
                    from: self.from,
                    index,
                };
                if settings.pretty_json {
                    serde_json::to_writer_pretty(&mut out, &located)?;
                } else {
                    serde_json::to_writer(&mut out, &located)?;
                }
                writeln!(out)?;
            }
            OutputFormat::Text | OutputFormat::Markdown => writeln!(out, "{index}")?,
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: PathBuf, from: usize) -> LocateArgs {
        LocateArgs {
            input,
            from,
            common: BreakArgs {
                min: Some(0),
                quiet: true,
                ..BreakArgs::default()
            },
        }
    }

    #[test]
    fn test_locate_writes_index() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("chapter.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "One two. Three four.").unwrap();

        let mut args = args(input, 0);
        args.common.output = Some(output.clone());
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "8\n");
    }

    #[test]
    fn test_locate_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("latin1.txt");
        fs::write(&input, [0x66, 0xff]).unwrap();

        let err = args(input, 0).execute().unwrap_err();
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_locate_anchor_past_end_fails() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("chapter.txt");
        fs::write(&input, "Short.").unwrap();

        let err = args(input, 6).execute().unwrap_err();
        assert!(err.to_string().contains("Invalid argument"));
    }
}
