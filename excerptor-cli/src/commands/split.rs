//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::{BreakArgs, Settings};
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::ExcerptRecord;
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Worker threads when several files match (default: CPU count)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub common: BreakArgs,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let settings = self.common.settings()?;

        let files = if self.input.len() == 1 && self.input[0] == STDIN_MARKER {
            vec![PathBuf::from(STDIN_MARKER)]
        } else {
            resolve_patterns(&self.input)?
        };
        log::info!("Splitting {} file(s)", files.len());

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(files.len() as u64);

        let labelled = files.len() > 1;
        let split_one = |path: &PathBuf| -> Result<Vec<ExcerptRecord>> {
            let records = split_file(&settings, path, labelled)?;
            progress.file_completed(&path.display().to_string());
            Ok(records)
        };

        let per_file: Vec<Vec<ExcerptRecord>> = if files.len() > 1 {
            let threads = self.threads.unwrap_or_else(num_cpus::get);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            log::debug!("Using {} worker threads", threads);
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| split_one(path))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files.iter().map(|path| split_one(path)).collect::<Result<_>>()?
        };
        progress.finish();

        let mut formatter = self.common.formatter(&settings)?;
        let mut total = 0;
        for record in per_file.iter().flatten() {
            formatter.format_excerpt(record)?;
            total += 1;
        }
        formatter.finish()?;

        log::info!("Wrote {} excerpts", total);
        Ok(())
    }
}

/// Chop one file into excerpts
fn split_file(settings: &Settings, path: &Path, labelled: bool) -> Result<Vec<ExcerptRecord>> {
    let text = FileReader::read_text(path)?;
    let source = labelled.then(|| path.display().to_string());

    let records: Vec<ExcerptRecord> = settings
        .breaker
        .excerpts(&text, settings.min, settings.max)
        .map(|excerpt| ExcerptRecord::new(excerpt.into_owned(), source.clone()))
        .collect();
    log::debug!("{}: {} excerpts", path.display(), records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>, output: PathBuf) -> SplitArgs {
        SplitArgs {
            input,
            threads: Some(2),
            common: BreakArgs {
                min: Some(0),
                max: Some(-1),
                format: Some(OutputFormat::Json),
                output: Some(output),
                quiet: true,
                ..BreakArgs::default()
            },
        }
    }

    #[test]
    fn test_split_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("chapter.txt");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, "One two. Three four. Five six.").unwrap();

        args(vec![input.display().to_string()], output.clone())
            .execute()
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        let texts: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["One two.", " Three four.", " Five six."]);
        assert!(value[0].get("source").is_none());
    }

    #[test]
    fn test_split_many_files_keeps_file_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "Alpha one. Alpha two.").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "Beta one.").unwrap();
        let output = temp_dir.path().join("out.json");

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        args(vec![pattern], output.clone()).execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items[0]["source"].as_str().unwrap().ends_with("a.txt"));
        assert!(items[2]["source"].as_str().unwrap().ends_with("b.txt"));
        assert_eq!(items[2]["text"], "Beta one.");
    }
}
