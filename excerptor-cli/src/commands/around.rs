//! Around command implementation

use anyhow::Result;
use clap::Args;
use excerptor_core::Window;
use std::path::PathBuf;

use super::{anchor_error, BreakArgs};
use crate::input::FileReader;
use crate::output::ExcerptRecord;

/// Arguments for the around command
///
/// `--min` and `--max` apply to both sides unless a side is overridden.
#[derive(Debug, Args)]
pub struct AroundArgs {
    /// Input file (`-` for stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Character offset the excerpt must enclose
    #[arg(short, long, value_name = "OFFSET")]
    pub anchor: usize,

    /// Minimum characters before the anchor
    #[arg(long, value_name = "CHARS")]
    pub before_min: Option<usize>,

    /// Window before the anchor (negative = unbounded)
    #[arg(long, value_name = "CHARS", allow_negative_numbers = true)]
    pub before_max: Option<i64>,

    /// Minimum characters after the anchor
    #[arg(long, value_name = "CHARS")]
    pub after_min: Option<usize>,

    /// Window after the anchor (negative = unbounded)
    #[arg(long, value_name = "CHARS", allow_negative_numbers = true)]
    pub after_max: Option<i64>,

    #[command(flatten)]
    pub common: BreakArgs,
}

impl AroundArgs {
    /// Execute the around command
    pub fn execute(&self) -> Result<()> {
        let settings = self.common.settings()?;
        let text = FileReader::read_text(&self.input)?;

        let side = |min: Option<usize>, max: Option<i64>| {
            Window::new(
                min.unwrap_or(settings.min),
                max.map_or(settings.max, |m| usize::try_from(m).ok()),
            )
        };
        let before = side(self.before_min, self.before_max);
        let after = side(self.after_min, self.after_max);
        log::debug!("Context windows before {:?}, after {:?}", before, after);

        let excerpt = settings
            .breaker
            .context_around(&text, self.anchor, before, after)
            .map_err(anchor_error)?;

        let mut formatter = self.common.formatter(&settings)?;
        if let Some(excerpt) = excerpt {
            formatter.format_excerpt(&ExcerptRecord::new(excerpt.into_owned(), None))?;
        }
        formatter.finish()
    }
}
