//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use excerptor_core::{BreakingPolicy, ReadDirection, TextBreaker};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{create_formatter, OutputFormat, OutputFormatter};

pub mod around;
pub mod excerpt;
pub mod generate_config;
pub mod locate;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the offset of the break closest to an anchor
    Locate(locate::LocateArgs),

    /// Print the excerpt between an anchor and its closest break
    Excerpt(excerpt::ExcerptArgs),

    /// Print the excerpt enclosing an anchor
    Around(around::AroundArgs),

    /// Split whole files into consecutive excerpts
    Split(split::SplitArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List breaking policies
    Policies,

    /// List read directions
    Directions,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Locate(args) => args.execute(),
            Commands::Excerpt(args) => args.execute(),
            Commands::Around(args) => args.execute(),
            Commands::Split(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute(&mut io::stdout().lock())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing to `out`
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Policies => {
                writeln!(out, "Breaking policies:")?;
                for policy in BreakingPolicy::ALL {
                    let description = match policy {
                        BreakingPolicy::First => "break at the first breakpoint in the window",
                        BreakingPolicy::Last => "break at the last breakpoint in the window",
                    };
                    writeln!(out, "  {:<10} {}", policy.as_str(), description)?;
                }
            }
            ListCommands::Directions => {
                writeln!(out, "Read directions:")?;
                for direction in ReadDirection::ALL {
                    let description = match direction {
                        ReadDirection::Forward => "scan toward the end of the text",
                        ReadDirection::Backward => "scan toward the start of the text",
                    };
                    writeln!(out, "  {:<10} {}", direction.as_str(), description)?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                writeln!(out, "  text       one excerpt per line")?;
                writeln!(out, "  json       array of excerpts with character offsets")?;
                writeln!(out, "  markdown   numbered list with a total")?;
            }
        }
        Ok(())
    }
}

/// Options shared by every command that breaks text
#[derive(Debug, Clone, Default, Args)]
pub struct BreakArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Breaking policy (first, last)
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<BreakingPolicy>,

    /// Read direction (forward, backward)
    #[arg(short, long, value_name = "DIRECTION")]
    pub direction: Option<ReadDirection>,

    /// Breakpoint token; repeat to give several (`\n` and `\t` are unescaped)
    #[arg(short, long = "breakpoint", value_name = "TOKEN")]
    pub breakpoints: Vec<String>,

    /// Characters skipped before a break is eligible
    #[arg(long, value_name = "CHARS")]
    pub min: Option<usize>,

    /// Characters within which a break must be found (negative = unbounded)
    #[arg(long, value_name = "CHARS", allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Breaker and settings after merging config file and flags
#[derive(Debug)]
pub struct Settings {
    /// Configured breaker
    pub breaker: TextBreaker,
    /// Characters skipped before a break is eligible
    pub min: usize,
    /// Break window, `None` when unbounded
    pub max: Option<usize>,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl BreakArgs {
    /// Initialize logging, load the config file and apply flag overrides
    pub fn settings(&self) -> Result<Settings> {
        self.init_logging();

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        log::debug!("Loaded configuration: {:?}", config);

        let mut breaker = TextBreaker::from_config(&config.breaking);
        if let Some(policy) = self.policy {
            breaker.set_policy(policy);
        }
        if let Some(direction) = self.direction {
            breaker.set_direction(direction);
        }
        if !self.breakpoints.is_empty() {
            breaker.set_breakpoints(self.breakpoints.iter().map(|t| unescape_token(t)));
        }
        if !breaker.mandatory_breakpoints().is_empty() {
            log::warn!(
                "Mandatory breakpoints {:?} are configured but do not affect breaking",
                breaker.mandatory_breakpoints()
            );
        }

        let min = self.min.unwrap_or(config.excerpt.min);
        let max = match self.max {
            Some(max) => usize::try_from(max).ok(),
            None => config.excerpt.max,
        };

        let settings = Settings {
            breaker,
            min,
            max,
            format: self.format.unwrap_or(config.output.default_format),
            pretty_json: config.output.pretty_json,
        };
        log::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    /// Formatter for the resolved format, writing to `--output` or stdout
    pub fn formatter(&self, settings: &Settings) -> Result<Box<dyn OutputFormatter>> {
        let writer = open_output(self.output.as_deref())?;
        Ok(create_formatter(settings.format, writer, settings.pretty_json))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Writer for `path`, or stdout when absent
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Report an anchor outside the text as a bad argument
pub fn anchor_error(err: excerptor_core::Error) -> anyhow::Error {
    match err {
        excerptor_core::Error::IndexOutOfRange { .. } => {
            CliError::InvalidArgument(err.to_string()).into()
        }
        other => other.into(),
    }
}

/// Turn `\n`, `\t` and `\\` typed on the command line into real characters
pub fn unescape_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
