//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Policy: {}", config.breaking.policy);
                println!("  Direction: {}", config.breaking.direction);
                println!("  Breakpoints: {:?}", config.breaking.breakpoints);
                if !config.breaking.mandatory_breakpoints.is_empty() {
                    println!(
                        "  Mandatory breakpoints (inert): {:?}",
                        config.breaking.mandatory_breakpoints
                    );
                }
                match config.excerpt.max {
                    Some(max) => println!("  Window: {}..{} characters", config.excerpt.min, max),
                    None => println!("  Window: {}.. characters", config.excerpt.min),
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
