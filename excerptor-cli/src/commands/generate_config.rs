//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Commented configuration holding the built-in defaults
pub const TEMPLATE: &str = r#"# Excerptor configuration

[breaking]
# Which breakpoint wins when several fall in the window: "first" or "last"
policy = "first"

# Scan direction from the anchor: "forward" or "backward"
direction = "forward"

# Tokens that end a sentence or paragraph
# Add "\r\n" for files with Windows line endings
breakpoints = [".", "\n"]

# Accepted but not yet used when breaking
mandatory_breakpoints = []

[excerpt]
# Characters skipped before a break is eligible
min = 200

# Characters within which a break must be found; remove for no limit
max = 400

[output]
# Default output format: "text", "json" or "markdown"
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let Some(output) = &self.output else {
            print!("{TEMPLATE}");
            return Ok(());
        };

        std::fs::write(output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template written to {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to choose your breakpoints and lengths");
        println!("2. Validate it:");
        println!("   excerptor validate --config {}", output.display());
        println!("3. Use it:");
        println!(
            "   excerptor split -i chapter.txt --config {}",
            output.display()
        );

        Ok(())
    }
}
