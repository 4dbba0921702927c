//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

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
        let template = format!(
            "# mdfic configuration\n# Pass with --config or set MDFIC_CONFIG.\n\n{}",
            CliConfig::default().to_toml()?
        );

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Configuration written to {}", path.display());
        println!();
        println!("Use it with:");
        println!("   mdfic --config {} thread story.md", path.display());

        Ok(())
    }
}
