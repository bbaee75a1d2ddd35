//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::from_file(&self.config).and_then(|config| {
            let chunk_config = config.chunking.to_chunk_config()?;
            Ok((config, chunk_config))
        });

        match checked {
            Ok((config, chunk_config)) => {
                println!("✓ Configuration is valid!");
                println!("  Separator: {:?}", chunk_config.separator());
                if chunk_config.separator_is_regex() {
                    println!("  Separator is a regular expression");
                }
                println!(
                    "  Chunk size: {} {}",
                    chunk_config.chunk_size(),
                    config.chunking.length_unit
                );
                println!("  Chunk overlap: {}", chunk_config.chunk_overlap());
                println!("  Output format: {}", config.output.format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
