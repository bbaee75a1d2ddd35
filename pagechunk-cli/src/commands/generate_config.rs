//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to tune chunking");
        println!("2. Validate your configuration:");
        println!("   pagechunk validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   pagechunk process -i 'docs/*.pdf' --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> &'static str {
        r#"# pagechunk configuration

[chunking]
# Preferred split boundary. Text is split here first, then the pieces are
# merged back up to chunk_size.
separator = "\n"

# Interpret the separator as a regular expression
separator_is_regex = false

# Maximum chunk length, measured in length_unit
chunk_size = 1000

# Length carried from the end of one chunk into the start of the next.
# Must be smaller than chunk_size.
chunk_overlap = 200

# How lengths are measured: "chars", "bytes" or "words"
length_unit = "chars"

# Keep separators in the chunks: "none", "start" or "end"
keep_separator = "none"

# Trim whitespace around every chunk
strip_whitespace = true

# Cut pieces longer than chunk_size at character boundaries instead of
# emitting them as oversized chunks
hard_split = false

[output]
# Output format: "text", "json" or "markdown"
format = "text"

# Chunk every document on its own instead of joining them first
per_document = false
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("pagechunk.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("pagechunk.toml"));
    }

    #[test]
    fn test_template_matches_defaults() {
        let config: CliConfig = toml::from_str(GenerateConfigArgs::generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("pagechunk.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let config = CliConfig::from_file(&output_path).unwrap();
        assert!(config.chunking.to_chunk_config().is_ok());
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/pagechunk.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
