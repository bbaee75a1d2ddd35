//! Extract command implementation

use super::process::{extract_all, open_output};
use crate::input::resolve_patterns;
use anyhow::Result;
use clap::Args;
use pagechunk_core::DocumentText;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Default, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let files = resolve_patterns(&self.input)?;
        let joined = DocumentText::concat(extract_all(&files, self.quiet)?);
        log::info!(
            "Extracted {} pages from {} documents",
            joined.page_count(),
            files.len()
        );

        let mut writer = open_output(self.output.as_deref())?;
        writer.write_all(joined.as_str().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
