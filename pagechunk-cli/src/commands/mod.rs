//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use pagechunk_core::LengthUnit;

pub mod extract;
pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract document text and split it into overlapping chunks
    Process(process::ProcessArgs),

    /// Print the extracted document text without chunking
    Extract(extract::ExtractArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available length units
    Units,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Extract(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => {
                let mut lines = vec!["Available output formats:".to_string()];
                lines.extend(
                    OutputFormat::ALL
                        .iter()
                        .map(|format| {
                            format!("  {:<10} {}", format.as_str(), format.description())
                        }),
                );
                lines
            }
            ListCommands::Units => {
                let mut lines = vec!["Available length units:".to_string()];
                lines.extend(
                    LengthUnit::ALL
                        .iter()
                        .map(|unit| {
                            format!("  {:<10} {}", unit.as_str(), unit_description(*unit))
                        }),
                );
                lines
            }
        }
    }
}

fn unit_description(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Chars => "Unicode scalar values (default)",
        LengthUnit::Bytes => "UTF-8 bytes",
        LengthUnit::Words => "whitespace-separated words",
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` overrides the level derived from `-v`. Nothing is set up when
/// `quiet` is given.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
