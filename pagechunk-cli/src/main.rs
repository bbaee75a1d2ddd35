//! pagechunk command-line entry point

use clap::Parser;
use pagechunk_cli::commands::Commands;

/// Extract document text and split it into overlapping chunks
#[derive(Debug, Parser)]
#[command(name = "pagechunk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_flags() {
        let cli = Cli::try_parse_from([
            "pagechunk",
            "process",
            "-i",
            "docs/*.pdf",
            "--chunk-size",
            "500",
            "--length-unit",
            "words",
            "--keep-separator",
            "end",
            "-f",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["docs/*.pdf"]);
                assert_eq!(args.chunk_size, Some(500));
                assert_eq!(args.length_unit, Some(pagechunk_core::LengthUnit::Words));
                assert!(args.chunk_overlap.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_process_requires_input() {
        assert!(Cli::try_parse_from(["pagechunk", "process"]).is_err());
    }
}
