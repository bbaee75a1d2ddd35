//! Process command implementation

use crate::config::{unescape_separator, CliConfig};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use pagechunk_core::{
    chunk_documents, chunk_text, ChunkConfig, DocumentText, KeepSeparator, LengthUnit,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Default, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Preferred split boundary; `\n`, `\t` and `\f` escapes are expanded
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Treat the separator as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Maximum chunk length
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Length carried from the end of one chunk into the next
    #[arg(long, value_name = "N")]
    pub chunk_overlap: Option<usize>,

    /// Unit used to measure lengths
    #[arg(long, value_name = "UNIT")]
    pub length_unit: Option<LengthUnit>,

    /// Keep separators in the chunks
    #[arg(long, value_enum)]
    pub keep_separator: Option<KeepSeparatorArg>,

    /// Do not trim whitespace around chunks
    #[arg(long)]
    pub no_strip: bool,

    /// Cut segments longer than the chunk size
    #[arg(long)]
    pub hard_split: bool,

    /// Chunk every document on its own
    #[arg(long)]
    pub per_document: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Separator placement accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KeepSeparatorArg {
    /// Drop separators
    None,
    /// Attach each separator to the following segment
    Start,
    /// Attach each separator to the preceding segment
    End,
}

impl From<KeepSeparatorArg> for KeepSeparator {
    fn from(arg: KeepSeparatorArg) -> Self {
        match arg {
            KeepSeparatorArg::None => KeepSeparator::None,
            KeepSeparatorArg::Start => KeepSeparator::Start,
            KeepSeparatorArg::End => KeepSeparator::End,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting document processing");
        log::debug!("Arguments: {:?}", self);

        let settings = self.merge_config(CliConfig::load(self.config.as_deref())?);
        let chunk_config = settings.chunking.to_chunk_config()?;
        log::debug!("Chunk configuration: {:?}", chunk_config);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} input files", files.len());

        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to create thread pool")?;
                pool.install(|| self.run(&files, &settings, &chunk_config))
            }
            None => self.run(&files, &settings, &chunk_config),
        }
    }

    /// Apply command-line flags on top of file or default settings
    pub fn merge_config(&self, mut config: CliConfig) -> CliConfig {
        let chunking = &mut config.chunking;
        if let Some(separator) = &self.separator {
            chunking.separator = unescape_separator(separator);
        }
        if self.regex {
            chunking.separator_is_regex = true;
        }
        if let Some(size) = self.chunk_size {
            chunking.chunk_size = size;
        }
        if let Some(overlap) = self.chunk_overlap {
            chunking.chunk_overlap = overlap;
        }
        if let Some(unit) = self.length_unit {
            chunking.length_unit = unit;
        }
        if let Some(keep) = self.keep_separator {
            chunking.keep_separator = keep.into();
        }
        if self.no_strip {
            chunking.strip_whitespace = false;
        }
        if self.hard_split {
            chunking.hard_split = true;
        }

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.per_document {
            config.output.per_document = true;
        }
        config
    }

    fn run(
        &self,
        files: &[PathBuf],
        settings: &CliConfig,
        chunk_config: &ChunkConfig,
    ) -> Result<()> {
        let documents = extract_all(files, self.quiet)?;

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = settings.output.format.formatter(writer);

        let total = if settings.output.per_document {
            let chunked = chunk_documents(&documents, chunk_config);
            let mut total = 0;
            for (path, chunks) in files.iter().zip(&chunked) {
                formatter.start_document(&path.display().to_string())?;
                write_chunks(formatter.as_mut(), chunks, chunk_config)?;
                total += chunks.len();
            }
            total
        } else {
            let joined = DocumentText::concat(documents);
            let chunks = chunk_text(joined.as_str(), chunk_config);
            write_chunks(formatter.as_mut(), &chunks, chunk_config)?;
            chunks.len()
        };

        formatter.finish()?;
        log::info!("Wrote {} chunks from {} documents", total, files.len());
        Ok(())
    }
}

/// Extract every file in parallel, keeping input order
pub(crate) fn extract_all(files: &[PathBuf], quiet: bool) -> Result<Vec<DocumentText>> {
    let mut progress = ProgressReporter::new(quiet);
    progress.init_documents(files.len() as u64);

    let documents = files
        .par_iter()
        .map(|path| -> Result<DocumentText> {
            let document = FileReader::extract(path)?;
            progress.document_completed(&display_name(path));
            Ok(document)
        })
        .collect::<Result<Vec<_>>>();

    progress.finish();
    documents
}

/// Open the output file, or stdout when none is given
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn write_chunks(
    formatter: &mut dyn OutputFormatter,
    chunks: &[String],
    config: &ChunkConfig,
) -> Result<()> {
    for (i, chunk) in chunks.iter().enumerate() {
        formatter.format_chunk(i + 1, chunk, config.measure(chunk))?;
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
