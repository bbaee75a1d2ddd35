//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Available output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Chunks separated by header lines
    #[default]
    Text,
    /// JSON array of chunk records
    Json,
    /// Markdown sections
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "plain text, one `--- chunk N ---` header per chunk",
            OutputFormat::Json => "JSON array of {index, text, length} records",
            OutputFormat::Markdown => "one `## Chunk N` section per chunk",
        }
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<'a, W: Write + Send + Sync + 'a>(
        &self,
        writer: W,
    ) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Begin the chunks of one source document
    ///
    /// Only called when documents are chunked independently.
    fn start_document(&mut self, source: &str) -> Result<()>;

    /// Format and output a single chunk
    fn format_chunk(&mut self, index: usize, chunk: &str, length: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{ChunkRecord, JsonFormatter};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
