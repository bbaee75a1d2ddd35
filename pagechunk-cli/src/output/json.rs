//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    source: Option<String>,
    chunks: Vec<ChunkRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Position of the chunk in the output, starting at 1
    pub index: usize,
    /// The chunk text
    pub text: String,
    /// Measured length of the chunk
    pub length: usize,
    /// Document the chunk was cut from, when chunked per document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            source: None,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_document(&mut self, source: &str) -> Result<()> {
        self.source = Some(source.to_string());
        Ok(())
    }

    fn format_chunk(&mut self, index: usize, chunk: &str, length: usize) -> Result<()> {
        self.chunks.push(ChunkRecord {
            index,
            text: chunk.to_string(),
            length,
            source: self.source.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
