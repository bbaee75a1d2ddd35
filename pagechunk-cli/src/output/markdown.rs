//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs one section per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn start_document(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_chunk(&mut self, index: usize, chunk: &str, length: usize) -> Result<()> {
        self.chunk_count += 1;
        writeln!(self.writer, "## Chunk {index}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{chunk}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*Length: {length}*")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
