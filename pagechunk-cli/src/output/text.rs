//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - each chunk follows a `--- chunk N ---` header
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn start_document(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "=== {source} ===")?;
        Ok(())
    }

    fn format_chunk(&mut self, index: usize, chunk: &str, _length: usize) -> Result<()> {
        writeln!(self.writer, "--- chunk {index} ---")?;
        writeln!(self.writer, "{chunk}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
