//! Chunk configuration and its builder

use crate::error::{ChunkError, Result};
use crate::length::{CharCount, LengthFunction, LengthUnit};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Default separator: a blank line between paragraphs
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Default maximum chunk length
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Default overlap between consecutive chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Where separators end up once the text is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepSeparator {
    /// Separators are dropped and re-inserted only between segments that
    /// land in the same chunk
    #[default]
    None,
    /// Each separator is attached to the start of the segment after it
    Start,
    /// Each separator is attached to the end of the segment before it
    End,
}

/// What to do with a single segment longer than the chunk size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OversizePolicy {
    /// Emit the segment unsplit as its own oversized chunk
    #[default]
    Keep,
    /// Cut the segment at character boundaries into overlapping pieces
    /// that each fit the chunk size
    HardSplit,
}

/// Immutable chunking configuration
///
/// Built through [`ChunkConfig::builder`], which enforces `chunk_size > 0`
/// and `chunk_overlap < chunk_size` and compiles regex separators.
#[derive(Clone)]
pub struct ChunkConfig {
    pub(crate) separator: String,
    pub(crate) pattern: Option<Regex>,
    pub(crate) chunk_size: usize,
    pub(crate) chunk_overlap: usize,
    pub(crate) keep_separator: KeepSeparator,
    pub(crate) strip_whitespace: bool,
    pub(crate) oversize: OversizePolicy,
    pub(crate) length_function: Arc<dyn LengthFunction>,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            pattern: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            keep_separator: KeepSeparator::None,
            strip_whitespace: true,
            oversize: OversizePolicy::Keep,
            length_function: Arc::new(CharCount),
        }
    }
}

impl fmt::Debug for ChunkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkConfig")
            .field("separator", &self.separator)
            .field("separator_is_regex", &self.pattern.is_some())
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("keep_separator", &self.keep_separator)
            .field("strip_whitespace", &self.strip_whitespace)
            .field("oversize", &self.oversize)
            .field("length_function", &self.length_function.name())
            .finish()
    }
}

impl ChunkConfig {
    /// Create a builder
    pub fn builder() -> ChunkConfigBuilder {
        ChunkConfigBuilder::default()
    }

    /// Create a validated configuration with a literal separator and
    /// character lengths
    pub fn new(
        separator: impl Into<String>,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Self> {
        Self::builder()
            .separator(separator)
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .build()
    }

    /// Separator string (a regex pattern when [`Self::separator_is_regex`])
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Whether the separator is a regular expression
    pub fn separator_is_regex(&self) -> bool {
        self.pattern.is_some()
    }

    /// Maximum measured length of a chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Maximum measured length shared by consecutive chunks
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Separator placement
    pub fn keep_separator(&self) -> KeepSeparator {
        self.keep_separator
    }

    /// Whether chunks are trimmed
    pub fn strip_whitespace(&self) -> bool {
        self.strip_whitespace
    }

    /// Oversized segment handling
    pub fn oversize(&self) -> OversizePolicy {
        self.oversize
    }

    /// Length function used for every measurement
    pub fn length_function(&self) -> &dyn LengthFunction {
        self.length_function.as_ref()
    }

    /// Measure `text` with the configured length function
    pub fn measure(&self, text: &str) -> usize {
        self.length_function.length(text)
    }
}

/// Builder for [`ChunkConfig`]
#[derive(Clone)]
pub struct ChunkConfigBuilder {
    separator: String,
    separator_is_regex: bool,
    chunk_size: usize,
    chunk_overlap: usize,
    keep_separator: KeepSeparator,
    strip_whitespace: bool,
    oversize: OversizePolicy,
    length_function: Arc<dyn LengthFunction>,
}

impl Default for ChunkConfigBuilder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            separator_is_regex: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            keep_separator: KeepSeparator::None,
            strip_whitespace: true,
            oversize: OversizePolicy::Keep,
            length_function: Arc::new(CharCount),
        }
    }
}

impl fmt::Debug for ChunkConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkConfigBuilder")
            .field("separator", &self.separator)
            .field("separator_is_regex", &self.separator_is_regex)
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("length_function", &self.length_function.name())
            .finish_non_exhaustive()
    }
}

impl ChunkConfigBuilder {
    /// Set a literal separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self.separator_is_regex = false;
        self
    }

    /// Set a regular-expression separator
    pub fn separator_regex(mut self, pattern: impl Into<String>) -> Self {
        self.separator = pattern.into();
        self.separator_is_regex = true;
        self
    }

    /// Treat the current separator as a regex (or as a literal)
    pub fn separator_is_regex(mut self, is_regex: bool) -> Self {
        self.separator_is_regex = is_regex;
        self
    }

    /// Set the maximum chunk length
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    /// Set separator placement
    pub fn keep_separator(mut self, keep: KeepSeparator) -> Self {
        self.keep_separator = keep;
        self
    }

    /// Trim whitespace around emitted chunks
    pub fn strip_whitespace(mut self, strip: bool) -> Self {
        self.strip_whitespace = strip;
        self
    }

    /// Set oversized segment handling
    pub fn oversize(mut self, policy: OversizePolicy) -> Self {
        self.oversize = policy;
        self
    }

    /// Use a custom length function
    pub fn length_function(mut self, function: impl LengthFunction + 'static) -> Self {
        self.length_function = Arc::new(function);
        self
    }

    /// Use a built-in length function
    pub fn length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_function = unit.function();
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ChunkConfig> {
        if self.chunk_size == 0 {
            return Err(ChunkError::InvalidChunkSize);
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkError::InvalidOverlap {
                overlap: self.chunk_overlap,
                size: self.chunk_size,
            });
        }

        let pattern = if self.separator_is_regex && !self.separator.is_empty() {
            let regex = Regex::new(&self.separator)
                .map_err(|err| ChunkError::from((self.separator.clone(), err)))?;
            Some(regex)
        } else {
            None
        };

        Ok(ChunkConfig {
            separator: self.separator,
            pattern,
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            keep_separator: self.keep_separator,
            strip_whitespace: self.strip_whitespace,
            oversize: self.oversize,
            length_function: self.length_function,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkConfig::default();
        assert_eq!(config.separator(), "\n\n");
        assert_eq!(config.chunk_size(), 4000);
        assert_eq!(config.chunk_overlap(), 200);
        assert!(config.strip_whitespace());
        assert!(!config.separator_is_regex());
        assert_eq!(config.oversize(), OversizePolicy::Keep);
        assert_eq!(config.length_function().name(), "chars");
    }

    #[test]
    fn test_overlap_equal_to_size_rejected() {
        let err = ChunkConfig::new("\n", 4, 4).unwrap_err();
        assert_eq!(err, ChunkError::InvalidOverlap { overlap: 4, size: 4 });
    }

    #[test]
    fn test_overlap_larger_than_size_rejected() {
        let err = ChunkConfig::new("\n", 4, 5).unwrap_err();
        assert_eq!(err, ChunkError::InvalidOverlap { overlap: 5, size: 4 });
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = ChunkConfig::builder()
            .chunk_size(0)
            .chunk_overlap(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ChunkError::InvalidChunkSize);
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = ChunkConfig::builder()
            .separator_regex("[unclosed")
            .build()
            .unwrap_err();
        assert!(matches!(err, ChunkError::InvalidSeparator { .. }));
    }

    #[test]
    fn test_literal_separator_not_compiled() {
        // Regex metacharacters are fine in a literal separator
        let config = ChunkConfig::new("[", 10, 0).unwrap();
        assert!(!config.separator_is_regex());
    }

    #[test]
    fn test_builder_length_unit() {
        let config = ChunkConfig::builder()
            .length_unit(LengthUnit::Bytes)
            .build()
            .unwrap();
        assert_eq!(config.measure("日本"), 6);
    }

    #[test]
    fn test_debug_output_names_length_function() {
        let config = ChunkConfig::default();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ChunkConfig"));
        assert!(debug_str.contains("\"chars\""));
    }
}
