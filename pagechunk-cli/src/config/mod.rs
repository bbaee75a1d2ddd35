//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use pagechunk_core::{ChunkConfig, KeepSeparator, LengthUnit, OversizePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Chunking-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Preferred split boundary
    pub separator: String,

    /// Interpret the separator as a regular expression
    pub separator_is_regex: bool,

    /// Maximum chunk length
    pub chunk_size: usize,

    /// Length shared by consecutive chunks
    pub chunk_overlap: usize,

    /// Unit used to measure lengths
    pub length_unit: LengthUnit,

    /// Where separators end up
    pub keep_separator: KeepSeparator,

    /// Trim whitespace around chunks
    pub strip_whitespace: bool,

    /// Cut segments longer than the chunk size
    pub hard_split: bool,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            separator_is_regex: false,
            chunk_size: 1000,
            chunk_overlap: 200,
            length_unit: LengthUnit::Chars,
            keep_separator: KeepSeparator::None,
            strip_whitespace: true,
            hard_split: false,
        }
    }
}

impl ChunkingConfig {
    /// Build a validated core configuration
    pub fn to_chunk_config(&self) -> Result<ChunkConfig> {
        let oversize = if self.hard_split {
            OversizePolicy::HardSplit
        } else {
            OversizePolicy::Keep
        };

        let config = ChunkConfig::builder()
            .separator(self.separator.clone())
            .separator_is_regex(self.separator_is_regex)
            .chunk_size(self.chunk_size)
            .chunk_overlap(self.chunk_overlap)
            .length_unit(self.length_unit)
            .keep_separator(self.keep_separator)
            .strip_whitespace(self.strip_whitespace)
            .oversize(oversize)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Chunk every document on its own instead of joining them first
    pub per_document: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            per_document: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from a file when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Expand backslash escapes typed on the command line (`\n`, `\t`, ...)
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0C'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
