//! Length functions used to measure chunks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Measures the size of a piece of text in some unit
///
/// Any `Fn(&str) -> usize + Send + Sync` closure is a length function, so a
/// tokenizer can be plugged in without a wrapper type:
///
/// ```
/// use pagechunk_core::{ChunkConfig, LengthFunction};
///
/// let config = ChunkConfig::builder()
///     .chunk_size(64)
///     .chunk_overlap(8)
///     .length_function(|text: &str| text.len() / 4)
///     .build()
///     .unwrap();
/// assert_eq!(config.length_function().name(), "custom");
/// ```
pub trait LengthFunction: Send + Sync {
    /// Size of `text`
    fn length(&self, text: &str) -> usize;

    /// Short name used in logs and debug output
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> LengthFunction for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn length(&self, text: &str) -> usize {
        self(text)
    }
}

/// Counts Unicode scalar values
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl LengthFunction for CharCount {
    fn length(&self, text: &str) -> usize {
        text.chars().count()
    }

    fn name(&self) -> &str {
        "chars"
    }
}

/// Counts UTF-8 bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteCount;

impl LengthFunction for ByteCount {
    fn length(&self, text: &str) -> usize {
        text.len()
    }

    fn name(&self) -> &str {
        "bytes"
    }
}

/// Counts whitespace-separated words, a rough token estimate
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCount;

impl LengthFunction for WordCount {
    fn length(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    fn name(&self) -> &str {
        "words"
    }
}

/// Built-in length functions selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Characters
    #[default]
    Chars,
    /// Bytes
    Bytes,
    /// Words
    Words,
}

impl LengthUnit {
    /// All built-in units
    pub const ALL: [LengthUnit; 3] = [LengthUnit::Chars, LengthUnit::Bytes, LengthUnit::Words];

    /// Get the length function for this unit
    pub fn function(self) -> Arc<dyn LengthFunction> {
        match self {
            LengthUnit::Chars => Arc::new(CharCount),
            LengthUnit::Bytes => Arc::new(ByteCount),
            LengthUnit::Words => Arc::new(WordCount),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Chars => "chars",
            LengthUnit::Bytes => "bytes",
            LengthUnit::Words => "words",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chars" | "characters" => Ok(LengthUnit::Chars),
            "bytes" => Ok(LengthUnit::Bytes),
            "words" => Ok(LengthUnit::Words),
            other => Err(format!("unknown length unit: {other}")),
        }
    }
}
