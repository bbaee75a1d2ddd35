//! Separator-aware text chunking for document indexing
//!
//! This crate turns extracted document text into ordered, overlapping
//! chunks that can be embedded or indexed independently. Text is split on a
//! preferred separator, the pieces are merged greedily up to a maximum
//! length, and the tail of each chunk is carried into the next one.

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod length;
pub mod splitter;

// Re-export key types
pub use batch::chunk_documents;
pub use config::{ChunkConfig, ChunkConfigBuilder, KeepSeparator, OversizePolicy};
pub use document::{split_pages, DocumentText};
pub use error::{ChunkError, Result};
pub use length::{ByteCount, CharCount, LengthFunction, LengthUnit, WordCount};
pub use splitter::CharacterSplitter;

/// Split text with the given configuration
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    CharacterSplitter::new(config.clone()).split_text(text)
}
