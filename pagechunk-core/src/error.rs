//! Error types for chunk configuration

use thiserror::Error;

/// Errors raised while building a chunk configuration
///
/// Chunking itself is infallible; every invariant is checked when the
/// configuration is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Overlap is not strictly smaller than the chunk size
    #[error("chunk overlap ({overlap}) must be smaller than chunk size ({size})")]
    InvalidOverlap {
        /// The requested overlap
        overlap: usize,
        /// The requested chunk size
        size: usize,
    },

    /// Chunk size of zero
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// Separator pattern failed to compile
    #[error("invalid separator pattern '{pattern}': {reason}")]
    InvalidSeparator {
        /// The pattern as given
        pattern: String,
        /// Why the regex engine rejected it
        reason: String,
    },
}

impl From<(String, regex::Error)> for ChunkError {
    fn from((pattern, err): (String, regex::Error)) -> Self {
        ChunkError::InvalidSeparator {
            pattern,
            reason: err.to_string(),
        }
    }
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;
