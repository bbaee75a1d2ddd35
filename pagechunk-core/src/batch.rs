//! Chunking many independent documents

use crate::config::ChunkConfig;
use crate::document::DocumentText;
use crate::splitter::CharacterSplitter;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Chunk each document independently
///
/// The result holds one chunk list per document, in input order. With the
/// `parallel` feature the documents are processed on the rayon pool.
pub fn chunk_documents(documents: &[DocumentText], config: &ChunkConfig) -> Vec<Vec<String>> {
    let splitter = CharacterSplitter::new(config.clone());

    #[cfg(feature = "parallel")]
    let chunks: Vec<Vec<String>> = documents
        .par_iter()
        .map(|doc| splitter.split_text(doc.as_str()))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let chunks: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| splitter.split_text(doc.as_str()))
        .collect();

    log::debug!(
        "chunked {} documents into {} chunks",
        documents.len(),
        chunks.iter().map(Vec::len).sum::<usize>()
    );
    chunks
}
