//! File reading and text extraction

use crate::error::CliError;
use anyhow::Result;
use pagechunk_core::{split_pages, DocumentText};
use std::fs;
use std::path::Path;

/// Kind of input document, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF, extracted page by page
    Pdf,
    /// Anything else, read as UTF-8 text
    PlainText,
}

impl DocumentKind {
    /// Detect the kind of a path
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ReadError(format!("Failed to read file {}: {e}", path.display()))
        })?;

        Ok(content)
    }

    /// Read a file as raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content = fs::read(path).map_err(|e| {
            CliError::ReadError(format!("Failed to read file {}: {e}", path.display()))
        })?;

        Ok(content)
    }

    /// Extract the text of one document
    ///
    /// PDF pages are separated on form feeds and a page without text
    /// contributes an empty string. A PDF the extractor cannot parse yields
    /// an empty document and a warning; only I/O failures are errors.
    pub fn extract(path: &Path) -> Result<DocumentText> {
        match DocumentKind::detect(path) {
            DocumentKind::Pdf => {
                let bytes = Self::read_bytes(path)?;
                Ok(extract_pdf(&bytes, path))
            }
            DocumentKind::PlainText => {
                let text = Self::read_text(path)?;
                Ok(DocumentText::from_pages([Some(text)]))
            }
        }
    }
}

/// Extract page texts from PDF bytes
fn extract_pdf(bytes: &[u8], path: &Path) -> DocumentText {
    let raw = match pdf_extract::extract_text_from_mem(bytes) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("No text extracted from {}: {e}", path.display());
            return DocumentText::default();
        }
    };

    let doc = pages_from_raw(&raw);

    if doc.is_blank() {
        log::warn!("{} contains no extractable text", path.display());
    } else {
        log::debug!(
            "Extracted {} pages from {}",
            doc.page_count(),
            path.display()
        );
    }
    doc
}

/// Assemble extractor output into pages; only empty pages count as missing
fn pages_from_raw(raw: &str) -> DocumentText {
    DocumentText::from_pages(
        split_pages(raw)
            .into_iter()
            .map(|page| (!page.is_empty()).then_some(page)),
    )
}
