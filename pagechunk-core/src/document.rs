//! Document text assembled from extracted pages

use std::fmt;

/// Page separator emitted by PDF text extractors
pub const FORM_FEED: char = '\x0C';

/// Text of one or more documents, ready for chunking
///
/// Every page is followed by a newline. A page the extractor could not read
/// contributes an empty string, so a document without any text simply adds
/// nothing but line breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    text: String,
    pages: usize,
}

impl DocumentText {
    /// Assemble document text from per-page extraction results
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut count = 0;
        for page in pages {
            if let Some(page) = page {
                text.push_str(page.as_ref());
            }
            text.push('\n');
            count += 1;
        }
        Self { text, pages: count }
    }

    /// Join several documents in order
    pub fn concat<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = DocumentText>,
    {
        documents
            .into_iter()
            .fold(DocumentText::default(), |mut acc, doc| {
                acc.text.push_str(&doc.text);
                acc.pages += doc.pages;
                acc
            })
    }

    /// The assembled text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume into the assembled text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of pages, including empty ones
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Whether the text holds anything but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split raw extractor output into pages on form feeds
///
/// A trailing form feed does not open an extra page.
pub fn split_pages(raw: &str) -> Vec<&str> {
    let mut pages: Vec<&str> = raw.split(FORM_FEED).collect();
    if pages.len() > 1 && pages.last().is_some_and(|page| page.is_empty()) {
        pages.pop();
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_joined_with_trailing_newline() {
        let doc = DocumentText::from_pages([Some("page one"), Some("page two")]);
        assert_eq!(doc.as_str(), "page one\npage two\n");
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_missing_page_contributes_empty_string() {
        let doc = DocumentText::from_pages([Some("first"), None, Some("third")]);
        assert_eq!(doc.as_str(), "first\n\nthird\n");
        assert_eq!(doc.page_count(), 3);
    }

    #[test]
    fn test_no_pages() {
        let doc = DocumentText::from_pages(Vec::<Option<String>>::new());
        assert_eq!(doc.as_str(), "");
        assert!(doc.is_blank());
    }

    #[test]
    fn test_concat_keeps_order() {
        let a = DocumentText::from_pages([Some("a")]);
        let b = DocumentText::from_pages([Some("b1"), Some("b2")]);
        let joined = DocumentText::concat([a, b]);
        assert_eq!(joined.as_str(), "a\nb1\nb2\n");
        assert_eq!(joined.page_count(), 3);
    }

    #[test]
    fn test_split_pages_on_form_feed() {
        assert_eq!(split_pages("one\x0Ctwo\x0C"), vec!["one", "two"]);
        assert_eq!(split_pages("single"), vec!["single"]);
        assert_eq!(split_pages(""), vec![""]);
        assert_eq!(split_pages("a\x0C\x0Cb"), vec!["a", "", "b"]);
    }
}
