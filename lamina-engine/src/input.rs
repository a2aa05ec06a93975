//! Input contract consumed from the document-extraction collaborator

use serde::{Deserialize, Serialize};

/// Characters assumed per page when the extractor reports no page count
const DEFAULT_CHARS_PER_PAGE: usize = 3000;

/// Raw text plus basic metadata handed over by the extraction layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    /// Plain text extracted from the source document
    pub text: String,
    /// Total page count reported by the extractor
    pub total_pages: u32,
    /// Source file size in bytes
    pub file_size: u64,
    /// Document title, when the extractor found one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Producing application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Creation date, as reported by the extractor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last modification date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

impl ExtractedDocument {
    /// Create a document from extractor output
    pub fn new(text: impl Into<String>, total_pages: u32, file_size: u64) -> Self {
        Self {
            text: text.into(),
            total_pages,
            file_size,
            title: None,
            author: None,
            creator: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Create a document from bare text, estimating the page count
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let pages = text
            .chars()
            .count()
            .div_ceil(DEFAULT_CHARS_PER_PAGE)
            .max(1) as u32;
        let size = text.len() as u64;
        Self::new(text, pages, size)
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}
