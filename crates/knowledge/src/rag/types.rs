//! Chat response types.

use serde::{Deserialize, Serialize};

use crate::corpus::Document;

/// A citation pointing at a corpus document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Document title
    pub title: String,

    /// Document link
    pub url: String,
}

impl From<&Document> for SourceRef {
    fn from(doc: &Document) -> Self {
        Self {
            title: doc.title.to_string(),
            url: doc.url.to_string(),
        }
    }
}

/// The reply for one chat turn.
///
/// Serializes to exactly `{"content": ..., "sources": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text
    pub content: String,

    /// Documents the reply was drawn from, best match first
    pub sources: Vec<SourceRef>,
}

impl ChatResponse {
    /// Create a response with sources.
    pub fn new(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self {
            content: content.into(),
            sources,
        }
    }

    /// Create a response that cites nothing (tool output, fallbacks).
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, Vec::new())
    }
}

/// A document paired with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredDocument<'a> {
    /// Relevance score, always positive for returned hits
    pub score: usize,

    /// The scored document
    pub document: &'a Document,
}
