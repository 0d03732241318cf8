//! Knowledge layer for the demochat backend.
//!
//! Holds the fixed FAQ corpus and the keyword ranker that stands in for a
//! real retrieval index.

pub mod corpus;
pub mod rag;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use corpus::{corpus, Document, CORPUS};
pub use rag::{answer, rank, simple_search, ChatResponse, ScoredDocument, SourceRef};
