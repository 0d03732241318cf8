//! Mock retrieval: keyword ranking over the corpus and answer formatting.

pub mod answer;
pub mod search;
pub mod types;

pub use answer::answer;
pub use search::{rank, simple_search};
pub use types::{ChatResponse, ScoredDocument, SourceRef};
