//! Turns search hits into a chat reply.

use crate::corpus::Document;
use crate::rag::search::simple_search;
use crate::rag::types::{ChatResponse, SourceRef};

/// First line of every retrieval answer.
pub const ANSWER_HEADER: &str = "Here's what I found via (mock) retrieval:";

/// Reply used when no document scores above zero.
pub const NO_MATCH_FALLBACK: &str = "I didn't find anything specific. Try asking about RAG, FastAPI, React Hooks, `time`, or `weather Boston`.";

/// Search the corpus and format the reply for `query`.
pub fn answer(query: &str) -> ChatResponse {
    let hits = simple_search(query);

    if hits.is_empty() {
        tracing::info!("No documents matched, returning fallback");
        return ChatResponse::text(NO_MATCH_FALLBACK);
    }

    tracing::info!("Answering from {} document(s)", hits.len());
    format_hits(&hits)
}

/// Build the reply for a non-empty, already ranked hit list.
pub fn format_hits(hits: &[&Document]) -> ChatResponse {
    let lines = hits
        .iter()
        .map(|doc| format!("- {}: {}", doc.title, doc.body));

    let content = std::iter::once(ANSWER_HEADER.to_string())
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n");

    let sources = hits.iter().map(|doc| SourceRef::from(*doc)).collect();

    ChatResponse::new(content, sources)
}
