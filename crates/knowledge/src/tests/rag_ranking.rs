//! Tests for ranking correctness against the built-in corpus.

use crate::corpus::{corpus, CORPUS};
use crate::rag::answer::{answer, ANSWER_HEADER, NO_MATCH_FALLBACK};
use crate::rag::search::{rank, simple_search, BOOST_BONUS, MAX_RESULTS};

/// Queries exercising each branch of the scorer.
const QUERIES: [&str; 8] = [
    "What is RAG?",
    "fastapi",
    "How do React hooks work?",
    "retrieval",
    "tell me about python type hints",
    "a",
    "zzzzzzz",
    "",
];

#[test]
fn test_rag_question_ranks_rag_first() {
    let hits = rank("What is RAG?", corpus());

    assert_eq!(hits[0].document.title, "What is RAG?");
    assert_eq!(
        hits[0].document.url,
        "https://en.wikipedia.org/wiki/Augmented_language_models"
    );
    assert!(hits[0].score > BOOST_BONUS);

    let response = answer("What is RAG?");
    assert_eq!(response.sources[0].title, "What is RAG?");
    assert_eq!(
        response.sources[0].url,
        "https://en.wikipedia.org/wiki/Augmented_language_models"
    );
}

#[test]
fn test_fastapi_is_boosted() {
    let hits = rank("fastapi", corpus());

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.title, "FastAPI basics");
    assert_eq!(hits[0].score, 10);
}

#[test]
fn test_react_hooks_question() {
    let hits = rank("How do React hooks work?", corpus());
    let titles: Vec<&str> = hits.iter().map(|h| h.document.title).collect();

    assert_eq!(titles, vec!["React Hooks", "FastAPI basics"]);
    assert_eq!(hits[0].score, 1 + BOOST_BONUS);
}

#[test]
fn test_retrieval_keyword_boosts_rag() {
    let hits = rank("retrieval", corpus());
    assert_eq!(hits[0].document.title, "What is RAG?");
    assert_eq!(hits[0].score, 1 + BOOST_BONUS);
}

#[test]
fn test_unrelated_query_falls_back() {
    assert!(simple_search("zzzzzzz").is_empty());

    let response = answer("zzzzzzz");
    assert_eq!(response.content, NO_MATCH_FALLBACK);
    assert!(response.sources.is_empty());
}

#[test]
fn test_empty_query_matches_every_title() {
    // An empty query occurs at every character boundary of each title.
    let hits = rank("", corpus());
    let scored: Vec<(&str, usize)> = hits.iter().map(|h| (h.document.title, h.score)).collect();

    assert_eq!(
        scored,
        vec![("FastAPI basics", 15), ("What is RAG?", 13), ("React Hooks", 12)]
    );
}

#[test]
fn test_ranking_is_idempotent() {
    for query in QUERIES {
        assert_eq!(rank(query, corpus()), rank(query, corpus()), "query {:?}", query);
        assert_eq!(answer(query), answer(query));
    }
}

#[test]
fn test_hits_are_bounded_positive_and_from_corpus() {
    for query in QUERIES {
        let hits = rank(query, corpus());

        assert!(hits.len() <= MAX_RESULTS);
        assert!(hits.iter().all(|h| h.score > 0));
        assert!(hits.iter().all(|h| CORPUS.contains(h.document)));
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn test_answer_sources_match_content_lines() {
    for query in QUERIES {
        let response = answer(query);
        if response.sources.is_empty() {
            assert_eq!(response.content, NO_MATCH_FALLBACK);
            continue;
        }

        let mut lines = response.content.lines();
        assert_eq!(lines.next(), Some(ANSWER_HEADER));
        for (line, source) in lines.zip(&response.sources) {
            assert!(line.starts_with(&format!("- {}: ", source.title)));
        }
        assert_eq!(response.content.lines().count(), response.sources.len() + 1);
    }
}
