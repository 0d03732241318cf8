//! Scenario tests over the built-in corpus.

mod rag_ranking;
