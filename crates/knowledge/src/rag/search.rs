//! Keyword scoring over the document corpus.
//!
//! Scores are plain counts: every distinct body word contributes the number
//! of times it occurs as a substring of the query, the title contributes the
//! number of times the whole query occurs in it, and a small boost table adds
//! a fixed bonus for a handful of topic keywords.

use std::collections::HashSet;

use crate::corpus::{corpus, Document};
use crate::rag::types::ScoredDocument;

/// Maximum number of documents a search returns.
pub const MAX_RESULTS: usize = 3;

/// Bonus added when a boost rule fires.
pub const BOOST_BONUS: usize = 5;

/// A topic rule: if the query mentions any trigger and the title carries the
/// marker, the document gets [`BOOST_BONUS`].
#[derive(Debug, Clone, Copy)]
pub struct KeywordBoost {
    /// Lowercase keywords looked for in the query
    pub triggers: &'static [&'static str],

    /// Lowercase phrase looked for in the title
    pub title_marker: &'static str,
}

/// Boost rules applied to every document, in order.
pub const KEYWORD_BOOSTS: [KeywordBoost; 3] = [
    KeywordBoost {
        triggers: &["rag", "retrieval"],
        title_marker: "rag",
    },
    KeywordBoost {
        triggers: &["fastapi"],
        title_marker: "fastapi",
    },
    KeywordBoost {
        triggers: &["react", "hooks"],
        title_marker: "react hooks",
    },
];

impl KeywordBoost {
    /// Bonus this rule contributes for a lowercased query and title.
    fn bonus(&self, query_lower: &str, title_lower: &str) -> usize {
        let triggered = self.triggers.iter().any(|t| query_lower.contains(t));
        if triggered && title_lower.contains(self.title_marker) {
            BOOST_BONUS
        } else {
            0
        }
    }
}

/// Compute the relevance score of one document for a query.
pub fn score_document(query: &str, doc: &Document) -> usize {
    let query_lower = query.to_lowercase();
    score_lowered(&query_lower, doc)
}

fn score_lowered(query_lower: &str, doc: &Document) -> usize {
    let body_lower = doc.body.to_lowercase();
    let title_lower = doc.title.to_lowercase();

    // Body words are matched as substrings of the query, not as query tokens.
    let words: HashSet<&str> = body_lower.split_whitespace().collect();
    let body_score: usize = words
        .iter()
        .map(|word| query_lower.matches(word).count())
        .sum();

    let title_score = title_lower.matches(query_lower).count();

    let boost_score: usize = KEYWORD_BOOSTS
        .iter()
        .map(|rule| rule.bonus(query_lower, &title_lower))
        .sum();

    body_score + title_score + boost_score
}

/// Rank `docs` against `query`.
///
/// Documents scoring zero are dropped. The rest are ordered by descending
/// score, keeping corpus order among equal scores, and cut to [`MAX_RESULTS`].
pub fn rank<'a>(query: &str, docs: &'a [Document]) -> Vec<ScoredDocument<'a>> {
    let query_lower = query.to_lowercase();

    let mut scored: Vec<ScoredDocument<'a>> = docs
        .iter()
        .map(|document| ScoredDocument {
            score: score_lowered(&query_lower, document),
            document,
        })
        .filter(|hit| hit.score > 0)
        .collect();

    // `sort_by` is stable, so ties keep corpus order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RESULTS);

    tracing::debug!(
        "Ranked {} of {} documents for query {:?}",
        scored.len(),
        docs.len(),
        query
    );

    scored
}

/// Rank the built-in corpus against `query` and return the matching documents.
pub fn simple_search(query: &str) -> Vec<&'static Document> {
    rank(query, corpus()).into_iter().map(|hit| hit.document).collect()
}
