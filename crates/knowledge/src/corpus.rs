//! The built-in FAQ corpus searched by the mock retriever.

use serde::Serialize;

/// A single corpus entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Display title, also used as the citation label
    pub title: &'static str,

    /// Answer text shown to the user
    pub body: &'static str,

    /// Citation link
    pub url: &'static str,
}

/// Process-wide, read-only document set.
pub static CORPUS: [Document; 3] = [
    Document {
        title: "What is RAG?",
        body: "RAG (Retrieval-Augmented Generation) combines information retrieval with generation. The system retrieves relevant documents and feeds them into the LLM to ground responses.",
        url: "https://en.wikipedia.org/wiki/Augmented_language_models",
    },
    Document {
        title: "FastAPI basics",
        body: "FastAPI is a modern, fast web framework for building APIs with Python 3.7+ based on standard Python type hints.",
        url: "https://fastapi.tiangolo.com/",
    },
    Document {
        title: "React Hooks",
        body: "Hooks like useState and useEffect let you use state and lifecycle in function components.",
        url: "https://react.dev/learn",
    },
];

/// Access the built-in corpus.
pub fn corpus() -> &'static [Document] {
    &CORPUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_titles_in_order() {
        let titles: Vec<&str> = corpus().iter().map(|d| d.title).collect();
        assert_eq!(titles, vec!["What is RAG?", "FastAPI basics", "React Hooks"]);
    }

    #[test]
    fn test_corpus_urls_are_https() {
        assert!(corpus().iter().all(|d| d.url.starts_with("https://")));
    }
}
