//! Routes the latest user turn to a tool or to the mock retriever.

use std::sync::Arc;

use demochat_knowledge::{rag, ChatResponse};

use crate::clock::{Clock, SystemClock};
use crate::message::{Message, Role};
use crate::tools;

/// Reply when the conversation holds no user turn.
pub const NO_USER_MESSAGE: &str = "Tell me something!";

/// Where a user message is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Report the local time
    Time,

    /// Report mock weather for a city
    Weather { city: &'a str },

    /// Search the corpus with the full text
    Search { query: &'a str },
}

impl<'a> Route<'a> {
    /// Pick a route for already-trimmed message text.
    ///
    /// Prefixes are matched case-insensitively, time before weather.
    pub fn classify(text: &'a str) -> Self {
        let lower = text.to_lowercase();

        if lower.starts_with("time") {
            Route::Time
        } else if lower.starts_with("weather") {
            Route::Weather {
                city: tools::parse_city(text),
            }
        } else {
            Route::Search { query: text }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Route::Time => "time",
            Route::Weather { .. } => "weather",
            Route::Search { .. } => "search",
        }
    }
}

/// Find the most recent message written by the user.
pub fn last_user_message(messages: &[Message]) -> Option<&Message> {
    messages.iter().rev().find(|m| m.role == Role::User)
}

/// Stateless chat assistant.
///
/// The only dependency is the clock used by the time tool.
#[derive(Debug, Clone)]
pub struct Assistant {
    clock: Arc<dyn Clock>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Assistant {
    /// Create an assistant reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Answer a conversation.
    ///
    /// Never fails: a history without a user turn gets [`NO_USER_MESSAGE`].
    pub fn respond(&self, messages: &[Message]) -> ChatResponse {
        match last_user_message(messages) {
            Some(message) => self.reply_to(&message.content),
            None => {
                tracing::debug!(
                    "No user message in {} history entries",
                    messages.len()
                );
                ChatResponse::text(NO_USER_MESSAGE)
            }
        }
    }

    /// Answer a single user message.
    pub fn reply_to(&self, content: &str) -> ChatResponse {
        let text = content.trim();
        let route = Route::classify(text);

        tracing::debug!(route = route.name(), "Dispatching user message");

        match route {
            Route::Time => tools::current_time(self.clock.as_ref()),
            Route::Weather { city } => tools::mock_weather(city),
            Route::Search { query } => rag::answer(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use demochat_knowledge::rag::answer::NO_MATCH_FALLBACK;

    fn fixed_assistant() -> Assistant {
        let instant = NaiveDate::from_ymd_opt(2024, 7, 14)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        Assistant::new(Arc::new(FixedClock::new(instant)))
    }

    fn msg(role: Role, content: &str) -> Message {
        Message::new("id", role, content, 0)
    }

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(Route::classify("time"), Route::Time);
        assert_eq!(Route::classify("TIME now"), Route::Time);
        assert_eq!(Route::classify("Time"), Route::Time);
        assert_eq!(Route::classify("timeline of rag"), Route::Time);
        assert_eq!(
            Route::classify("Weather Boston"),
            Route::Weather { city: "Boston" }
        );
        assert_eq!(
            Route::classify("what time is it"),
            Route::Search {
                query: "what time is it"
            }
        );
    }

    #[test]
    fn test_empty_history() {
        let response = fixed_assistant().respond(&[]);
        assert_eq!(response.content, NO_USER_MESSAGE);
        assert!(response.sources.is_empty());
    }

    #[test]
    fn test_history_without_user_turn() {
        let history = vec![
            msg(Role::System, "be nice"),
            msg(Role::Assistant, "Hello!"),
            msg(Role::Other, "time"),
        ];
        let response = fixed_assistant().respond(&history);
        assert_eq!(response.content, NO_USER_MESSAGE);
        assert!(response.sources.is_empty());
    }

    #[test]
    fn test_uses_latest_user_turn() {
        let history = vec![
            msg(Role::User, "weather Boston"),
            msg(Role::Assistant, "(Mock) ..."),
            msg(Role::User, "  time please  "),
            msg(Role::Assistant, "fastapi"),
        ];
        assert_eq!(last_user_message(&history).unwrap().content, "  time please  ");

        let response = fixed_assistant().respond(&history);
        assert_eq!(
            response.content,
            "The current local time is 2024-07-14 18:30:00."
        );
    }

    #[test]
    fn test_time_is_case_insensitive() {
        let assistant = fixed_assistant();
        for text in ["TIME now", "Time", "time"] {
            let response = assistant.reply_to(text);
            assert_eq!(
                response.content,
                "The current local time is 2024-07-14 18:30:00.",
                "input {:?}",
                text
            );
            assert!(response.sources.is_empty());
        }
    }

    #[test]
    fn test_weather_city() {
        let assistant = fixed_assistant();

        let response = assistant.reply_to("weather Boston");
        assert_eq!(
            response.content,
            "(Mock) The weather in Boston is sunny with a high of 25°C."
        );

        let response = assistant.reply_to("  WEATHER  ");
        assert_eq!(
            response.content,
            "(Mock) The weather in your city is sunny with a high of 25°C."
        );
        assert!(response.sources.is_empty());
    }

    #[test]
    fn test_search_fallthrough() {
        let response = fixed_assistant().reply_to("What is RAG?");
        assert_eq!(response.sources[0].title, "What is RAG?");
        assert!(response.content.contains("- What is RAG?: RAG (Retrieval-Augmented"));
    }

    #[test]
    fn test_search_fallback() {
        let response = fixed_assistant().reply_to("zzzzzzz");
        assert_eq!(response.content, NO_MATCH_FALLBACK);
        assert!(response.sources.is_empty());
    }

    #[test]
    fn test_whitespace_only_message_searches_empty_query() {
        let response = fixed_assistant().reply_to("   ");
        assert_eq!(response.sources.len(), 3);
        assert_eq!(response.sources[0].title, "FastAPI basics");
    }
}
