//! Mock weather report.

use demochat_knowledge::ChatResponse;

/// City used when the request names none.
pub const DEFAULT_CITY: &str = "your city";

/// Extract the city from a weather request: everything after the first space.
pub fn parse_city(text: &str) -> &str {
    text.split_once(' ')
        .map(|(_, city)| city)
        .unwrap_or(DEFAULT_CITY)
}

/// Report the same sunny forecast for any city.
pub fn mock_weather(city: &str) -> ChatResponse {
    ChatResponse::text(format!(
        "(Mock) The weather in {} is sunny with a high of 25°C.",
        city
    ))
}
