//! Local time lookup.

use demochat_knowledge::ChatResponse;

use crate::clock::Clock;

/// Format used for the reported timestamp.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Report the clock's current local time.
pub fn current_time(clock: &dyn Clock) -> ChatResponse {
    let now = clock.now().format(TIME_FORMAT);
    ChatResponse::text(format!("The current local time is {}.", now))
}
