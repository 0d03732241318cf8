//! Command handlers for the demochat CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod search;
pub mod serve;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use search::SearchCommand;
pub use serve::ServeCommand;
