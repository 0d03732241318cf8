//! Ask command handler.
//!
//! Sends one user message through the assistant without starting the server.

use clap::Args;
use demochat_assistant::{Assistant, ChatResponse, Message};
use demochat_core::AppResult;

/// Ask the assistant a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// Message text (e.g. "What is RAG?", "time", "weather Boston")
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Output the raw response as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let message = Message::user(self.text.join(" "));
        tracing::debug!("User input: {}", message.content);

        let response = Assistant::default().respond(&[message]);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            print_response(&response);
        }

        Ok(())
    }
}

fn print_response(response: &ChatResponse) {
    println!("{}", response.content);

    if !response.sources.is_empty() {
        println!();
        println!("Sources:");
        for (i, source) in response.sources.iter().enumerate() {
            println!("  [{}] {} <{}>", i + 1, source.title, source.url);
        }
    }
}
