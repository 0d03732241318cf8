//! Search command handler.
//!
//! Shows the ranker's scores for a query, for tuning and debugging.

use clap::Args;
use demochat_core::AppResult;
use demochat_knowledge::{corpus, rank};

/// Rank the corpus against a query and show scores
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Query text
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing search command");

        let query = self.query.join(" ");
        let hits = rank(&query, corpus());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&hits)?);
            return Ok(());
        }

        if hits.is_empty() {
            println!("No documents matched {:?}", query);
            return Ok(());
        }

        for (i, hit) in hits.iter().enumerate() {
            println!(
                "{}. [score {:>3}] {} <{}>",
                i + 1,
                hit.score,
                hit.document.title,
                hit.document.url
            );
        }

        Ok(())
    }
}
