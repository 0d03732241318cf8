//! Serve command handler.
//!
//! Runs the HTTP chat API.

use clap::Args;
use demochat_assistant::Assistant;
use demochat_core::{config::AppConfig, AppResult};
use demochat_server::AppState;

/// Run the HTTP chat API
#[derive(Args, Debug)]
pub struct ServeCommand {}

impl ServeCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing serve command");
        config.validate()?;

        let state = AppState::new(Assistant::default());
        demochat_server::serve(config, state).await
    }
}
