mod bot;
mod command;
mod config;
mod discord;
mod error;
mod interaction;
mod model;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::bot::Dispatcher;
use crate::command::CommandRegistry;
use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    let registry = CommandRegistry::load_all(command::all(&config.setup))
        .inspect_err(|e| tracing::error!("Failed to load commands: {}", e))?;
    if registry.is_empty() {
        tracing::warn!("No commands loaded, nothing will be registered");
    } else {
        tracing::info!("Loaded {} commands", registry.len());
    }

    let dispatcher = Arc::new(Dispatcher::new(registry));

    let client = bot::start::init_bot(&config, dispatcher.clone()).await?;

    bot::start::start_bot(client, dispatcher)
        .await
        .inspect_err(|e| tracing::error!("Discord bot error: {}", e))
}
