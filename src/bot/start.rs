use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::bot::{handler::Handler, Dispatcher};
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client without connecting.
///
/// The application id is attached to the client's HTTP instance, which is
/// required for the global command registration performed on ready.
///
/// # Arguments
/// - `config` - Bot token and application id
/// - `dispatcher` - Receives the ready signal and every interaction
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The token was rejected by serenity's validation
pub async fn init_bot(config: &Config, dispatcher: Arc<Dispatcher>) -> Result<Client, AppError> {
    // Interactions don't depend on intents
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .application_id(config.discord_client_id)
        .event_handler(Handler::new(dispatcher))
        .await?;

    Ok(client)
}

/// Runs the Discord bot until shutdown.
///
/// Blocks until every shard has stopped, either because Ctrl-C was received
/// or because the gateway connection failed in a way serenity cannot
/// recover from (for example an invalid token).
///
/// # Arguments
/// - `client` - Client built by `init_bot`
/// - `dispatcher` - Tracks the connection lifecycle
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client, dispatcher: Arc<Dispatcher>) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received, disconnecting from Discord");
                shard_manager.shutdown_all().await;
            }
            Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    dispatcher.connecting();
    tracing::info!("Starting Discord bot...");

    let result = client.start().await;
    dispatcher.shutdown();

    result?;

    Ok(())
}
