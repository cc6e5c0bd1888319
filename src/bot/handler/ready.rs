//! Ready event handler.
//!
//! The `ready` event fires after the gateway handshake completes, once per
//! session. A reconnect that starts a new session fires it again, which
//! re-runs the bulk registration; overwriting with the same commands is a
//! no-op on Discord's side.

use serenity::all::{Context, Ready};

use crate::bot::Dispatcher;
use crate::discord::SerenityRegistrar;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `dispatcher` - Performs the command registration and state transition
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(dispatcher: &Dispatcher, ctx: Context, ready: Ready) {
    tracing::info!(
        "Logged in as {} ({}) in {} guilds",
        ready.user.name,
        ready.user.id,
        ready.guilds.len()
    );

    let registrar = SerenityRegistrar::new(ctx.http.clone());
    dispatcher.on_ready(&registrar).await;
}
