use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::bot::Dispatcher;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<Dispatcher>,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.dispatcher, ctx, ready).await;
    }

    /// Called for every interaction: slash commands, components, modals, etc.
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.dispatcher, ctx, interaction).await;
    }
}
