use std::sync::Arc;

use serenity::all::{
    CommandInteraction, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Http,
};
use serenity::async_trait;

use super::Responder;
use crate::error::command::CommandError;
use crate::model::reply::InteractionReply;

/// Answers a slash command interaction with a channel message.
pub struct SerenityResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl SerenityResponder {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl Responder for SerenityResponder {
    async fn send(&self, reply: &InteractionReply) -> Result<(), CommandError> {
        let message = CreateInteractionResponseMessage::new()
            .content(&reply.content)
            .ephemeral(reply.ephemeral);

        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Message(message))
            .await?;

        Ok(())
    }

    async fn defer(&self) -> Result<(), CommandError> {
        self.interaction.defer_ephemeral(&self.http).await?;

        Ok(())
    }

    async fn edit(&self, reply: &InteractionReply) -> Result<(), CommandError> {
        let message = EditInteractionResponse::new().content(&reply.content);

        self.interaction.edit_response(&self.http, message).await?;

        Ok(())
    }
}
