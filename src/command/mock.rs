//! Test handlers that record their invocations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serenity::async_trait;

use super::{CommandDefinition, CommandHandler};
use crate::error::command::CommandError;
use crate::interaction::InteractionEvent;
use crate::model::reply::InteractionReply;

/// What a `CountingHandler` does after recording the call.
#[derive(Clone, Copy)]
pub enum Behaviour {
    /// Returns `Ok(())` without replying
    Succeed,
    /// Replies with the command's name, then returns `Ok(())`
    Reply,
    /// Returns an error without replying
    Fail,
    /// Replies, then returns an error
    ReplyThenFail,
    /// Defers, then returns an error
    DeferThenFail,
    /// Panics
    Panic,
}

pub struct CountingHandler {
    calls: Arc<AtomicUsize>,
    behaviour: Behaviour,
}

#[async_trait]
impl CommandHandler for CountingHandler {
    async fn execute(&self, interaction: &InteractionEvent) -> Result<(), CommandError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if matches!(self.behaviour, Behaviour::Reply | Behaviour::ReplyThenFail) {
            interaction
                .reply(InteractionReply::ephemeral(interaction.command_name()))
                .await?;
        }

        if matches!(self.behaviour, Behaviour::DeferThenFail) {
            interaction.defer().await?;
        }

        match self.behaviour {
            Behaviour::Panic => panic!("handler panicked"),
            Behaviour::Succeed | Behaviour::Reply => Ok(()),
            Behaviour::Fail | Behaviour::ReplyThenFail | Behaviour::DeferThenFail => {
                Err(serenity::Error::Other("boom").into())
            }
        }
    }
}

/// Builds a definition whose handler counts its invocations.
///
/// # Returns
/// - The definition and the shared invocation counter
pub fn counting_command(name: &str, behaviour: Behaviour) -> (CommandDefinition, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let definition = CommandDefinition::new(
        name,
        "Test command",
        CountingHandler {
            calls: calls.clone(),
            behaviour,
        },
    );

    (definition, calls)
}
