//! Routes interactions to commands and owns the registration lifecycle.
//!
//! The dispatcher moves through `Disconnected -> Connecting -> Registering
//! -> Listening` and back to `Disconnected` on shutdown. Registration runs
//! once per gateway session; a failed registration is logged and the
//! dispatcher keeps listening, since commands registered by an earlier run
//! stay usable.
//!
//! Each interaction is handled independently. Handlers run in their own
//! task so a panicking handler is contained the same way as one that
//! returns an error: logged, and answered with a generic ephemeral reply.

use std::sync::{Arc, RwLock};

use crate::command::CommandRegistry;
use crate::discord::CommandRegistrar;
use crate::interaction::InteractionEvent;
use crate::model::reply::InteractionReply;

/// Lifecycle of the connection to Discord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Disconnected,
    Connecting,
    Registering,
    Listening,
}

/// Result of routing one interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command's handler completed successfully
    Handled,
    /// The handler failed or panicked; the user got the generic error reply
    /// if the interaction was still unanswered
    HandlerFailed,
    /// No command with that name is registered; nothing was sent
    UnknownCommand,
}

pub struct Dispatcher {
    registry: CommandRegistry,
    state: RwLock<DispatcherState>,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            state: RwLock::new(DispatcherState::Disconnected),
        }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn state(&self) -> DispatcherState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn transition(&self, next: DispatcherState) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        tracing::debug!("Dispatcher state {:?} -> {:?}", *state, next);
        *state = next;
    }

    /// Marks the start of a connection attempt.
    pub fn connecting(&self) {
        self.transition(DispatcherState::Connecting);
    }

    /// Marks the connection as closed.
    pub fn shutdown(&self) {
        self.transition(DispatcherState::Disconnected);
    }

    /// Handles the gateway's session-ready signal.
    ///
    /// Pushes every loaded command to Discord, replacing whatever was
    /// registered before, then starts listening regardless of the result.
    ///
    /// # Arguments
    /// - `registrar` - Performs the bulk overwrite call
    pub async fn on_ready(&self, registrar: &dyn CommandRegistrar) {
        self.transition(DispatcherState::Registering);

        let commands = self.registry.serialize();
        tracing::info!(
            "Started refreshing {} application (/) commands",
            commands.len()
        );

        match registrar.overwrite_commands(&commands).await {
            Ok(count) => {
                tracing::info!("Successfully reloaded {} application (/) commands", count)
            }
            Err(e) => tracing::error!("Failed to register application commands: {}", e),
        }

        self.transition(DispatcherState::Listening);
    }

    /// Routes a command interaction to its handler.
    ///
    /// Never fails: handler errors are logged and answered with the generic
    /// ephemeral error reply, unknown commands are logged and left
    /// unanswered.
    ///
    /// # Arguments
    /// - `event` - The incoming command interaction
    ///
    /// # Returns
    /// - `DispatchOutcome` describing what happened to the interaction
    pub async fn dispatch(&self, event: Arc<InteractionEvent>) -> DispatchOutcome {
        let Some(command) = self.registry.lookup(event.command_name()) else {
            tracing::warn!(
                "Received interaction for unknown command {}",
                event.command_name()
            );
            return DispatchOutcome::UnknownCommand;
        };

        let state = self.state();
        if state != DispatcherState::Listening {
            tracing::debug!("Routing command {} while {:?}", command.name(), state);
        }

        let handler = command.clone();
        let handler_event = event.clone();
        let result = tokio::spawn(async move { handler.execute(&handler_event).await }).await;

        let failure = match result {
            Ok(Ok(())) => return DispatchOutcome::Handled,
            Ok(Err(e)) => e.to_string(),
            Err(e) => format!("handler task failed: {}", e),
        };

        tracing::error!(
            "Error while executing command {}: {}",
            command.name(),
            failure
        );

        if event.has_replied() {
            tracing::warn!(
                "Command {} already replied before failing, skipping error reply",
                command.name()
            );
        } else if let Err(e) = event.reply(InteractionReply::handler_error()).await {
            tracing::error!(
                "Failed to send error reply for command {}: {}",
                command.name(),
                e
            );
        }

        DispatchOutcome::HandlerFailed
    }
}
