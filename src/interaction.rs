use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serenity::all::Permissions;

use crate::discord::{GuildApi, Responder};
use crate::error::command::CommandError;
use crate::model::{
    command::{OptionValue, SuppliedOption},
    reply::InteractionReply,
};

/// A single slash command invocation delivered by Discord.
///
/// Lives for the duration of one handler invocation. Holds the reply
/// capability and guards it so the interaction is answered at most once.
/// A handler expecting to run past Discord's three second response window
/// can `defer` first; its reply then replaces the deferred response.
pub struct InteractionEvent {
    command_name: String,
    options: Vec<SuppliedOption>,
    member_permissions: Option<Permissions>,
    guild: Option<Arc<dyn GuildApi>>,
    responder: Arc<dyn Responder>,
    replied: AtomicBool,
    deferred: AtomicBool,
}

impl InteractionEvent {
    pub fn new(command_name: impl Into<String>, responder: Arc<dyn Responder>) -> Self {
        Self {
            command_name: command_name.into(),
            options: Vec::new(),
            member_permissions: None,
            guild: None,
            responder,
            replied: AtomicBool::new(false),
            deferred: AtomicBool::new(false),
        }
    }

    pub fn with_options(mut self, options: Vec<SuppliedOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_member_permissions(mut self, permissions: Permissions) -> Self {
        self.member_permissions = Some(permissions);
        self
    }

    pub fn with_guild(mut self, guild: Arc<dyn GuildApi>) -> Self {
        self.guild = Some(guild);
        self
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    /// Returns the string value of a required option.
    ///
    /// # Returns
    /// - `Ok(&str)` - The option was supplied as a string
    /// - `Err(CommandError::MissingOption)` - Absent or not a string
    pub fn string_option(&self, name: &str) -> Result<&str, CommandError> {
        self.option(name)
            .and_then(OptionValue::as_str)
            .ok_or_else(|| CommandError::MissingOption(name.to_string()))
    }

    /// Permissions of the invoking member in the channel, empty outside guilds.
    pub fn member_permissions(&self) -> Permissions {
        self.member_permissions.unwrap_or_else(Permissions::empty)
    }

    pub fn guild(&self) -> Result<&dyn GuildApi, CommandError> {
        self.guild.as_deref().ok_or(CommandError::NotInGuild)
    }

    pub fn has_replied(&self) -> bool {
        self.replied.load(Ordering::Acquire)
    }

    pub fn is_deferred(&self) -> bool {
        self.deferred.load(Ordering::Acquire)
    }

    /// Acknowledges the interaction without answering it yet.
    ///
    /// Fails with `CommandError::AlreadyReplied` once the interaction has
    /// been deferred or answered.
    pub async fn defer(&self) -> Result<(), CommandError> {
        if self.has_replied() || self.deferred.swap(true, Ordering::AcqRel) {
            return Err(CommandError::AlreadyReplied);
        }

        if let Err(e) = self.responder.defer().await {
            self.deferred.store(false, Ordering::Release);
            return Err(e);
        }

        Ok(())
    }

    /// Sends the interaction's single response.
    ///
    /// A deferred interaction gets its deferred response edited instead.
    /// A second call fails with `CommandError::AlreadyReplied` without
    /// contacting Discord. If sending fails the interaction is still
    /// considered unanswered, so a fallback reply can be attempted.
    pub async fn reply(&self, reply: InteractionReply) -> Result<(), CommandError> {
        if self.replied.swap(true, Ordering::AcqRel) {
            return Err(CommandError::AlreadyReplied);
        }

        let sent = if self.is_deferred() {
            self.responder.edit(&reply).await
        } else {
            self.responder.send(&reply).await
        };

        if let Err(e) = sent {
            self.replied.store(false, Ordering::Release);
            return Err(e);
        }

        Ok(())
    }
}
