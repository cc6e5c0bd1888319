//! Discord capabilities consumed by the dispatcher and by command handlers.
//!
//! Each capability is a trait so the routing and command logic can run
//! against recording mocks in tests. The serenity implementations live in
//! the submodules:
//!
//! - **guild** - role, category and forum operations in one guild
//! - **registrar** - bulk overwrite of the application's global commands
//! - **responder** - initial response to a command interaction

pub mod guild;
pub mod registrar;
pub mod responder;

#[cfg(test)]
pub mod mock;

use serenity::all::{ChannelId, ForumLayoutType, GuildId, RoleId};
use serenity::async_trait;

use crate::error::{command::CommandError, AppError};
use crate::model::{
    channel::{NewForumChannel, NewRole},
    command::CommandDescriptor,
    reply::InteractionReply,
};

pub use guild::SerenityGuild;
pub use registrar::SerenityRegistrar;
pub use responder::SerenityResponder;

/// Answers one interaction.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Sends the initial response.
    async fn send(&self, reply: &InteractionReply) -> Result<(), CommandError>;

    /// Acknowledges the interaction with an ephemeral "thinking" state.
    ///
    /// Discord drops interactions that get no initial response within
    /// three seconds; a deferred interaction is answered with `edit` later.
    async fn defer(&self) -> Result<(), CommandError>;

    /// Replaces the deferred response with `reply`.
    async fn edit(&self, reply: &InteractionReply) -> Result<(), CommandError>;
}

/// Replaces the full set of commands Discord knows for this application.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Overwrites the remote command list with `commands`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands Discord reports as registered
    /// - `Err(AppError)` - The request failed
    async fn overwrite_commands(&self, commands: &[CommandDescriptor]) -> Result<usize, AppError>;
}

/// Administrative operations on the guild an interaction came from.
#[async_trait]
pub trait GuildApi: Send + Sync {
    fn guild_id(&self) -> GuildId;

    async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleId>, CommandError>;

    async fn create_role(&self, role: &NewRole) -> Result<RoleId, CommandError>;

    /// Whether the bot's own member has the role.
    async fn bot_has_role(&self, role_id: RoleId) -> Result<bool, CommandError>;

    /// Adds the role to the bot's own member.
    async fn add_bot_role(&self, role_id: RoleId) -> Result<(), CommandError>;

    async fn create_category(&self, name: &str) -> Result<ChannelId, CommandError>;

    async fn create_forum(&self, forum: &NewForumChannel) -> Result<ChannelId, CommandError>;

    async fn set_forum_layout(
        &self,
        channel_id: ChannelId,
        layout: ForumLayoutType,
    ) -> Result<(), CommandError>;
}
