use std::sync::Arc;

use serenity::all::{
    ChannelId, ChannelType, CreateChannel, EditChannel, EditRole, ForumEmoji, ForumLayoutType,
    GuildId, Http, Role, RoleId, UserId,
};
use serenity::async_trait;

use super::GuildApi;
use crate::error::command::CommandError;
use crate::model::channel::{NewForumChannel, NewRole};

/// Audit log reason attached to channel and membership changes.
const AUDIT_REASON: &str = "Requested via /setup";

/// Guild operations backed by Discord's HTTP API.
///
/// Scoped to the guild an interaction came from; "bot" operations act on
/// the member belonging to the bot's own user.
pub struct SerenityGuild {
    http: Arc<Http>,
    guild_id: GuildId,
    bot_user_id: UserId,
}

impl SerenityGuild {
    pub fn new(http: Arc<Http>, guild_id: GuildId, bot_user_id: UserId) -> Self {
        Self {
            http,
            guild_id,
            bot_user_id,
        }
    }
}

/// Channel builder for a forum under its category.
pub fn forum_builder(forum: &NewForumChannel) -> CreateChannel<'static> {
    CreateChannel::new(&forum.name)
        .kind(ChannelType::Forum)
        .category(forum.category)
        .permissions(forum.permissions.clone())
        .default_reaction_emoji(ForumEmoji::Name(forum.reaction_emoji.clone()))
        .rate_limit_per_user(forum.slowmode)
        .audit_log_reason(AUDIT_REASON)
}

pub fn forum_layout_builder(layout: ForumLayoutType) -> EditChannel<'static> {
    EditChannel::new()
        .default_forum_layout(layout)
        .audit_log_reason(AUDIT_REASON)
}

/// Finds the first role with exactly the given name.
pub fn find_role(roles: &[Role], name: &str) -> Option<RoleId> {
    roles.iter().find(|role| role.name == name).map(|role| role.id)
}

#[async_trait]
impl GuildApi for SerenityGuild {
    fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleId>, CommandError> {
        let roles = self.http.get_guild_roles(self.guild_id).await?;

        Ok(find_role(&roles, name))
    }

    async fn create_role(&self, role: &NewRole) -> Result<RoleId, CommandError> {
        let builder = EditRole::new()
            .name(&role.name)
            .colour(role.colour)
            .audit_log_reason(&role.reason);

        let created = self.guild_id.create_role(&self.http, builder).await?;

        Ok(created.id)
    }

    async fn bot_has_role(&self, role_id: RoleId) -> Result<bool, CommandError> {
        let member = self.http.get_member(self.guild_id, self.bot_user_id).await?;

        Ok(member.roles.contains(&role_id))
    }

    async fn add_bot_role(&self, role_id: RoleId) -> Result<(), CommandError> {
        self.http
            .add_member_role(self.guild_id, self.bot_user_id, role_id, Some(AUDIT_REASON))
            .await?;

        Ok(())
    }

    async fn create_category(&self, name: &str) -> Result<ChannelId, CommandError> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Category)
            .audit_log_reason(AUDIT_REASON);

        let category = self.guild_id.create_channel(&self.http, builder).await?;

        Ok(category.id)
    }

    async fn create_forum(&self, forum: &NewForumChannel) -> Result<ChannelId, CommandError> {
        let channel = self
            .guild_id
            .create_channel(&self.http, forum_builder(forum))
            .await?;

        Ok(channel.id)
    }

    async fn set_forum_layout(
        &self,
        channel_id: ChannelId,
        layout: ForumLayoutType,
    ) -> Result<(), CommandError> {
        channel_id
            .edit(&self.http, forum_layout_builder(layout))
            .await?;

        Ok(())
    }
}
