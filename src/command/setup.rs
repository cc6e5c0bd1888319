//! The `/setup` command.
//!
//! Prepares a guild for the bot: makes sure a bot role exists and is held by
//! the bot, then creates a category with two read-only forum channels in it
//! that only the bot role can post to. Both forums get the configured
//! reaction emoji and slowmode, and open in gallery view.
//!
//! Restricted to members with the `ADMINISTRATOR` permission. The setup
//! takes several sequential API calls, so the interaction is deferred before
//! the first one and the final message replaces the deferred response.

use serenity::all::{ForumLayoutType, Permissions};
use serenity::async_trait;

use crate::command::{CommandDefinition, CommandHandler};
use crate::config::SetupSettings;
use crate::error::command::CommandError;
use crate::interaction::InteractionEvent;
use crate::model::{
    channel::{NewForumChannel, NewRole},
    command::CommandOption,
    reply::InteractionReply,
};

pub const NAME: &str = "setup";

pub const CATEGORY_NAME: &str = "category_name";
pub const CHANNEL_ONE: &str = "channel_one";
pub const CHANNEL_TWO: &str = "channel_two";

pub const MISSING_PERMISSION_MESSAGE: &str =
    "You need administrator permissions to run this command!";

const BOT_ROLE_REASON: &str = "Role for the bot to manage channels";

pub struct SetupCommand {
    settings: SetupSettings,
}

/// Builds the `/setup` definition using the given tunables.
pub fn definition(settings: SetupSettings) -> CommandDefinition {
    CommandDefinition::new(
        NAME,
        "Setup the bot by creating a bot role and channels.",
        SetupCommand { settings },
    )
    .option(CommandOption::required_string(
        CATEGORY_NAME,
        "The name of the category to create",
    ))
    .option(CommandOption::required_string(
        CHANNEL_ONE,
        "The name of the first forum channel",
    ))
    .option(CommandOption::required_string(
        CHANNEL_TWO,
        "The name of the second forum channel",
    ))
}

#[async_trait]
impl CommandHandler for SetupCommand {
    async fn execute(&self, interaction: &InteractionEvent) -> Result<(), CommandError> {
        if !interaction
            .member_permissions()
            .contains(Permissions::ADMINISTRATOR)
        {
            return interaction
                .reply(InteractionReply::ephemeral(MISSING_PERMISSION_MESSAGE))
                .await;
        }

        let category_name = interaction.string_option(CATEGORY_NAME)?;
        let channel_one_name = interaction.string_option(CHANNEL_ONE)?;
        let channel_two_name = interaction.string_option(CHANNEL_TWO)?;
        let guild = interaction.guild()?;

        interaction.defer().await?;

        let bot_role = match guild
            .find_role_by_name(&self.settings.bot_role_name)
            .await?
        {
            Some(role_id) => role_id,
            None => {
                let role_id = guild
                    .create_role(&NewRole {
                        name: self.settings.bot_role_name.clone(),
                        colour: self.settings.bot_role_colour,
                        reason: BOT_ROLE_REASON.to_string(),
                    })
                    .await?;
                tracing::info!(
                    "Created role {} ({}) in guild {}",
                    self.settings.bot_role_name,
                    role_id,
                    guild.guild_id()
                );
                role_id
            }
        };

        if !guild.bot_has_role(bot_role).await? {
            guild.add_bot_role(bot_role).await?;
        }

        let category = guild.create_category(category_name).await?;

        let forum = |name: &str| {
            NewForumChannel::new(name, category)
                .deny_everyone(guild.guild_id(), Permissions::SEND_MESSAGES)
                .allow_role(bot_role, Permissions::SEND_MESSAGES)
                .reaction_emoji(&self.settings.forum_reaction_emoji)
                .slowmode(self.settings.forum_slowmode)
        };

        let channel_one = guild.create_forum(&forum(channel_one_name)).await?;
        let channel_two = guild.create_forum(&forum(channel_two_name)).await?;

        guild
            .set_forum_layout(channel_one, ForumLayoutType::GalleryView)
            .await?;
        guild
            .set_forum_layout(channel_two, ForumLayoutType::GalleryView)
            .await?;

        tracing::info!(
            "Set up category {} with forums {} and {} in guild {}",
            category,
            channel_one,
            channel_two,
            guild.guild_id()
        );

        interaction
            .reply(InteractionReply::ephemeral(format!(
                "Setup complete! Created category `{}` with channels `{}` and `{}` set to Gallery view.",
                category_name, channel_one_name, channel_two_name
            )))
            .await
    }
}
