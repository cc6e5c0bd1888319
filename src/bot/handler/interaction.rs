//! Interaction event handler.
//!
//! Converts serenity's command interactions into `InteractionEvent`s wired
//! to the serenity-backed reply and guild capabilities, then hands them to
//! the dispatcher. Other interaction types are ignored.

use std::sync::Arc;

use serenity::all::{CommandDataOptionValue, CommandInteraction, Context, Http, Interaction, UserId};

use crate::bot::Dispatcher;
use crate::discord::{SerenityGuild, SerenityResponder};
use crate::interaction::InteractionEvent;
use crate::model::command::{OptionValue, SuppliedOption};

/// Handles the interaction_create event.
///
/// # Arguments
/// - `dispatcher` - Routes command interactions to their handlers
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `interaction` - The interaction received from Discord
pub async fn handle_interaction_create(
    dispatcher: &Dispatcher,
    ctx: Context,
    interaction: Interaction,
) {
    let command = match interaction {
        Interaction::Command(command) => command,
        other => {
            tracing::trace!("Ignoring {:?} interaction {}", other.kind(), other.id());
            return;
        }
    };

    let bot_user_id = ctx.cache.current_user().id;

    tracing::debug!(
        "Command {} invoked by {} in guild {:?}",
        command.data.name,
        command.user.id,
        command.guild_id
    );

    let event = command_event(ctx.http.clone(), bot_user_id, command);
    dispatcher.dispatch(Arc::new(event)).await;
}

/// Builds the dispatcher's view of a command interaction.
///
/// # Arguments
/// - `http` - Client used for the reply and any guild operations
/// - `bot_user_id` - The bot's own user, target of bot role operations
/// - `command` - The slash command interaction
///
/// # Returns
/// - `InteractionEvent` with guild capabilities only when invoked in a guild
pub fn command_event(
    http: Arc<Http>,
    bot_user_id: UserId,
    command: CommandInteraction,
) -> InteractionEvent {
    let options = supplied_options(&command);
    let permissions = command.member.as_ref().and_then(|member| member.permissions);
    let guild_id = command.guild_id;
    let name = command.data.name.clone();

    let mut event = InteractionEvent::new(
        name,
        Arc::new(SerenityResponder::new(http.clone(), command)),
    )
    .with_options(options);

    if let Some(permissions) = permissions {
        event = event.with_member_permissions(permissions);
    }

    if let Some(guild_id) = guild_id {
        event = event.with_guild(Arc::new(SerenityGuild::new(http, guild_id, bot_user_id)));
    }

    event
}

/// Extracts the top-level option values of a command interaction.
pub fn supplied_options(command: &CommandInteraction) -> Vec<SuppliedOption> {
    command
        .data
        .options
        .iter()
        .map(|option| SuppliedOption {
            name: option.name.clone(),
            value: option_value(&option.value),
        })
        .collect()
}

fn option_value(value: &CommandDataOptionValue) -> OptionValue {
    match value {
        CommandDataOptionValue::String(value) => OptionValue::String(value.clone()),
        CommandDataOptionValue::Integer(value) => OptionValue::Integer(*value),
        CommandDataOptionValue::Number(value) => OptionValue::Number(*value),
        CommandDataOptionValue::Boolean(value) => OptionValue::Boolean(*value),
        CommandDataOptionValue::User(id) => OptionValue::Id(id.get()),
        CommandDataOptionValue::Channel(id) => OptionValue::Id(id.get()),
        CommandDataOptionValue::Role(id) => OptionValue::Id(id.get()),
        CommandDataOptionValue::Mentionable(id) => OptionValue::Id(id.get()),
        _ => OptionValue::Unsupported,
    }
}
