use std::sync::atomic::Ordering;
use std::sync::Arc;

use serenity::all::{ChannelId, ForumLayoutType, GuildId, Permissions, RoleId};

use crate::command::{
    mock::{counting_command, Behaviour},
    setup, CommandDefinition, CommandRegistry,
};
use crate::config::SetupSettings;
use crate::discord::mock::{GuildCall, MockGuild, MockResponder};
use crate::error::command::{CommandError, LoadError};
use crate::interaction::InteractionEvent;
use crate::model::{
    channel::{NewForumChannel, NewRole},
    command::{CommandOption, OptionKind, SuppliedOption},
    reply::InteractionReply,
};

mod definition;
