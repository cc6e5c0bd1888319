//! Recording test doubles for the Discord capabilities.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serenity::all::{ChannelId, ForumLayoutType, GuildId, RoleId};
use serenity::async_trait;

use super::{CommandRegistrar, GuildApi, Responder};
use crate::error::{command::CommandError, AppError};
use crate::model::{
    channel::{NewForumChannel, NewRole},
    command::CommandDescriptor,
    reply::InteractionReply,
};

fn simulated_failure() -> serenity::Error {
    serenity::Error::Other("simulated Discord failure")
}

#[derive(Default)]
pub struct MockResponder {
    replies: Mutex<Vec<InteractionReply>>,
    deferrals: AtomicU64,
    edits: AtomicU64,
    fail: bool,
}

impl MockResponder {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Replies sent directly or as an edit of a deferred response.
    pub fn replies(&self) -> Vec<InteractionReply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn deferrals(&self) -> u64 {
        self.deferrals.load(Ordering::SeqCst)
    }

    /// How many of `replies` edited a deferred response.
    pub fn edits(&self) -> u64 {
        self.edits.load(Ordering::SeqCst)
    }

    fn respond(&self, reply: &InteractionReply) -> Result<(), CommandError> {
        if self.fail {
            return Err(simulated_failure().into());
        }
        self.replies.lock().unwrap().push(reply.clone());
        Ok(())
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn send(&self, reply: &InteractionReply) -> Result<(), CommandError> {
        self.respond(reply)
    }

    async fn defer(&self) -> Result<(), CommandError> {
        if self.fail {
            return Err(simulated_failure().into());
        }
        self.deferrals.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn edit(&self, reply: &InteractionReply) -> Result<(), CommandError> {
        self.respond(reply)?;
        self.edits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockRegistrar {
    calls: Mutex<Vec<Vec<CommandDescriptor>>>,
    fail: bool,
}

impl MockRegistrar {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<Vec<CommandDescriptor>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRegistrar for MockRegistrar {
    async fn overwrite_commands(&self, commands: &[CommandDescriptor]) -> Result<usize, AppError> {
        self.calls.lock().unwrap().push(commands.to_vec());
        if self.fail {
            return Err(simulated_failure().into());
        }
        Ok(commands.len())
    }
}

/// A call made against `MockGuild`, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuildCall {
    FindRole(String),
    CreateRole(NewRole),
    BotHasRole(RoleId),
    AddBotRole(RoleId),
    CreateCategory(String),
    CreateForum(NewForumChannel),
    SetForumLayout(ChannelId, ForumLayoutType),
}

pub struct MockGuild {
    guild_id: GuildId,
    roles: Mutex<Vec<(RoleId, String)>>,
    bot_roles: Mutex<Vec<RoleId>>,
    calls: Mutex<Vec<GuildCall>>,
    next_id: AtomicU64,
    fail_on_forum: bool,
}

impl MockGuild {
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id: GuildId::new(guild_id),
            roles: Mutex::new(Vec::new()),
            bot_roles: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1000),
            fail_on_forum: false,
        }
    }

    pub fn with_role(self, id: u64, name: &str) -> Self {
        self.roles
            .lock()
            .unwrap()
            .push((RoleId::new(id), name.to_string()));
        self
    }

    pub fn with_bot_role(self, id: u64) -> Self {
        self.bot_roles.lock().unwrap().push(RoleId::new(id));
        self
    }

    /// Makes every `create_forum` call fail.
    pub fn failing_forums(mut self) -> Self {
        self.fail_on_forum = true;
        self
    }

    pub fn calls(&self) -> Vec<GuildCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GuildCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl GuildApi for MockGuild {
    fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleId>, CommandError> {
        self.record(GuildCall::FindRole(name.to_string()));
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|(_, role_name)| role_name == name)
            .map(|(id, _)| *id))
    }

    async fn create_role(&self, role: &NewRole) -> Result<RoleId, CommandError> {
        self.record(GuildCall::CreateRole(role.clone()));
        let id = RoleId::new(self.next_id());
        self.roles.lock().unwrap().push((id, role.name.clone()));
        Ok(id)
    }

    async fn bot_has_role(&self, role_id: RoleId) -> Result<bool, CommandError> {
        self.record(GuildCall::BotHasRole(role_id));
        Ok(self.bot_roles.lock().unwrap().contains(&role_id))
    }

    async fn add_bot_role(&self, role_id: RoleId) -> Result<(), CommandError> {
        self.record(GuildCall::AddBotRole(role_id));
        self.bot_roles.lock().unwrap().push(role_id);
        Ok(())
    }

    async fn create_category(&self, name: &str) -> Result<ChannelId, CommandError> {
        self.record(GuildCall::CreateCategory(name.to_string()));
        Ok(ChannelId::new(self.next_id()))
    }

    async fn create_forum(&self, forum: &NewForumChannel) -> Result<ChannelId, CommandError> {
        self.record(GuildCall::CreateForum(forum.clone()));
        if self.fail_on_forum {
            return Err(simulated_failure().into());
        }
        Ok(ChannelId::new(self.next_id()))
    }

    async fn set_forum_layout(
        &self,
        channel_id: ChannelId,
        layout: ForumLayoutType,
    ) -> Result<(), CommandError> {
        self.record(GuildCall::SetForumLayout(channel_id, layout));
        Ok(())
    }
}
