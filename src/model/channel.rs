use serenity::all::{
    ChannelId, GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId,
};

/// Role to create in a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub colour: u32,
    /// Audit log reason
    pub reason: String,
}

/// Forum channel to create under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewForumChannel {
    pub name: String,
    pub category: ChannelId,
    pub permissions: Vec<PermissionOverwrite>,
    /// Unicode emoji on the add-reaction button of every post
    pub reaction_emoji: String,
    /// Slowmode in seconds
    pub slowmode: u16,
}

impl NewForumChannel {
    pub fn new(name: &str, category: ChannelId) -> Self {
        Self {
            name: name.to_string(),
            category,
            permissions: Vec::new(),
            reaction_emoji: String::new(),
            slowmode: 0,
        }
    }

    pub fn allow_role(mut self, role_id: RoleId, allow: Permissions) -> Self {
        self.permissions.push(PermissionOverwrite {
            allow,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(role_id),
        });
        self
    }

    pub fn deny_role(mut self, role_id: RoleId, deny: Permissions) -> Self {
        self.permissions.push(PermissionOverwrite {
            allow: Permissions::empty(),
            deny,
            kind: PermissionOverwriteType::Role(role_id),
        });
        self
    }

    /// Denies `deny` to the guild's `@everyone` role, which shares the guild's id.
    pub fn deny_everyone(self, guild_id: GuildId, deny: Permissions) -> Self {
        self.deny_role(guild_id.everyone_role(), deny)
    }

    pub fn reaction_emoji(mut self, emoji: &str) -> Self {
        self.reaction_emoji = emoji.to_string();
        self
    }

    pub fn slowmode(mut self, seconds: u16) -> Self {
        self.slowmode = seconds;
        self
    }
}
