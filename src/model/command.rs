use serde::{Serialize, Serializer};
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

/// Type of a slash command option, as understood by Discord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Number,
}

impl OptionKind {
    /// Numeric option type used in Discord's application command payloads.
    pub fn value(self) -> u8 {
        match self {
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
            Self::Number => 10,
        }
    }
}

impl Serialize for OptionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl From<OptionKind> for CommandOptionType {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::String => CommandOptionType::String,
            OptionKind::Integer => CommandOptionType::Integer,
            OptionKind::Boolean => CommandOptionType::Boolean,
            OptionKind::User => CommandOptionType::User,
            OptionKind::Channel => CommandOptionType::Channel,
            OptionKind::Role => CommandOptionType::Role,
            OptionKind::Number => CommandOptionType::Number,
        }
    }
}

/// A typed option declared by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl CommandOption {
    /// Declares a required string option.
    pub fn required_string(name: &str, description: &str) -> Self {
        Self {
            kind: OptionKind::String,
            name: name.to_string(),
            description: description.to_string(),
            required: true,
        }
    }
}

/// Protocol-level description of a command, sent to Discord during bulk
/// registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
}

impl From<&CommandDescriptor> for CreateCommand {
    fn from(descriptor: &CommandDescriptor) -> Self {
        descriptor.options.iter().fold(
            CreateCommand::new(&descriptor.name).description(&descriptor.description),
            |command, option| {
                command.add_option(
                    CreateCommandOption::new(
                        option.kind.into(),
                        &option.name,
                        &option.description,
                    )
                    .required(option.required),
                )
            },
        )
    }
}

/// Value supplied for an option when a command is invoked.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    /// User, channel, role or mentionable snowflake
    Id(u64),
    /// Subcommands, attachments and anything else this bot doesn't consume
    Unsupported,
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

/// An option value together with the name it was supplied under.
#[derive(Debug, Clone, PartialEq)]
pub struct SuppliedOption {
    pub name: String,
    pub value: OptionValue,
}

#[cfg(test)]
impl SuppliedOption {
    pub fn string(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: OptionValue::String(value.to_string()),
        }
    }
}
