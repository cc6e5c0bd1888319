use thiserror::Error;

/// Errors raised while building the command registry at startup.
///
/// Any of these aborts the process; a bot that cannot describe its own
/// commands to Discord has nothing useful to do.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// Two command definitions share the same name.
    ///
    /// Names are the lookup key for incoming interactions, so a duplicate
    /// would make one of the two handlers unreachable.
    #[error("Command '{0}' is defined more than once")]
    DuplicateCommand(String),

    /// Command or option name does not satisfy Discord's naming rules.
    #[error("Invalid name '{0}': expected 1-32 lowercase letters, digits, '-' or '_'")]
    InvalidName(String),

    /// Description is empty or longer than Discord allows.
    #[error("Invalid description for '{0}': expected 1-100 characters")]
    InvalidDescription(String),

    /// Command declares more options than Discord allows.
    #[error("Command '{command}' declares {count} options, the limit is 25")]
    TooManyOptions {
        /// Command name
        command: String,
        /// Number of declared options
        count: usize,
    },

    /// Two options of the same command share a name.
    #[error("Command '{command}' declares option '{option}' more than once")]
    DuplicateOption {
        /// Command name
        command: String,
        /// Duplicated option name
        option: String,
    },

    /// A required option is declared after an optional one.
    #[error("Command '{command}' declares required option '{option}' after an optional one")]
    RequiredOptionAfterOptional {
        /// Command name
        command: String,
        /// The misplaced required option
        option: String,
    },
}

/// Errors raised by a command handler while processing one interaction.
///
/// The dispatcher logs these and answers the user with a generic ephemeral
/// message; the details never reach Discord.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A required option was not supplied or had the wrong type.
    #[error("Missing required option '{0}'")]
    MissingOption(String),

    /// The command was invoked outside of a guild (e.g. in a DM).
    #[error("Command can only be used inside a guild")]
    NotInGuild,

    /// The interaction has already been answered.
    ///
    /// Discord accepts a single initial response per interaction.
    #[error("Interaction has already been replied to")]
    AlreadyReplied,

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::Discord(Box::new(err))
    }
}
