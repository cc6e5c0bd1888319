/// Text shown to the invoking user when a command handler fails.
///
/// Deliberately generic, error details are only written to the log.
pub const HANDLER_ERROR_MESSAGE: &str = "There was an error while executing this command!";

/// Initial response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionReply {
    pub content: String,
    /// Only visible to the invoking user
    pub ephemeral: bool,
}

impl InteractionReply {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }

    /// The reply sent by the dispatcher when a handler fails.
    pub fn handler_error() -> Self {
        Self::ephemeral(HANDLER_ERROR_MESSAGE)
    }
}
