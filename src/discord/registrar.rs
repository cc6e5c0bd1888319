use std::sync::Arc;

use serenity::all::{Command, CreateCommand, Http};
use serenity::async_trait;

use super::CommandRegistrar;
use crate::error::AppError;
use crate::model::command::CommandDescriptor;

/// Registers global application commands through Discord's HTTP API.
///
/// The `Http` client must carry the application id, which the client
/// builder sets from `CLIENT_ID`.
pub struct SerenityRegistrar {
    http: Arc<Http>,
}

impl SerenityRegistrar {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandRegistrar for SerenityRegistrar {
    async fn overwrite_commands(&self, commands: &[CommandDescriptor]) -> Result<usize, AppError> {
        let builders: Vec<CreateCommand> = commands.iter().map(CreateCommand::from).collect();

        // PUT semantics: anything not in `builders` is removed remotely
        let registered = Command::set_global_commands(&self.http, builders).await?;

        Ok(registered.len())
    }
}
