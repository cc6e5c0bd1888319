//! Slash command definitions and the registry that indexes them.
//!
//! A `CommandDefinition` pairs the data Discord needs to show a command
//! (name, description, typed options) with the handler that executes it.
//! The full set of definitions is assembled by `all()` at startup and
//! loaded into a `CommandRegistry`, which is read-only from then on.

pub mod registry;
pub mod setup;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod test;

use std::fmt;
use std::sync::Arc;

use serenity::async_trait;

use crate::config::SetupSettings;
use crate::error::command::{CommandError, LoadError};
use crate::interaction::InteractionEvent;
use crate::model::command::{CommandDescriptor, CommandOption};

pub use registry::CommandRegistry;

/// Discord's limits for application commands.
const MAX_NAME_LEN: usize = 32;
const MAX_DESCRIPTION_LEN: usize = 100;
const MAX_OPTIONS: usize = 25;

/// Executes a command against one interaction.
///
/// Handlers may perform any number of Discord calls through the
/// interaction's capabilities and reply at most once. Returning an error
/// lets the dispatcher answer with the generic error reply.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, interaction: &InteractionEvent) -> Result<(), CommandError>;
}

/// A slash command: its Discord-facing description and its handler.
#[derive(Clone)]
pub struct CommandDefinition {
    name: String,
    description: String,
    options: Vec<CommandOption>,
    handler: Arc<dyn CommandHandler>,
}

impl CommandDefinition {
    pub fn new(name: &str, description: &str, handler: impl CommandHandler + 'static) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            options: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[cfg(test)]
    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    /// Protocol-level description used for bulk registration.
    pub fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor {
            name: self.name.clone(),
            description: self.description.clone(),
            options: self.options.clone(),
        }
    }

    pub async fn execute(&self, interaction: &InteractionEvent) -> Result<(), CommandError> {
        self.handler.execute(interaction).await
    }

    /// Checks the definition against Discord's application command rules.
    pub fn validate(&self) -> Result<(), LoadError> {
        validate_name(&self.name)?;
        validate_description(&self.name, &self.description)?;

        if self.options.len() > MAX_OPTIONS {
            return Err(LoadError::TooManyOptions {
                command: self.name.clone(),
                count: self.options.len(),
            });
        }

        let mut seen_optional = false;
        for (position, option) in self.options.iter().enumerate() {
            validate_name(&option.name)?;
            validate_description(&option.name, &option.description)?;

            if self.options[..position]
                .iter()
                .any(|earlier| earlier.name == option.name)
            {
                return Err(LoadError::DuplicateOption {
                    command: self.name.clone(),
                    option: option.name.clone(),
                });
            }

            if option.required && seen_optional {
                return Err(LoadError::RequiredOptionAfterOptional {
                    command: self.name.clone(),
                    option: option.name.clone(),
                });
            }
            seen_optional |= !option.required;
        }

        Ok(())
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn validate_name(name: &str) -> Result<(), LoadError> {
    let length = name.chars().count();
    let valid_chars = name
        .chars()
        .all(|c| c == '-' || c == '_' || (c.is_alphanumeric() && !c.is_uppercase()));

    if length == 0 || length > MAX_NAME_LEN || !valid_chars {
        return Err(LoadError::InvalidName(name.to_string()));
    }

    Ok(())
}

fn validate_description(owner: &str, description: &str) -> Result<(), LoadError> {
    let length = description.chars().count();

    if length == 0 || length > MAX_DESCRIPTION_LEN {
        return Err(LoadError::InvalidDescription(owner.to_string()));
    }

    Ok(())
}

/// Every command this bot serves, in registration order.
pub fn all(settings: &SetupSettings) -> Vec<CommandDefinition> {
    vec![setup::definition(settings.clone())]
}
