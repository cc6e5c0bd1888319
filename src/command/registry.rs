use std::collections::HashMap;

use crate::command::CommandDefinition;
use crate::error::command::LoadError;
use crate::model::command::CommandDescriptor;

/// Commands available to this process, keyed by name.
///
/// Built once at startup and never modified afterwards, so it can be shared
/// between concurrently running handlers without locking.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Validates and indexes every definition from `source`.
    ///
    /// # Arguments
    /// - `source` - Command definitions in the order they should be registered
    ///
    /// # Returns
    /// - `Ok(CommandRegistry)` - All definitions valid with unique names
    /// - `Err(LoadError::DuplicateCommand)` - Two definitions share a name
    /// - `Err(LoadError)` - A definition breaks Discord's command rules
    pub fn load_all(
        source: impl IntoIterator<Item = CommandDefinition>,
    ) -> Result<Self, LoadError> {
        let mut registry = Self::default();

        for definition in source {
            definition.validate()?;

            if registry.index.contains_key(definition.name()) {
                return Err(LoadError::DuplicateCommand(definition.name().to_string()));
            }

            tracing::info!("Loaded command {}", definition.name());

            registry
                .index
                .insert(definition.name().to_string(), registry.commands.len());
            registry.commands.push(definition);
        }

        Ok(registry)
    }

    /// Descriptors for bulk registration, in load order.
    pub fn serialize(&self) -> Vec<CommandDescriptor> {
        self.commands
            .iter()
            .map(CommandDefinition::descriptor)
            .collect()
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandDefinition> {
        self.index.get(name).map(|&position| &self.commands[position])
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
