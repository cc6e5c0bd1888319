//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from the
//! bulk command registration. Errors raised while a single interaction is
//! being handled are `CommandError`s and never leave the dispatcher.

pub mod command;
pub mod config;

use thiserror::Error;

use crate::error::{command::LoadError, config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading environment variables.
    ///
    /// Fatal: the process exits before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A command definition failed validation or collided with another one.
    ///
    /// Fatal: raised while the registry is being built at startup.
    #[error(transparent)]
    LoadErr(#[from] LoadError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Boxes the error to keep `AppError` small, serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
