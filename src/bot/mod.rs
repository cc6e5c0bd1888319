//! Discord gateway integration.
//!
//! The bot connects to Discord's gateway, registers its slash commands once
//! the session is ready, and routes every command interaction through the
//! `Dispatcher`. Serenity delivers each event on its own task, so two
//! interactions arriving together are handled concurrently; the only state
//! they share is the read-only command registry.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Interactions are delivered regardless of
//! intents, and the `setup` command reads roles and members over HTTP.

pub mod dispatcher;
pub mod handler;
pub mod start;

#[cfg(test)]
mod test;

pub use dispatcher::Dispatcher;
