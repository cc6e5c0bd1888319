//! Plain data types shared between commands, the dispatcher and the Discord
//! adapters.
//!
//! - **command** - option kinds, option declarations, registration descriptors
//!   and option values supplied with an interaction
//! - **channel** - payloads for the guild objects the `setup` command creates
//! - **reply** - interaction replies

pub mod channel;
pub mod command;
pub mod reply;
