//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return, with sensible defaults for
//! every field the tests don't care about.
//!
//! # Available Factories
//!
//! - `interaction::create_test_command_interaction` - Create slash command interactions
//! - `role::create_test_role` - Create Serenity Role objects

pub mod interaction;
pub mod role;

// Re-export commonly used functions for convenience
pub use interaction::create_test_command_interaction;
pub use role::create_test_role;
