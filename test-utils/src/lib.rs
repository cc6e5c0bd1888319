//! Guild Setup Bot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. Discord model
//! objects are built by deserializing JSON shaped like Discord's API
//! responses, so the tests exercise the same serenity types the bot receives
//! at runtime.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_command_interaction, create_test_role};
//!
//! #[test]
//! fn test_option_extraction() {
//!     let command = create_test_command_interaction(
//!         "setup",
//!         Some(123456789),
//!         0x8,
//!         serde_json::json!([{ "name": "category_name", "type": 3, "value": "Projects" }]),
//!     );
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
