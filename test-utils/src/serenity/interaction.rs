//! Test factory for creating Serenity CommandInteraction objects.

use serenity::all::CommandInteraction;

/// Snowflake of the user invoking every test interaction.
pub const TEST_USER_ID: u64 = 200000000000000000;

/// Creates a test slash command interaction.
///
/// Guild interactions carry a `member` with resolved permissions, like
/// Discord sends them; interactions without a guild carry only a `user`.
///
/// # Arguments
/// - `name` - Command name
/// - `guild_id` - Guild the command was invoked in, `None` for a DM
/// - `permissions` - Invoking member's permission bits (ignored without a guild)
/// - `options` - JSON array of `{ "name", "type", "value" }` option objects
///
/// # Returns
/// - `CommandInteraction` - A valid Serenity interaction for testing
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::interaction::create_test_command_interaction;
///
/// let command = create_test_command_interaction(
///     "setup",
///     Some(123456789),
///     0x8,
///     serde_json::json!([{ "name": "channel_one", "type": 3, "value": "art" }]),
/// );
/// assert_eq!(command.data.name, "setup");
/// ```
pub fn create_test_command_interaction(
    name: &str,
    guild_id: Option<u64>,
    permissions: u64,
    options: serde_json::Value,
) -> CommandInteraction {
    let user = serde_json::json!({
        "id": TEST_USER_ID.to_string(),
        "username": "tester",
        "discriminator": "0",
        "global_name": "Tester",
        "avatar": null,
        "public_flags": 0,
    });

    let mut interaction = serde_json::json!({
        "id": "300000000000000000",
        "application_id": "400000000000000000",
        "type": 2,
        "data": {
            "id": "500000000000000000",
            "name": name,
            "type": 1,
            "options": options,
            "resolved": {},
        },
        "channel_id": "600000000000000000",
        "token": "test-interaction-token",
        "version": 1,
        "app_permissions": "0",
        "locale": "en-US",
        "entitlements": [],
        "authorizing_integration_owners": {},
        "attachment_size_limit": 8388608,
        "user": user,
    });

    if let Some(guild_id) = guild_id {
        interaction["guild_id"] = serde_json::json!(guild_id.to_string());
        interaction["guild_locale"] = serde_json::json!("en-US");
        interaction["member"] = serde_json::json!({
            "user": user,
            "guild_id": guild_id.to_string(),
            "nick": null,
            "avatar": null,
            "roles": [],
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
            "permissions": permissions.to_string(),
        });
    }

    serde_json::from_value(interaction)
        .expect("Failed to create test command interaction - invalid JSON structure")
}
