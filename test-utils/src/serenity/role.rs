//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role.
///
/// The role is not hoisted, managed or mentionable and grants no
/// permissions, like a freshly created role in a guild.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name, matched exactly by the bot's role lookup
/// - `color` - Role color as `0xRRGGBB`
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let roles = vec![
///     create_test_role(1, "@everyone", 0, 0),
///     create_test_role(2, "Bot", 0x3498DB, 1),
/// ];
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
        "flags": 0,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the factory output deserializes with both colour fields.
    ///
    /// Expected: the primary gradient colour mirrors the legacy colour
    #[test]
    fn role_carries_primary_colour() {
        let role = create_test_role(2, "Bot", 0x3498DB, 1);

        assert_eq!(role.colour.0, 0x3498DB);
        assert_eq!(role.colours.primary_colour.0, 0x3498DB);
        assert!(role.colours.secondary_colour.is_none());
    }
}
