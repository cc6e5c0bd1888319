use serenity::all::ApplicationId;

use crate::error::{config::ConfigError, AppError};

/// Discord's limit for channel slowmode, in seconds.
const MAX_SLOWMODE_SECONDS: u16 = 21600;

pub struct Config {
    pub discord_bot_token: String,
    pub discord_client_id: ApplicationId,

    pub setup: SetupSettings,
}

/// Tunables for the `setup` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSettings {
    /// Role granted to the bot so it can post in the forums it creates.
    pub bot_role_name: String,
    /// Colour of the bot role, as `0xRRGGBB`.
    pub bot_role_colour: u32,
    /// Per-user slowmode applied to created forums, in seconds.
    pub forum_slowmode: u16,
    /// Unicode emoji used as the forums' default reaction.
    pub forum_reaction_emoji: String,
}

impl Default for SetupSettings {
    fn default() -> Self {
        Self {
            bot_role_name: "Bot".to_string(),
            bot_role_colour: 0x3498DB,
            forum_slowmode: 10,
            forum_reaction_emoji: "🔥".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `var` - Returns the value of the named variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A variable is missing or malformed
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = required(&var, "DISCORD_BOT_TOKEN")?;

        let client_id = required(&var, "CLIENT_ID")?;
        let discord_client_id = match client_id.parse::<u64>() {
            Ok(id) if id != 0 => ApplicationId::new(id),
            _ => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "CLIENT_ID".to_string(),
                    value: client_id,
                    reason: "expected a non-zero application id".to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            discord_bot_token,
            discord_client_id,
            setup: SetupSettings::from_vars(&var)?,
        })
    }
}

impl SetupSettings {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(name) = var("SETUP_BOT_ROLE_NAME") {
            if name.trim().is_empty() {
                return Err(invalid("SETUP_BOT_ROLE_NAME", name, "role name cannot be empty"));
            }
            settings.bot_role_name = name;
        }

        if let Some(colour) = var("SETUP_BOT_ROLE_COLOUR") {
            let hex = colour.trim_start_matches('#');
            settings.bot_role_colour = match u32::from_str_radix(hex, 16) {
                Ok(value) if value <= 0xFFFFFF => value,
                _ => {
                    return Err(invalid(
                        "SETUP_BOT_ROLE_COLOUR",
                        colour,
                        "expected a hex colour such as 3498DB",
                    ))
                }
            };
        }

        if let Some(slowmode) = var("SETUP_FORUM_SLOWMODE") {
            settings.forum_slowmode = match slowmode.parse::<u16>() {
                Ok(value) if value <= MAX_SLOWMODE_SECONDS => value,
                _ => {
                    return Err(invalid(
                        "SETUP_FORUM_SLOWMODE",
                        slowmode,
                        "expected seconds between 0 and 21600",
                    ))
                }
            };
        }

        if let Some(emoji) = var("SETUP_FORUM_REACTION_EMOJI") {
            if emoji.trim().is_empty() {
                return Err(invalid("SETUP_FORUM_REACTION_EMOJI", emoji, "emoji cannot be empty"));
            }
            settings.forum_reaction_emoji = emoji;
        }

        Ok(settings)
    }
}

fn required(var: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, ConfigError> {
    var(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn invalid(name: &str, value: String, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason: reason.to_string(),
    }
}
