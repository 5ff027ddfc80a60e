//! Bot configuration loaded once at startup.
//!
//! The configuration lives in a JSON file (`config.json` by default, overridable with
//! the `CONFIG_PATH` environment variable). The bot token may also be provided through
//! `DISCORD_BOT_TOKEN`, which takes precedence over the file so the secret can stay
//! out of the file in deployments.

use serde::Deserialize;
use serenity::all::{ChannelId, MessageId, ReactionType};
use std::path::{Path, PathBuf};

use crate::{
    error::{config::ConfigError, AppError},
    util::emoji::parse_emoji,
};

const DEFAULT_CONFIG_PATH: &str = "config.json";
const DEFAULT_PIN_HISTORY: u8 = 20;
/// Discord returns at most 100 messages per history request.
const MAX_PIN_HISTORY: u8 = 100;

/// Config file layout as written by operators.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    token: String,
    pin_channel: u64,
    pin_emoji: String,
    pin_amount: u64,
    #[serde(default)]
    roles: Vec<u64>,
    #[serde(default)]
    role_channel: Option<u64>,
    #[serde(default)]
    pin_history: Option<u8>,
}

/// Validated, immutable bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,

    /// Channel receiving pin summaries.
    pub pin_channel: ChannelId,
    pub pin_emoji: ReactionType,
    /// Minimum reaction count with `pin_emoji` before a message is pinned.
    pub pin_amount: u64,
    /// Number of recent pin channel messages scanned for an existing summary.
    pub pin_history_limit: u8,

    /// Messages acting as role-assignment menus.
    pub role_messages: Vec<MessageId>,
    /// Channel holding the role messages, used to seed their reactions on startup.
    pub role_channel: Option<ChannelId>,
}

impl Config {
    /// Loads the configuration from the file named by `CONFIG_PATH` (or `config.json`).
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed and validated configuration
    /// - `Err(AppError::ConfigErr)` - File missing, malformed, or holding invalid values
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file(&path)?;

        if let Ok(token) = std::env::var("DISCORD_BOT_TOKEN") {
            if !token.trim().is_empty() {
                config.token = token;
            }
        }

        Ok(config)
    }

    /// Reads and validates a config file.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON config file
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed and validated configuration
    /// - `Err(ConfigError::ReadFile)` - File could not be read
    /// - `Err(ConfigError::Parse)` - File is not valid config JSON
    /// - `Err(ConfigError::InvalidEmoji | InvalidValue)` - Values failed validation
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::try_from(file)
    }

    /// Parses and validates config JSON held in memory.
    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source: e,
        })?;

        Self::try_from(file)
    }

    /// Returns true when the message is configured as a role-assignment message.
    pub fn is_role_message(&self, message_id: MessageId) -> bool {
        self.role_messages.contains(&message_id)
    }
}

impl TryFrom<ConfigFile> for Config {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let pin_emoji =
            parse_emoji(&file.pin_emoji).ok_or(ConfigError::InvalidEmoji(file.pin_emoji))?;

        if file.pin_amount == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pinAmount",
                reason: "must be at least 1".to_string(),
            });
        }

        let pin_history_limit = file
            .pin_history
            .unwrap_or(DEFAULT_PIN_HISTORY)
            .clamp(1, MAX_PIN_HISTORY);

        Ok(Self {
            token: file.token,
            pin_channel: ChannelId::new(snowflake("pinChannel", file.pin_channel)?),
            pin_emoji,
            pin_amount: file.pin_amount,
            pin_history_limit,
            role_messages: file
                .roles
                .into_iter()
                .map(|id| snowflake("roles", id).map(MessageId::new))
                .collect::<Result<_, _>>()?,
            role_channel: file
                .role_channel
                .map(|id| snowflake("roleChannel", id).map(ChannelId::new))
                .transpose()?,
        })
    }
}

/// Rejects zero ids, which Serenity's id types cannot represent.
fn snowflake(field: &'static str, id: u64) -> Result<u64, ConfigError> {
    if id == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "Discord ids cannot be 0".to_string(),
        });
    }

    Ok(id)
}
