//! Discord bot integration.
//!
//! This module connects the bot to Discord's gateway and routes gateway events to
//! the service layer. The bot reacts to emoji reactions (pinning popular messages and
//! toggling reaction roles) and answers the `ping` slash command.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel data
//! - `GUILD_MESSAGES` - Receive message data in guilds
//! - `GUILD_MESSAGE_REACTIONS` - Receive reaction add/remove events
//! - `MESSAGE_CONTENT` - Read message content for pin summaries and role lines (privileged intent)
//! - `GUILD_MEMBERS` - Member data for role changes (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` and `GUILD_MEMBERS` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
