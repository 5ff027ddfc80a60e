//! Reaction roles.
//!
//! Role-assignment messages are written by guild moderators, one option per line:
//!
//! ```text
//! 🎮 <@&1002206034640769100> Gamers
//! 🎨 <@&1002206034640769101> Artists
//! ```
//!
//! Reacting with an emoji grants every role mentioned on the lines containing that
//! emoji, and removing the reaction revokes them again. Messages are parsed on every
//! event so edits take effect immediately.

use dioxus_logger::tracing;
use regex::Regex;
use serenity::all::{ChannelId, MessageId, ReactionType, RoleId};
use std::sync::LazyLock;

use crate::{
    config::Config,
    error::AppError,
    model::{
        reaction::{ReactionAction, ReactionEvent, SkipReason},
        role::RoleOutcome,
    },
    service::{discord::DiscordApi, reacting_user_is_bot},
    util::{
        emoji::{emoji_name, parse_emoji},
        parse::parse_u64_from_str,
    },
};

static ROLE_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<@&(\d+)>").expect("role mention pattern is valid")
});

/// Service toggling member roles from reactions on role-assignment messages.
pub struct RoleToggleService<'a> {
    api: &'a dyn DiscordApi,
    config: &'a Config,
}

impl<'a> RoleToggleService<'a> {
    /// Creates a new RoleToggleService instance.
    ///
    /// # Arguments
    /// - `api` - Discord API used to fetch messages and change member roles
    /// - `config` - Bot configuration holding the role-assignment message ids
    pub fn new(api: &'a dyn DiscordApi, config: &'a Config) -> Self {
        Self { api, config }
    }

    /// Grants or revokes the roles bound to the reacted emoji.
    ///
    /// # Arguments
    /// - `event` - The reaction that was added or removed
    /// - `action` - `Added` grants the matching roles, `Removed` revokes them
    ///
    /// # Returns
    /// - `Ok(RoleOutcome::Skipped)` - Not a guild event, not a role message, or a bot
    /// - `Ok(RoleOutcome::Applied)` - Roles that were granted or revoked
    /// - `Err(AppError::InternalErr)` - A role mention could not be parsed
    /// - `Err(AppError::DiscordErr)` - A Discord API call failed
    pub async fn handle_reaction(
        &self,
        event: &ReactionEvent,
        action: ReactionAction,
    ) -> Result<RoleOutcome, AppError> {
        let Some(guild_id) = event.guild_id else {
            return Ok(RoleOutcome::Skipped(SkipReason::NotGuild));
        };

        if !self.config.is_role_message(event.message_id) {
            return Ok(RoleOutcome::Skipped(SkipReason::NotRoleMessage));
        }

        let Some(user_id) = event.user_id else {
            return Ok(RoleOutcome::Skipped(SkipReason::BotUser));
        };

        if reacting_user_is_bot(self.api, event).await? {
            return Ok(RoleOutcome::Skipped(SkipReason::BotUser));
        }

        let message = self
            .api
            .get_message(event.channel_id, event.message_id)
            .await?;

        let role_ids = parse_role_lines(&message.content, &event.emoji)?;

        for role_id in &role_ids {
            match action {
                ReactionAction::Added => {
                    self.api
                        .add_member_role(guild_id, user_id, *role_id)
                        .await?;
                    tracing::info!(
                        "Granted role {} to user {} in guild {}",
                        role_id,
                        user_id,
                        guild_id
                    );
                }
                ReactionAction::Removed => {
                    self.api
                        .remove_member_role(guild_id, user_id, *role_id)
                        .await?;
                    tracing::info!(
                        "Revoked role {} from user {} in guild {}",
                        role_id,
                        user_id,
                        guild_id
                    );
                }
            }
        }

        Ok(RoleOutcome::Applied(role_ids))
    }

    /// Adds the option emoji of every configured role message as bot reactions.
    ///
    /// Each role line's option emoji is added, so members only have to click the
    /// existing reactions. Failures are logged per emoji and per message and do not
    /// stop the remaining reactions from being seeded.
    ///
    /// # Arguments
    /// - `channel_id` - Channel holding the role-assignment messages
    ///
    /// # Returns
    /// - Number of reactions successfully added across all messages
    pub async fn seed_reactions(&self, channel_id: ChannelId) -> usize {
        let mut added = 0;

        for message_id in &self.config.role_messages {
            match self.seed_message(channel_id, *message_id).await {
                Ok(count) => added += count,
                Err(e) => {
                    tracing::error!(
                        "Failed to seed reactions on role message {}: {}",
                        message_id,
                        e
                    );
                }
            }
        }

        added
    }

    async fn seed_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<usize, AppError> {
        let message = self.api.get_message(channel_id, message_id).await?;
        let mut added = 0;

        for emoji in option_emojis(&message.content) {
            match self.api.add_reaction(channel_id, message_id, &emoji).await {
                Ok(()) => added += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to add reaction {} to role message {}: {}",
                        emoji,
                        message_id,
                        e
                    );
                }
            }
        }

        tracing::debug!("Seeded {} reactions on role message {}", added, message_id);

        Ok(added)
    }
}

/// Collects the roles bound to an emoji in a role-assignment message.
///
/// A line binds its first `<@&id>` mention to the emoji when the line contains the
/// emoji (or, for custom emoji, its name). Lines without a mention are ignored.
///
/// # Arguments
/// - `content` - Text of the role-assignment message
/// - `emoji` - The reacted emoji
///
/// # Returns
/// - `Ok(Vec<RoleId>)` - Role ids in line order, possibly empty
/// - `Err(AppError::InternalErr)` - A mention's digits do not fit into a u64
pub fn parse_role_lines(content: &str, emoji: &ReactionType) -> Result<Vec<RoleId>, AppError> {
    let Some(name) = emoji_name(emoji) else {
        return Ok(Vec::new());
    };

    let mut role_ids = Vec::new();

    for line in content.lines().filter(|line| line.contains(name)) {
        let Some(captures) = ROLE_MENTION.captures(line) else {
            continue;
        };

        let id = parse_u64_from_str(&captures[1])?;
        if id != 0 {
            role_ids.push(RoleId::new(id));
        }
    }

    Ok(role_ids)
}

/// Returns the option emoji of each role line, in line order.
///
/// The option emoji is the first emoji word in front of the line's role mention, so
/// bullets such as `•` or `-` before it are skipped. Lines without a mention have none.
fn option_emojis(content: &str) -> Vec<ReactionType> {
    content
        .lines()
        .filter_map(|line| {
            let mention = ROLE_MENTION.find(line)?;
            line[..mention.start()]
                .split_whitespace()
                .find_map(parse_emoji)
        })
        .collect()
}
