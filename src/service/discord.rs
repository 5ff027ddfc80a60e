//! Discord API access for the service layer.
//!
//! Services depend on the `DiscordApi` trait rather than on Serenity's `Http` client
//! directly, which keeps the reaction logic testable without a gateway connection.
//! `SerenityDiscordApi` is the production implementation backed by the bot's shared
//! HTTP client.

use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateMessage, GetMessages, GuildId, Message, MessageId,
        ReactionType, RoleId, User, UserId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::error::AppError;

/// Audit log reason attached to role changes made by the bot.
const ROLE_AUDIT_REASON: &str = "Reaction role";

/// Remote Discord operations used by the reaction handlers.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Fetches a user by id.
    async fn get_user(&self, user_id: UserId) -> Result<User, AppError>;

    /// Fetches a single message from a channel.
    async fn get_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, AppError>;

    /// Fetches up to `limit` of the most recent messages in a channel, newest first.
    async fn get_recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<Message>, AppError>;

    /// Sends a message consisting of a single embed.
    async fn send_embed(&self, channel_id: ChannelId, embed: CreateEmbed) -> Result<(), AppError>;

    /// Adds a reaction from the bot to a message.
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), AppError>;

    /// Grants a role to a guild member.
    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// Revokes a role from a guild member.
    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;
}

/// `DiscordApi` implementation using Serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityDiscordApi {
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    /// Creates a new API wrapper around the bot's HTTP client.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client shared with the gateway client
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn get_user(&self, user_id: UserId) -> Result<User, AppError> {
        Ok(self.http.get_user(user_id).await?)
    }

    async fn get_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, AppError> {
        Ok(self.http.get_message(channel_id, message_id).await?)
    }

    async fn get_recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<Message>, AppError> {
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages)
    }

    async fn send_embed(&self, channel_id: ChannelId, embed: CreateEmbed) -> Result<(), AppError> {
        channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), AppError> {
        self.http
            .create_reaction(channel_id, message_id, emoji)
            .await?;

        Ok(())
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(ROLE_AUDIT_REASON))
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, Some(ROLE_AUDIT_REASON))
            .await?;

        Ok(())
    }
}
