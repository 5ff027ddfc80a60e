//! Pinning of popular messages into the pin channel.
//!
//! When a message collects enough reactions with the configured pin emoji, the bot
//! reposts it as a summary embed in the pin channel. The pin channel history doubles
//! as the record of what has been pinned already: every summary carries a synthetic
//! URL with the source message id, and the most recent summaries are scanned before
//! posting so the same message is never pinned twice.

use dioxus_logger::tracing;
use serenity::all::{Message, MessageId};
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::AppError,
    model::{
        pin::{embed_url_refers_to, PinOutcome, PinSummary},
        reaction::{ReactionEvent, SkipReason},
    },
    service::{discord::DiscordApi, reacting_user_is_bot},
    util::emoji::same_emoji,
};

/// Service deciding whether a reacted message gets pinned and posting its summary.
pub struct PinService<'a> {
    api: &'a dyn DiscordApi,
    config: &'a Config,
    /// Serializes the dedup scan and the summary post across concurrent events.
    pin_lock: &'a Mutex<()>,
}

impl<'a> PinService<'a> {
    /// Creates a new PinService instance.
    ///
    /// # Arguments
    /// - `api` - Discord API used to fetch messages and post summaries
    /// - `config` - Bot configuration holding the pin channel, emoji and threshold
    /// - `pin_lock` - Lock shared by all events, held while checking and posting
    pub fn new(api: &'a dyn DiscordApi, config: &'a Config, pin_lock: &'a Mutex<()>) -> Self {
        Self {
            api,
            config,
            pin_lock,
        }
    }

    /// Pins the reacted message if it reached the reaction threshold.
    ///
    /// Reactions outside of guilds, inside the pin channel, or from bots are ignored.
    /// Otherwise the message is fetched and its reaction count for the pin emoji is
    /// compared against the configured threshold. Messages that already have a
    /// summary among the recent pin channel messages are not posted again.
    ///
    /// # Arguments
    /// - `event` - The reaction that was added
    ///
    /// # Returns
    /// - `Ok(PinOutcome::Skipped)` - Event filtered out before fetching the message
    /// - `Ok(PinOutcome::BelowThreshold)` - Not enough pin reactions yet
    /// - `Ok(PinOutcome::AlreadyPinned)` - A summary already exists
    /// - `Ok(PinOutcome::Pinned)` - Summary posted to the pin channel
    /// - `Err(AppError::DiscordErr)` - A Discord API call failed
    pub async fn handle_reaction(&self, event: &ReactionEvent) -> Result<PinOutcome, AppError> {
        if event.guild_id.is_none() {
            return Ok(PinOutcome::Skipped(SkipReason::NotGuild));
        }

        if event.channel_id == self.config.pin_channel {
            return Ok(PinOutcome::Skipped(SkipReason::PinChannel));
        }

        if reacting_user_is_bot(self.api, event).await? {
            return Ok(PinOutcome::Skipped(SkipReason::BotUser));
        }

        let message = self
            .api
            .get_message(event.channel_id, event.message_id)
            .await?;

        let count = self.pin_reaction_count(&message);
        if count < self.config.pin_amount {
            return Ok(PinOutcome::BelowThreshold { count });
        }

        let _guard = self.pin_lock.lock().await;

        if self.is_already_pinned(message.id).await? {
            tracing::debug!("Message {} is already pinned", message.id);
            return Ok(PinOutcome::AlreadyPinned);
        }

        let embed = PinSummary::from_message(&message).into_embed();
        self.api.send_embed(self.config.pin_channel, embed).await?;

        tracing::info!(
            "Pinned message {} from channel {} with {} reactions",
            message.id,
            message.channel_id,
            count
        );

        Ok(PinOutcome::Pinned)
    }

    /// Returns how many reactions with the pin emoji the message has.
    fn pin_reaction_count(&self, message: &Message) -> u64 {
        message
            .reactions
            .iter()
            .find(|reaction| same_emoji(&reaction.reaction_type, &self.config.pin_emoji))
            .map(|reaction| reaction.count)
            .unwrap_or(0)
    }

    /// Scans the recent pin channel history for a summary of the given message.
    async fn is_already_pinned(&self, message_id: MessageId) -> Result<bool, AppError> {
        let recent = self
            .api
            .get_recent_messages(self.config.pin_channel, self.config.pin_history_limit)
            .await?;

        let pinned = recent.iter().any(|message| {
            message
                .embeds
                .first()
                .and_then(|embed| embed.url.as_deref())
                .is_some_and(|url| embed_url_refers_to(url, message_id))
        });

        Ok(pinned)
    }
}
