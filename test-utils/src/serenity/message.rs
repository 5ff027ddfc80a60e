//! Test factories for creating Serenity Message objects.
//!
//! Messages are built from JSON mirroring Discord's message payload. Fields the bot
//! does not read are filled with empty defaults.

use serenity::all::{Attachment, Message, MessageReaction, ReactionType, User};

use super::user::user_json;

const TEST_TIMESTAMP: &str = "2024-01-01T00:00:00.000000+00:00";

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `guild_id` - Guild of the channel, `None` for direct messages
/// - `author` - Message author (id, name and bot flag are carried over)
/// - `content` - Message text
///
/// # Returns
/// - `Message` - A valid Serenity Message without reactions, attachments or embeds
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author: User,
    content: &str,
) -> Message {
    serde_json::from_value(message_json(
        message_id,
        channel_id,
        guild_id,
        user_json(author.id.get(), &author.name, author.bot),
        content,
        serde_json::json!([]),
    ))
    .expect("Failed to create test message - invalid JSON structure")
}

/// Creates a message as posted by the bot into the pin channel.
///
/// The message carries a single embed whose URL is `embed_url`, which is what the
/// pin dedup scan inspects.
///
/// # Arguments
/// - `message_id` - Discord message ID of the summary message
/// - `channel_id` - Pin channel ID
/// - `embed_url` - URL of the summary embed
pub fn create_test_pin_summary(message_id: u64, channel_id: u64, embed_url: &str) -> Message {
    serde_json::from_value(message_json(
        message_id,
        channel_id,
        None,
        user_json(1, "reaction-bot", true),
        "",
        serde_json::json!([{ "type": "rich", "url": embed_url }]),
    ))
    .expect("Failed to create test pin summary - invalid JSON structure")
}

/// Creates the reaction count entry of a message for one emoji.
///
/// # Arguments
/// - `emoji` - Emoji the count applies to
/// - `count` - Number of users who reacted
pub fn create_test_reaction(emoji: &ReactionType, count: u64) -> MessageReaction {
    let emoji = serde_json::to_value(emoji).expect("Failed to serialize test emoji");

    serde_json::from_value(serde_json::json!({
        "count": count,
        "count_details": { "burst": 0, "normal": count },
        "me": false,
        "me_burst": false,
        "burst_colors": [],
        "emoji": emoji,
    }))
    .expect("Failed to create test reaction - invalid JSON structure")
}

/// Creates a message attachment.
///
/// # Arguments
/// - `attachment_id` - Discord attachment ID
/// - `url` - CDN URL of the attachment
pub fn create_test_attachment(attachment_id: u64, url: &str) -> Attachment {
    serde_json::from_value(serde_json::json!({
        "id": attachment_id.to_string(),
        "filename": "attachment.png",
        "size": 1024,
        "url": url,
        "proxy_url": url,
        "content_type": "image/png",
    }))
    .expect("Failed to create test attachment - invalid JSON structure")
}

fn message_json(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author: serde_json::Value,
    content: &str,
    embeds: serde_json::Value,
) -> serde_json::Value {
    serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": author,
        "content": content,
        "timestamp": TEST_TIMESTAMP,
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": embeds,
        "reactions": [],
        "pinned": false,
        "type": 0,
    })
}
