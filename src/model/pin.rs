use serenity::all::{CreateEmbed, CreateEmbedAuthor, Message, MessageId, Timestamp};

use crate::model::reaction::SkipReason;

/// Host of the synthetic URL identifying the source message of a pin summary.
///
/// Discord only shows an embed URL when it is a valid link, so the message id is
/// encoded as the path of a made-up URL that the dedup scan can read back.
const PIN_URL_PREFIX: &str = "http://msg.id/";

/// Result of processing a reaction for pinning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinOutcome {
    Skipped(SkipReason),
    /// Message does not have enough matching reactions yet.
    BelowThreshold { count: u64 },
    /// A summary for this message already exists in the pin channel.
    AlreadyPinned,
    Pinned,
}

/// Summary of a message reposted into the pin channel.
#[derive(Debug, Clone)]
pub struct PinSummary {
    pub author_name: String,
    pub author_avatar_url: String,
    /// Link jumping to the original message.
    pub jump_url: String,
    pub content: String,
    /// Synthetic URL encoding the original message id.
    pub source_url: String,
    pub timestamp: Timestamp,
    /// First attachment of the original message, shown as the embed image.
    pub image_url: Option<String>,
}

impl PinSummary {
    /// Builds the summary for a fetched message.
    pub fn from_message(message: &Message) -> Self {
        Self {
            author_name: message.author.name.clone(),
            author_avatar_url: message.author.face(),
            jump_url: message.link(),
            content: message.content.clone(),
            source_url: pin_source_url(message.id),
            timestamp: message.timestamp,
            image_url: message
                .attachments
                .first()
                .map(|attachment| attachment.url.clone()),
        }
    }

    /// Converts the summary into the embed posted to the pin channel.
    pub fn into_embed(self) -> CreateEmbed {
        let author = CreateEmbedAuthor::new(self.author_name)
            .icon_url(self.author_avatar_url)
            .url(self.jump_url);

        let mut embed = CreateEmbed::new()
            .author(author)
            .description(self.content)
            .url(self.source_url)
            .timestamp(self.timestamp);

        if let Some(image_url) = self.image_url {
            embed = embed.image(image_url);
        }

        embed
    }
}

/// Returns the synthetic URL identifying a pinned message.
pub fn pin_source_url(message_id: MessageId) -> String {
    format!("{}{}", PIN_URL_PREFIX, message_id)
}

/// Returns true when an embed URL identifies the given source message.
///
/// Only the last path segment is compared so one id being a prefix of another
/// cannot produce a false match.
pub fn embed_url_refers_to(url: &str, message_id: MessageId) -> bool {
    let id = message_id.to_string();
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment == id)
}
