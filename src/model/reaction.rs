use serenity::all::{ChannelId, GuildId, MessageId, Reaction, ReactionType, UserId};

/// Whether a reaction was added to or removed from a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionAction {
    Added,
    Removed,
}

/// A reaction added or removed on a message.
#[derive(Debug, Clone)]
pub struct ReactionEvent {
    /// Guild the reaction happened in, `None` for direct messages.
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    /// Reacting user. Discord omits it for some removal events.
    pub user_id: Option<UserId>,
    pub emoji: ReactionType,
    /// Whether the reacting user is a bot, when the gateway delivered member data.
    ///
    /// When `None` the user has to be fetched to find out.
    pub user_is_bot: Option<bool>,
}

impl From<Reaction> for ReactionEvent {
    fn from(reaction: Reaction) -> Self {
        Self {
            guild_id: reaction.guild_id,
            channel_id: reaction.channel_id,
            message_id: reaction.message_id,
            user_id: reaction.user_id,
            user_is_bot: reaction.member.as_ref().map(|member| member.user.bot),
            emoji: reaction.emoji,
        }
    }
}

/// Why a handler ignored a reaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Reaction happened outside of a guild.
    NotGuild,
    /// Reaction came from a bot account or carried no user.
    BotUser,
    /// Reaction happened in the pin channel itself.
    PinChannel,
    /// Message is not a configured role-assignment message.
    NotRoleMessage,
}
