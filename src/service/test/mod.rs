//! Service tests driven by an in-memory Discord API.

use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, RoleId, UserId};
use test_utils::serenity::{create_test_message, create_test_reaction, create_test_user};
use tokio::sync::Mutex;

use crate::{
    config::Config,
    model::{
        pin::PinOutcome,
        reaction::{ReactionAction, ReactionEvent, SkipReason},
        role::RoleOutcome,
    },
    service::{pin::PinService, role::RoleToggleService},
};

use mock::{MockDiscordApi, RoleChange};

mod pin;

const GUILD: u64 = 200;
const CHANNEL: u64 = 300;
const PIN_CHANNEL: u64 = 400;
const ROLE_CHANNEL: u64 = 500;
const ROLE_MESSAGE_ID: u64 = 600;
const MESSAGE: u64 = 900;
const AUTHOR: u64 = 42;
const MEMBER: u64 = 43;
const BOT: u64 = 44;

fn test_config() -> Config {
    Config::from_json(&format!(
        r#"{{
            "token": "test-token",
            "pinChannel": {PIN_CHANNEL},
            "pinEmoji": "📌",
            "pinAmount": 3,
            "roles": [{ROLE_MESSAGE_ID}],
            "roleChannel": {ROLE_CHANNEL}
        }}"#
    ))
    .unwrap()
}

fn pin_emoji() -> ReactionType {
    ReactionType::Unicode("📌".to_string())
}

/// Builds a reaction event by `user` on `message` in `channel`.
fn reaction_event(channel: u64, message: u64, user: u64, emoji: ReactionType) -> ReactionEvent {
    ReactionEvent {
        guild_id: Some(GuildId::new(GUILD)),
        channel_id: ChannelId::new(channel),
        message_id: MessageId::new(message),
        user_id: Some(UserId::new(user)),
        emoji,
        user_is_bot: None,
    }
}

/// Mock API knowing a regular member, a bot, and one message with `pin_count` pins.
fn api_with_pinnable_message(pin_count: u64) -> MockDiscordApi {
    let author = create_test_user(AUTHOR, "alice", false);
    let mut message = create_test_message(MESSAGE, CHANNEL, Some(GUILD), author.clone(), "hi");
    if pin_count > 0 {
        message
            .reactions
            .push(create_test_reaction(&pin_emoji(), pin_count));
    }

    MockDiscordApi::new()
        .with_user(author)
        .with_user(create_test_user(MEMBER, "bob", false))
        .with_user(create_test_user(BOT, "helper-bot", true))
        .with_message(message)
}
