//! Business logic behind the bot's event handlers.
//!
//! Services receive domain models from the handlers, talk to Discord through the
//! `DiscordApi` trait, and report what they did through outcome enums so handlers
//! can log results consistently.
//!
//! - `pin` - Reposting popular messages into the pin channel
//! - `role` - Granting and revoking roles from reactions
//! - `command` - Slash command definitions and replies
//! - `discord` - Discord API abstraction and its Serenity implementation

pub mod command;
pub mod discord;
pub mod pin;
pub mod role;

#[cfg(test)]
mod test;

use crate::{error::AppError, model::reaction::ReactionEvent, service::discord::DiscordApi};

/// Returns true when the reaction should be treated as coming from a bot.
///
/// Uses the member data delivered with the gateway event when present and fetches
/// the user otherwise. Events without a user id count as bot reactions since there
/// is nobody to act on behalf of.
pub(crate) async fn reacting_user_is_bot(
    api: &dyn DiscordApi,
    event: &ReactionEvent,
) -> Result<bool, AppError> {
    if let Some(is_bot) = event.user_is_bot {
        return Ok(is_bot);
    }

    let Some(user_id) = event.user_id else {
        return Ok(true);
    };

    let user = api.get_user(user_id).await?;

    Ok(user.bot)
}
