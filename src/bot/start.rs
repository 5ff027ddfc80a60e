use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Gateway intents the bot subscribes to.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
}

/// Starts the Discord bot in a blocking manner
///
/// This function creates the Discord client and runs it until the gateway connection
/// shuts down. Event handlers run as independent tasks inside Serenity's event loop.
///
/// # Arguments
/// - `state` - Shared bot state holding the configuration
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(state: BotState) -> Result<(), AppError> {
    let token = state.config.token.clone();
    let handler = Handler::new(state);

    let mut client = Client::builder(&token, intents())
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until the gateway connection shuts down
    client.start().await?;

    Ok(())
}
