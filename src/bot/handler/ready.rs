//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. It is used to:
//! - Log connection information
//! - Register the global slash commands
//! - Seed the option reactions on role-assignment messages

use dioxus_logger::tracing;
use serenity::all::{Command, Context, Ready};

use crate::{
    service::{command::global_commands, discord::SerenityDiscordApi, role::RoleToggleService},
    state::BotState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Command registration failures are logged with the full error detail but do not
/// stop the bot; reaction handling works without slash commands.
///
/// # Arguments
/// - `state` - Shared bot state holding the configuration
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    for command in global_commands() {
        match Command::create_global_command(&ctx.http, command).await {
            Ok(registered) => tracing::debug!("Registered command /{}", registered.name),
            Err(e) => tracing::error!("Failed to register slash command: {:#?}", e),
        }
    }

    if let Some(role_channel) = state.config.role_channel {
        let api = SerenityDiscordApi::new(ctx.http.clone());
        let added = RoleToggleService::new(&api, &state.config)
            .seed_reactions(role_channel)
            .await;

        tracing::info!(
            "Seeded {} reactions on {} role messages",
            added,
            state.config.role_messages.len()
        );
    }
}
