//! Reaction event handlers.
//!
//! Reaction additions feed both the pin service and the role service; removals only
//! affect reaction roles. The two services are independent: a failure in one is
//! logged and does not prevent the other from running.

use dioxus_logger::tracing;
use serenity::all::{Context, Reaction};

use crate::{
    model::{
        pin::PinOutcome,
        reaction::{ReactionAction, ReactionEvent},
        role::RoleOutcome,
    },
    service::{discord::SerenityDiscordApi, pin::PinService, role::RoleToggleService},
    state::BotState,
};

/// Handles a reaction being added to a message.
///
/// # Arguments
/// - `state` - Shared bot state holding the configuration and pin lock
/// - `ctx` - Discord context providing the HTTP client
/// - `reaction` - The added reaction
pub async fn handle_reaction_add(state: &BotState, ctx: Context, reaction: Reaction) {
    let event = ReactionEvent::from(reaction);
    let api = SerenityDiscordApi::new(ctx.http.clone());

    let pin_service = PinService::new(&api, &state.config, &state.pin_lock);
    match pin_service.handle_reaction(&event).await {
        Ok(PinOutcome::Pinned) => {}
        Ok(outcome) => tracing::debug!(
            "No pin for message {} in channel {}: {:?}",
            event.message_id,
            event.channel_id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Failed to process pin for message {} in channel {}: {}",
            event.message_id,
            event.channel_id,
            e
        ),
    }

    toggle_roles(state, &api, &event, ReactionAction::Added).await;
}

/// Handles a reaction being removed from a message.
///
/// # Arguments
/// - `state` - Shared bot state holding the configuration
/// - `ctx` - Discord context providing the HTTP client
/// - `reaction` - The removed reaction
pub async fn handle_reaction_remove(state: &BotState, ctx: Context, reaction: Reaction) {
    let event = ReactionEvent::from(reaction);
    let api = SerenityDiscordApi::new(ctx.http.clone());

    toggle_roles(state, &api, &event, ReactionAction::Removed).await;
}

async fn toggle_roles(
    state: &BotState,
    api: &SerenityDiscordApi,
    event: &ReactionEvent,
    action: ReactionAction,
) {
    let role_service = RoleToggleService::new(api, &state.config);

    match role_service.handle_reaction(event, action).await {
        Ok(RoleOutcome::Applied(roles)) if roles.is_empty() => tracing::debug!(
            "Reaction {} on role message {} matched no role",
            event.emoji,
            event.message_id
        ),
        Ok(RoleOutcome::Applied(_)) => {}
        Ok(RoleOutcome::Skipped(_)) => {}
        Err(e) => tracing::error!(
            "Failed to toggle roles for message {} ({:?}): {}",
            event.message_id,
            action,
            e
        ),
    }
}
