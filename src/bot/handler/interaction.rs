use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::service::command::reply_for;

/// Handles slash command interactions.
///
/// Known commands are answered with their reply; unknown commands are logged and
/// left unanswered, which Discord reports to the user as a failed interaction.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client
/// - `interaction` - The interaction received from the gateway
pub async fn handle_interaction_create(ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(reply) = reply_for(&command.data.name) else {
        tracing::warn!(
            "Unknown command /{} from {}",
            command.data.name,
            command.user.name
        );
        return;
    };

    if let Err(e) = command
        .create_response(&ctx.http, reply.into_response())
        .await
    {
        tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
    }
}
