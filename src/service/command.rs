//! Slash commands offered by the bot.

use serenity::all::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};

/// Reply sent in response to a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub content: &'static str,
    /// Only visible to the invoking user.
    pub ephemeral: bool,
}

impl CommandReply {
    pub fn into_response(self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(self.content)
                .ephemeral(self.ephemeral),
        )
    }
}

/// Returns the global slash commands registered on startup.
pub fn global_commands() -> Vec<CreateCommand> {
    vec![CreateCommand::new("ping").description("Ping the bot")]
}

/// Returns the reply for a command, or `None` for commands the bot does not know.
pub fn reply_for(command_name: &str) -> Option<CommandReply> {
    match command_name {
        "ping" => Some(CommandReply {
            content: "Pong!",
            ephemeral: true,
        }),
        _ => None,
    }
}
