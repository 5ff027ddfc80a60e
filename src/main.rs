mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::load()?;

    tracing::info!(
        "Loaded config: pin channel {}, threshold {} x {}, {} role messages",
        config.pin_channel,
        config.pin_amount,
        config.pin_emoji,
        config.role_messages.len()
    );

    bot::start::start_bot(BotState::new(config)).await
}
