//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by startup code and by every
//! reaction handler. Domain-specific errors live in submodules and convert into
//! `AppError` through `#[from]`. Handler errors never reach the gateway loop: the
//! event dispatcher logs them and the failing invocation ends there.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion so `?` can be used throughout the
/// service layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading or validating the config file.
    ///
    /// Only produced during startup, where it aborts the process.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected data encountered while processing an event.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Covers gateway connection failures at startup as
    /// well as failed REST calls (fetching messages, sending embeds, role changes).
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
