//! State shared by all event handler invocations.
//!
//! Serenity runs every gateway event in its own task, so the state is cloned into the
//! handler once and shared behind `Arc`s:
//! - Configuration, read-only for the lifetime of the process
//! - Pin lock, serializing the pin dedup scan and summary post

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;

/// Shared bot state.
///
/// Cloning is cheap: all fields are reference-counted.
#[derive(Clone)]
pub struct BotState {
    /// Bot configuration loaded at startup.
    pub config: Arc<Config>,

    /// Held while checking the pin channel for an existing summary and posting a new one.
    ///
    /// Without it two reactions arriving at the same time could both miss the other's
    /// summary and pin the message twice.
    pub pin_lock: Arc<Mutex<()>>,
}

impl BotState {
    /// Creates the shared state from the loaded configuration.
    ///
    /// # Arguments
    /// - `config` - Validated bot configuration
    ///
    /// # Returns
    /// - `BotState` - State ready to be handed to the event handler
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            pin_lock: Arc::new(Mutex::new(())),
        }
    }
}
