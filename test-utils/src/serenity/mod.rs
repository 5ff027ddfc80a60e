//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Message, MessageReaction, ...) for testing purposes. These factories
//! create valid Serenity objects by deserializing JSON, simulating what Discord's
//! API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_reaction, create_test_user};
//!
//! let author = create_test_user(42, "alice", false);
//! let mut message = create_test_message(900, 300, Some(200), author, "hello");
//! message.reactions.push(create_test_reaction(&pin_emoji, 3));
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects
//! - `message::create_test_reaction` - Create reaction counts attached to a message
//! - `message::create_test_attachment` - Create message attachments
//! - `message::create_test_pin_summary` - Create a pin channel message carrying a summary embed

pub mod message;
pub mod user;

pub use message::{
    create_test_attachment, create_test_pin_summary, create_test_message, create_test_reaction,
};
pub use user::create_test_user;
