//! Reaction Bot Test Utils
//!
//! Provides shared testing utilities for the reaction bot's unit tests. Discord objects
//! are created by deserializing JSON shaped like Discord API responses, so tests work
//! with the same Serenity types the bot receives at runtime.
//!
//! # Overview
//!
//! - **serenity**: Factories for Serenity model objects (users, messages, reactions)
//! - **fixture**: Sample role-assignment message content with known role ids
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[tokio::test]
//! async fn test_pin() {
//!     let author = create_test_user(42, "alice", false);
//!     let message = create_test_message(900, 300, Some(200), author, "hello");
//!     // Hand the message to a mock Discord API...
//! }
//! ```

pub mod fixture;
pub mod serenity;
