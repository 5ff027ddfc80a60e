use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected data from Discord or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Occurs when a role mention in a role-assignment message carries digits that
    /// do not fit into a Discord snowflake.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
