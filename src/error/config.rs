use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    ///
    /// Check that the file exists at the given path, or point `CONFIG_PATH` at it.
    #[error("Failed to read config file '{}': {source}", path.display())]
    ReadFile {
        /// Path of the config file
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or is missing required keys.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// `pinEmoji` is neither a unicode emoji nor a custom emoji in `<:name:id>` form.
    #[error("Invalid pin emoji: '{0}'")]
    InvalidEmoji(String),

    /// A config value is present but unusable.
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidValue {
        /// Name of the config key as written in the file
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}
