//! Shared message fixtures.
//!
//! Role ids referenced by `ROLE_MESSAGE` are exported so tests can assert on the
//! roles a reaction should toggle.

/// Role granted by reacting with 🎮 on `ROLE_MESSAGE`.
pub const ROLE_MESSAGE_GAMERS: u64 = 1002206034640769100;

/// Role granted by reacting with 🎨 on `ROLE_MESSAGE`.
pub const ROLE_MESSAGE_ARTISTS: u64 = 1002206034640769101;

/// A role-assignment message with a header line and two options.
pub const ROLE_MESSAGE: &str = "Pick your roles below!\n\
🎮 <@&1002206034640769100> Gamers\n\
🎨 <@&1002206034640769101> Artists";
