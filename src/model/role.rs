use serenity::all::RoleId;

use crate::model::reaction::SkipReason;

/// Result of processing a reaction on a role-assignment message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleOutcome {
    Skipped(SkipReason),
    /// Roles granted or revoked for the reacting member. Empty when no line of the
    /// message matched the emoji.
    Applied(Vec<RoleId>),
}
