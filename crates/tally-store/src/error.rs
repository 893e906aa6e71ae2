use thiserror::Error;

use tally_shared::UserId;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An operation referenced a user id that does not exist.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Usernames are unique; a second user tried to claim one.
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Point awards must be non-negative.
    #[error("Points value must be non-negative, got {0}")]
    NegativePoints(i64),

    /// Engagement counts must be non-negative.
    #[error("Engagement count must be non-negative, got {0}")]
    NegativeEngagement(i64),

    /// A user's cached total diverged from the ledger sum.  This is an
    /// integrity violation, not a recoverable condition.
    #[error("Ledger total mismatch for user {user}: cached {cached}, ledger sum {ledger}")]
    TotalMismatch {
        user: UserId,
        cached: i64,
        ledger: i64,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
