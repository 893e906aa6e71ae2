//! Store construction and the collections it owns.
//!
//! Users live in a map keyed by id plus an insertion-order vector; the
//! vector is what makes leaderboard tie-breaking deterministic.  Events,
//! ledger entries, and chat messages are append-only vectors.

use std::collections::HashMap;

use tally_shared::{ActivityEvent, ChatMessage, PointsLedgerEntry, TransactionEvent, User, UserId};

/// The in-memory record store.
///
/// All mutation goes through the typed operations defined in the sibling
/// modules (`users`, `ledger`, `chat`, ...).  The struct itself is `Send`
/// plain data; callers that handle requests concurrently wrap it in a lock
/// so ledger mutations for a user are serialized.
pub struct Store {
    pub(crate) users: HashMap<UserId, User>,
    /// User ids in creation order; the leaderboard tie-break.
    pub(crate) user_order: Vec<UserId>,
    pub(crate) activities: Vec<ActivityEvent>,
    pub(crate) transactions: Vec<TransactionEvent>,
    pub(crate) ledger: Vec<PointsLedgerEntry>,
    pub(crate) chat_messages: Vec<ChatMessage>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            user_order: Vec::new(),
            activities: Vec::new(),
            transactions: Vec::new(),
            ledger: Vec::new(),
            chat_messages: Vec::new(),
        }
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
