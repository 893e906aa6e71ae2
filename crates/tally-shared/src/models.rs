//! Domain model structs held in the in-memory record store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the API layer.  Events and ledger entries are immutable once
//! created; the only field mutated after creation anywhere in the system is
//! `User::total_points`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ActivityKind, ChatRole, PointSource, TransactionKind, UserId};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A tracked user account.
///
/// `total_points` is kept in lockstep with the points ledger: it always
/// equals the sum of all [`PointsLedgerEntry::points`] owned by this user,
/// maintained incrementally on every award rather than recomputed per read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    /// Unique login handle.
    pub username: String,
    pub display_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    /// Linked social handle, if the user connected one.
    pub twitter_handle: Option<String>,
    /// Linked wallet address, if the user connected one.
    pub svm_wallet_address: Option<String>,
    /// Lifetime points total; i64 so sums stay safe well past 2^31.
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Activity event (social)
// ---------------------------------------------------------------------------

/// A single social-media activity that earned points.  Immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: Uuid,
    pub user_id: UserId,
    pub kind: ActivityKind,
    /// Identifier of the source content on the social platform.
    pub content_id: Option<String>,
    /// Short text excerpt of the source content.
    pub snippet: Option<String>,
    /// Aggregate engagement count (likes + shares + replies).
    pub engagement: i64,
    /// Points awarded for this activity.
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Transaction event (wallet)
// ---------------------------------------------------------------------------

/// A single wallet transaction that earned points.  Immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEvent {
    pub id: Uuid,
    pub user_id: UserId,
    pub kind: TransactionKind,
    /// Exact decimal amount as text; token amounts exceed what floats can
    /// represent without drift.
    pub amount: String,
    /// Token symbol, e.g. `SOL`.
    pub token: String,
    /// Opaque on-chain signature, when known.
    pub signature: Option<String>,
    /// Points awarded for this transaction.
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Points ledger
// ---------------------------------------------------------------------------

/// One append-only ledger record of a points award and its cause.
///
/// The ledger is the sole source of truth for point provenance; user totals
/// are a running sum over it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PointsLedgerEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub source: PointSource,
    /// Id of the originating activity or transaction event, when there is one.
    pub source_id: Option<Uuid>,
    /// Signed point delta.
    pub points: i64,
    /// Human-readable explanation of the award.
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Chat message
// ---------------------------------------------------------------------------

/// One side of an assistant conversation.  Append-only, ordered by creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: UserId,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
