//! API request and response payloads.
//!
//! Request bodies follow the JSON contract: unknown fields are ignored,
//! missing required fields are a deserialization error surfaced as a 400 by
//! the server, and server-assigned fields (ids, timestamps) never appear in
//! inserts.

use serde::{Deserialize, Serialize};

use crate::models::ChatMessage;
use crate::types::{ActivityKind, TransactionKind, Trend, UserId};

// ---------------------------------------------------------------------------
// Inserts
// ---------------------------------------------------------------------------

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub svm_wallet_address: Option<String>,
}

/// Payload for recording a social activity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub kind: ActivityKind,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub engagement: i64,
    pub points: i64,
}

/// Payload for recording a wallet transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: String,
    pub token: String,
    #[serde(default)]
    pub signature: Option<String>,
    pub points: i64,
}

/// Partial update of a user's external-account links.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConnections {
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub svm_wallet_address: Option<String>,
}

/// Inbound chat request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub user_id: UserId,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Both sides of one assistant exchange.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}

/// Per-user dashboard summary derived from the ledger and event lists.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_points: i64,
    pub social_engagement_total: i64,
    pub transaction_count: u64,
    /// 1-based leaderboard position; 0 when the user is unranked.
    pub current_rank: u64,
    pub points_today: i64,
    pub points_week: i64,
}

/// One row of the global leaderboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Dense 1-based position; ties get distinct consecutive ranks.
    pub rank: u64,
    pub user_id: UserId,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub total_points: i64,
    pub trend: Trend,
}
