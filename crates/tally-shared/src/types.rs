use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque user identifier.
///
/// Freshly created users get a UUIDv4 string; well-known fixed identities
/// (the demo account) are built from raw strings. The id is never parsed,
/// only compared and printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of social activity that can earn points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Post,
    Like,
    Share,
    Reply,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityKind::Post => "post",
            ActivityKind::Like => "like",
            ActivityKind::Share => "share",
            ActivityKind::Reply => "reply",
        };
        write!(f, "{s}")
    }
}

/// Kind of wallet transaction that can earn points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Send,
    Receive,
    Swap,
    Stake,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionKind::Send => "send",
            TransactionKind::Receive => "receive",
            TransactionKind::Swap => "swap",
            TransactionKind::Stake => "stake",
        };
        write!(f, "{s}")
    }
}

/// Where a points award came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PointSource {
    Social,
    Wallet,
    Bonus,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Rank movement relative to a previous leaderboard snapshot.
///
/// No snapshot history is kept, so every entry currently reports `Same`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_round_trip() {
        let id = UserId::from_raw("demo-user");
        assert_eq!(id.to_string(), "demo-user");
        assert_eq!(id.as_str(), "demo-user");
    }

    #[test]
    fn kinds_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActivityKind::Share).unwrap(),
            "\"share\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Stake).unwrap(),
            "\"stake\""
        );
        assert_eq!(
            serde_json::to_string(&PointSource::Bonus).unwrap(),
            "\"bonus\""
        );
    }
}
