//! Points ledger: the single write path for point awards.
//!
//! Every award appends an immutable event, appends a ledger entry, and bumps
//! the owning user's running total inside one `&mut self` call, so the total
//! can never be observed out of step with the ledger sum.  Validation
//! happens before the first write; a rejected request mutates nothing.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use tally_shared::{
    ActivityEvent, NewActivity, NewTransaction, PointSource, PointsLedgerEntry, TransactionEvent,
    UserId,
};

use crate::error::{Result, StoreError};
use crate::store::Store;

impl Store {
    /// Record a social activity and award its points.
    pub fn record_activity(&mut self, user_id: &UserId, new: NewActivity) -> Result<ActivityEvent> {
        ensure_points(new.points)?;
        if new.engagement < 0 {
            return Err(StoreError::NegativeEngagement(new.engagement));
        }
        self.ensure_user(user_id)?;

        let event = ActivityEvent {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            kind: new.kind,
            content_id: new.content_id,
            snippet: new.snippet,
            engagement: new.engagement,
            points: new.points,
            created_at: Utc::now(),
        };
        self.activities.push(event.clone());

        self.append_award(
            user_id,
            PointSource::Social,
            Some(event.id),
            event.points,
            format!("Social activity: {}", event.kind),
        )?;

        debug!(user = %user_id, kind = %event.kind, points = event.points, "recorded activity");
        Ok(event)
    }

    /// Record a wallet transaction and award its points.
    pub fn record_transaction(
        &mut self,
        user_id: &UserId,
        new: NewTransaction,
    ) -> Result<TransactionEvent> {
        ensure_points(new.points)?;
        self.ensure_user(user_id)?;

        let event = TransactionEvent {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            kind: new.kind,
            amount: new.amount,
            token: new.token,
            signature: new.signature,
            points: new.points,
            created_at: Utc::now(),
        };
        self.transactions.push(event.clone());

        self.append_award(
            user_id,
            PointSource::Wallet,
            Some(event.id),
            event.points,
            format!("Wallet transaction: {}", event.kind),
        )?;

        debug!(user = %user_id, kind = %event.kind, points = event.points, "recorded transaction");
        Ok(event)
    }

    /// Award points with no originating event (seeding, promotions).
    pub fn record_bonus(
        &mut self,
        user_id: &UserId,
        points: i64,
        description: impl Into<String>,
    ) -> Result<PointsLedgerEntry> {
        ensure_points(points)?;
        self.ensure_user(user_id)?;

        self.append_award(user_id, PointSource::Bonus, None, points, description.into())
    }

    /// Recompute every user's ledger sum and compare against the cached
    /// total.  A mismatch means the single-write-path rule was broken
    /// somewhere; tests treat it as fatal.
    pub fn verify_totals(&self) -> Result<()> {
        for (id, user) in &self.users {
            let ledger: i64 = self
                .ledger
                .iter()
                .filter(|entry| &entry.user_id == id)
                .map(|entry| entry.points)
                .sum();
            if ledger != user.total_points {
                return Err(StoreError::TotalMismatch {
                    user: id.clone(),
                    cached: user.total_points,
                    ledger,
                });
            }
        }
        Ok(())
    }

    fn ensure_user(&self, user_id: &UserId) -> Result<()> {
        if self.users.contains_key(user_id) {
            Ok(())
        } else {
            Err(StoreError::UserNotFound(user_id.clone()))
        }
    }

    /// Append a ledger entry and bump the user's total as one unit.
    fn append_award(
        &mut self,
        user_id: &UserId,
        source: PointSource,
        source_id: Option<Uuid>,
        points: i64,
        description: String,
    ) -> Result<PointsLedgerEntry> {
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.clone()))?;
        user.total_points += points;

        let entry = PointsLedgerEntry {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            source,
            source_id,
            points,
            description,
            created_at: Utc::now(),
        };
        self.ledger.push(entry.clone());
        Ok(entry)
    }
}

fn ensure_points(points: i64) -> Result<()> {
    if points < 0 {
        Err(StoreError::NegativePoints(points))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_shared::{ActivityKind, NewUser, TransactionKind};

    fn store_with_user(username: &str) -> (Store, UserId) {
        let mut store = Store::new();
        let user = store
            .create_user(NewUser {
                username: username.to_string(),
                display_name: username.to_string(),
                email: None,
                avatar_url: None,
                twitter_handle: None,
                svm_wallet_address: None,
            })
            .unwrap();
        (store, user.id)
    }

    fn activity(kind: ActivityKind, engagement: i64, points: i64) -> NewActivity {
        NewActivity {
            kind,
            content_id: None,
            snippet: None,
            engagement,
            points,
        }
    }

    fn transaction(kind: TransactionKind, amount: &str, points: i64) -> NewTransaction {
        NewTransaction {
            kind,
            amount: amount.to_string(),
            token: "SOL".to_string(),
            signature: None,
            points,
        }
    }

    #[test]
    fn activity_awards_points_and_ledger_entry() {
        let (mut store, user_id) = store_with_user("alice");

        let event = store
            .record_activity(&user_id, activity(ActivityKind::Post, 15, 10))
            .unwrap();

        let user = store.get_user(&user_id).unwrap();
        assert_eq!(user.total_points, 10);

        let history = store.points_history(&user_id);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].source, PointSource::Social);
        assert_eq!(history[0].source_id, Some(event.id));
        assert_eq!(history[0].points, 10);
        assert_eq!(history[0].description, "Social activity: post");

        store.verify_totals().unwrap();
    }

    #[test]
    fn transaction_awards_points_and_ledger_entry() {
        let (mut store, user_id) = store_with_user("alice");

        store
            .record_transaction(&user_id, transaction(TransactionKind::Stake, "200.00", 20))
            .unwrap();

        assert_eq!(store.get_user(&user_id).unwrap().total_points, 20);
        let history = store.points_history(&user_id);
        assert_eq!(history[0].source, PointSource::Wallet);
        assert_eq!(history[0].description, "Wallet transaction: stake");
        store.verify_totals().unwrap();
    }

    #[test]
    fn totals_match_ledger_after_mixed_sequence() {
        let (mut store, user_id) = store_with_user("alice");

        store
            .record_activity(&user_id, activity(ActivityKind::Post, 15, 10))
            .unwrap();
        store
            .record_activity(&user_id, activity(ActivityKind::Like, 0, 2))
            .unwrap();
        store
            .record_transaction(&user_id, transaction(TransactionKind::Receive, "100.50", 15))
            .unwrap();
        store.record_bonus(&user_id, 7, "Signup bonus").unwrap();

        let user = store.get_user(&user_id).unwrap();
        assert_eq!(user.total_points, 34);
        assert_eq!(store.points_history(&user_id).len(), 4);
        store.verify_totals().unwrap();
    }

    #[test]
    fn negative_points_rejected_without_mutation() {
        let (mut store, user_id) = store_with_user("alice");

        let err = store
            .record_activity(&user_id, activity(ActivityKind::Post, 5, -1))
            .unwrap_err();
        assert!(matches!(err, StoreError::NegativePoints(-1)));

        assert!(store.activities_for(&user_id).is_empty());
        assert!(store.points_history(&user_id).is_empty());
        assert_eq!(store.get_user(&user_id).unwrap().total_points, 0);
    }

    #[test]
    fn negative_engagement_rejected() {
        let (mut store, user_id) = store_with_user("alice");

        let err = store
            .record_activity(&user_id, activity(ActivityKind::Post, -3, 1))
            .unwrap_err();
        assert!(matches!(err, StoreError::NegativeEngagement(-3)));
        assert!(store.activities_for(&user_id).is_empty());
    }

    #[test]
    fn unknown_user_rejected_without_mutation() {
        let mut store = Store::new();
        let ghost = UserId::from_raw("ghost");

        let err = store
            .record_activity(&ghost, activity(ActivityKind::Post, 1, 1))
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(_)));
        assert!(store.activities_for(&ghost).is_empty());
        assert!(store.points_history(&ghost).is_empty());
    }

    #[test]
    fn verify_totals_detects_divergence() {
        let (mut store, user_id) = store_with_user("alice");
        store.record_bonus(&user_id, 5, "Bonus").unwrap();

        // Corrupt the cached total behind the ledger's back.
        store.users.get_mut(&user_id).unwrap().total_points = 99;

        let err = store.verify_totals().unwrap_err();
        assert!(matches!(err, StoreError::TotalMismatch { .. }));
    }
}
