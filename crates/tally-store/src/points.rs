use tally_shared::{PointsLedgerEntry, UserId};

use crate::store::Store;

impl Store {
    /// A user's full points history, newest first.
    pub fn points_history(&self, user_id: &UserId) -> Vec<PointsLedgerEntry> {
        let mut entries: Vec<PointsLedgerEntry> = self
            .ledger
            .iter()
            .filter(|entry| &entry.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tally_shared::PointSource;
    use uuid::Uuid;

    fn entry_at(user_id: &UserId, hours_ago: i64, points: i64) -> PointsLedgerEntry {
        PointsLedgerEntry {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            source: PointSource::Bonus,
            source_id: None,
            points,
            description: "Bonus".to_string(),
            created_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[test]
    fn history_newest_first_and_scoped_to_user() {
        let mut store = Store::new();
        let user_id = UserId::from_raw("u1");

        store.ledger.push(entry_at(&user_id, 10, 1));
        store.ledger.push(entry_at(&user_id, 1, 2));
        store.ledger.push(entry_at(&UserId::from_raw("u2"), 0, 3));

        let history = store.points_history(&user_id);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].points, 2);
        assert_eq!(history[1].points, 1);
    }
}
