use tally_shared::{TransactionEvent, UserId};

use crate::store::Store;

impl Store {
    /// All wallet transactions for a user, newest first.
    pub fn transactions_for(&self, user_id: &UserId) -> Vec<TransactionEvent> {
        let mut events: Vec<TransactionEvent> = self
            .transactions
            .iter()
            .filter(|event| &event.user_id == user_id)
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tally_shared::TransactionKind;
    use uuid::Uuid;

    fn event_at(user_id: &UserId, hours_ago: i64, amount: &str) -> TransactionEvent {
        TransactionEvent {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            kind: TransactionKind::Receive,
            amount: amount.to_string(),
            token: "SOL".to_string(),
            signature: None,
            points: 1,
            created_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[test]
    fn listed_newest_first() {
        let mut store = Store::new();
        let user_id = UserId::from_raw("u1");

        store.transactions.push(event_at(&user_id, 24, "1.00"));
        store.transactions.push(event_at(&user_id, 2, "2.00"));

        let listed = store.transactions_for(&user_id);
        assert_eq!(listed[0].amount, "2.00");
        assert_eq!(listed[1].amount, "1.00");
    }

    #[test]
    fn amount_text_preserved_exactly() {
        let mut store = Store::new();
        let user_id = UserId::from_raw("u1");

        // Arbitrary-precision amounts survive as text, no float rounding.
        store
            .transactions
            .push(event_at(&user_id, 1, "123456789.000000001"));

        let listed = store.transactions_for(&user_id);
        assert_eq!(listed[0].amount, "123456789.000000001");
    }
}
