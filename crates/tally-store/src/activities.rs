use tally_shared::{ActivityEvent, UserId};

use crate::store::Store;

impl Store {
    /// All social activities for a user, newest first.
    pub fn activities_for(&self, user_id: &UserId) -> Vec<ActivityEvent> {
        let mut events: Vec<ActivityEvent> = self
            .activities
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
    use tally_shared::ActivityKind;
    use uuid::Uuid;

    fn event_at(user_id: &UserId, hours_ago: i64) -> ActivityEvent {
        ActivityEvent {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            kind: ActivityKind::Post,
            content_id: None,
            snippet: None,
            engagement: 0,
            points: 1,
            created_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[test]
    fn listed_newest_first() {
        let mut store = Store::new();
        let user_id = UserId::from_raw("u1");

        let old = event_at(&user_id, 48);
        let recent = event_at(&user_id, 1);
        store.activities.push(old.clone());
        store.activities.push(recent.clone());
        // Another user's event must not leak into the listing.
        store.activities.push(event_at(&UserId::from_raw("u2"), 2));

        let listed = store.activities_for(&user_id);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, recent.id);
        assert_eq!(listed[1].id, old.id);
    }
}
