//! Global leaderboard: a total order over all users by points.
//!
//! Ties are broken by original creation order via a stable sort over the
//! insertion-order vector, so repeated calls always produce the same
//! ranking.  Positions are dense and 1-based; equal totals still get
//! distinct consecutive ranks (a documented simplification — no shared
//! ranks, no snapshot history for real trend data).

use tally_shared::{LeaderboardEntry, Trend, User, UserId};

use crate::store::Store;

impl Store {
    /// All users ranked by total points, descending.
    pub fn rank(&self) -> Vec<LeaderboardEntry> {
        self.users_by_points()
            .into_iter()
            .enumerate()
            .map(|(index, user)| LeaderboardEntry {
                rank: index as u64 + 1,
                user_id: user.id.clone(),
                username: user.username.clone(),
                display_name: user.display_name.clone(),
                avatar_url: user.avatar_url.clone(),
                total_points: user.total_points,
                trend: Trend::Same,
            })
            .collect()
    }

    /// A user's 1-based leaderboard position, or 0 when absent.
    pub fn current_rank(&self, user_id: &UserId) -> u64 {
        self.users_by_points()
            .iter()
            .position(|user| &user.id == user_id)
            .map(|index| index as u64 + 1)
            .unwrap_or(0)
    }

    /// Users in creation order, stably re-sorted by points descending.
    fn users_by_points(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self
            .user_order
            .iter()
            .filter_map(|id| self.users.get(id))
            .collect();
        users.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_shared::NewUser;

    fn add_user_with_points(store: &mut Store, username: &str, points: i64) -> UserId {
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
        if points > 0 {
            store.record_bonus(&user.id, points, "Bonus").unwrap();
        }
        user.id
    }

    #[test]
    fn ranks_descend_by_points() {
        let mut store = Store::new();
        for (name, points) in [
            ("omar", 320),
            ("ahmed", 250),
            ("khalid", 200),
            ("fatima", 180),
            ("sara", 150),
        ] {
            add_user_with_points(&mut store, name, points);
        }

        let board = store.rank();
        let totals: Vec<i64> = board.iter().map(|entry| entry.total_points).collect();
        assert_eq!(totals, vec![320, 250, 200, 180, 150]);
        let ranks: Vec<u64> = board.iter().map(|entry| entry.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert!(board.iter().all(|entry| entry.trend == Trend::Same));
    }

    #[test]
    fn ties_get_distinct_stable_ranks() {
        let mut store = Store::new();
        let first = add_user_with_points(&mut store, "first", 200);
        let second = add_user_with_points(&mut store, "second", 200);

        let board = store.rank();
        assert_eq!(board[0].user_id, first);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].user_id, second);
        assert_eq!(board[1].rank, 2);

        // Repeated calls must not reshuffle the tie.
        for _ in 0..5 {
            assert_eq!(store.rank(), board);
        }
    }

    #[test]
    fn current_rank_matches_board_position() {
        let mut store = Store::new();
        let low = add_user_with_points(&mut store, "low", 10);
        let high = add_user_with_points(&mut store, "high", 90);

        assert_eq!(store.current_rank(&high), 1);
        assert_eq!(store.current_rank(&low), 2);
    }

    #[test]
    fn missing_user_is_unranked() {
        let store = Store::new();
        assert_eq!(store.current_rank(&UserId::from_raw("nonexistent")), 0);
    }
}
