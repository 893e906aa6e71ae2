//! Dashboard aggregation: time-windowed point sums and lifetime totals.
//!
//! Reads only.  The snapshot is a pure function of the store contents and
//! the supplied instant, so repeated calls with no intervening writes are
//! identical.

use chrono::{DateTime, Duration, Utc};

use tally_shared::{DashboardStats, UserId};

use crate::store::Store;

impl Store {
    /// Dashboard snapshot for a user, windowed from the current instant.
    pub fn dashboard_stats(&self, user_id: &UserId) -> DashboardStats {
        self.dashboard_stats_at(user_id, Utc::now())
    }

    /// Dashboard snapshot windowed from an explicit instant.
    ///
    /// Window membership is `created_at > now - window`: an entry exactly at
    /// the boundary falls out.  Unknown users get an all-zero snapshot with
    /// rank 0 rather than an error.
    pub fn dashboard_stats_at(&self, user_id: &UserId, now: DateTime<Utc>) -> DashboardStats {
        let day_floor = now - Duration::hours(24);
        let week_floor = now - Duration::days(7);

        let mut points_today = 0i64;
        let mut points_week = 0i64;
        for entry in self.ledger.iter().filter(|entry| &entry.user_id == user_id) {
            if entry.created_at > week_floor {
                points_week += entry.points;
                if entry.created_at > day_floor {
                    points_today += entry.points;
                }
            }
        }

        let social_engagement_total: i64 = self
            .activities
            .iter()
            .filter(|event| &event.user_id == user_id)
            .map(|event| event.engagement)
            .sum();

        let transaction_count = self
            .transactions
            .iter()
            .filter(|event| &event.user_id == user_id)
            .count() as u64;

        DashboardStats {
            total_points: self
                .users
                .get(user_id)
                .map(|user| user.total_points)
                .unwrap_or(0),
            social_engagement_total,
            transaction_count,
            current_rank: self.current_rank(user_id),
            points_today,
            points_week,
        }
    }
}
