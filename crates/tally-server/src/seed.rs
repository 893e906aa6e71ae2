//! Demo data seeded at startup so the dashboard has something to show.
//!
//! All awards go through the ledger, so seeded users satisfy the same
//! totals-equal-ledger-sum rule as live traffic.

use tracing::info;

use tally_shared::{
    ActivityKind, NewActivity, NewTransaction, NewUser, TransactionKind, User, UserId,
};
use tally_store::{Result, Store};

use crate::identity::DEMO_USER_ID;

/// Create the demo account if it does not exist yet.
pub fn ensure_demo_user(store: &mut Store) -> Result<User> {
    let id = UserId::from_raw(DEMO_USER_ID);
    if let Some(user) = store.get_user(&id) {
        return Ok(user.clone());
    }

    store.create_user_with_id(
        id,
        NewUser {
            username: "demo".to_string(),
            display_name: "Demo User".to_string(),
            email: Some("demo@example.com".to_string()),
            avatar_url: None,
            twitter_handle: None,
            svm_wallet_address: None,
        },
    )
}

/// Seed demo activity, transactions, and a handful of leaderboard users.
pub fn seed_demo_data(store: &mut Store) -> Result<()> {
    let demo = ensure_demo_user(store)?;

    let activities = [
        (
            ActivityKind::Post,
            "1",
            "Excited to start using this platform!",
            15,
            10,
        ),
        (
            ActivityKind::Like,
            "2",
            "Great thread about blockchain tech",
            0,
            2,
        ),
        (
            ActivityKind::Share,
            "3",
            "Shared this useful article with followers",
            8,
            5,
        ),
        (ActivityKind::Reply, "4", "Thanks for the insights!", 3, 3),
    ];
    for (kind, content_id, snippet, engagement, points) in activities {
        store.record_activity(
            &demo.id,
            NewActivity {
                kind,
                content_id: Some(content_id.to_string()),
                snippet: Some(snippet.to_string()),
                engagement,
                points,
            },
        )?;
    }

    let transactions = [
        (
            TransactionKind::Receive,
            "100.50",
            "SOL",
            "5Kq9xJ8vN2mR4pL1wH3yB6zT7cA9dF8gE2sV4nM6rP3tU",
            15,
        ),
        (
            TransactionKind::Send,
            "25.00",
            "SOL",
            "8Mw2nB5xP9cR6lT3kH7yJ4zA1dE9fG2sV5mN8rQ4tU6p",
            10,
        ),
        (
            TransactionKind::Swap,
            "50.00",
            "USDC",
            "3Np7mC9xQ2dS8lU5kI1yK6zB3eF4gH9sW7nO2rR6tV8q",
            12,
        ),
        (
            TransactionKind::Stake,
            "200.00",
            "SOL",
            "9Qr3nD7xS5eT2mV8lJ4yL1zC6fG3hI2sX9oP5rU7tW4q",
            20,
        ),
    ];
    for (kind, amount, token, signature, points) in transactions {
        store.record_transaction(
            &demo.id,
            NewTransaction {
                kind,
                amount: amount.to_string(),
                token: token.to_string(),
                signature: Some(signature.to_string()),
                points,
            },
        )?;
    }

    let leaderboard_users = [
        ("ahmed", "Ahmed Mohamed", 250),
        ("fatima", "Fatima Ali", 180),
        ("omar", "Omar Khaled", 320),
        ("sara", "Sara Hassan", 150),
        ("khalid", "Khalid Abdullah", 200),
    ];
    for (username, display_name, points) in leaderboard_users {
        let user = store.create_user(NewUser {
            username: username.to_string(),
            display_name: display_name.to_string(),
            email: Some(format!("{username}@example.com")),
            avatar_url: None,
            twitter_handle: None,
            svm_wallet_address: None,
        })?;
        store.record_bonus(&user.id, points, "Early adopter bonus")?;
    }

    info!(users = store.user_count(), "Seeded demo data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_preserves_ledger_invariant() {
        let mut store = Store::new();
        seed_demo_data(&mut store).unwrap();
        store.verify_totals().unwrap();
    }

    #[test]
    fn demo_user_totals_and_events() {
        let mut store = Store::new();
        seed_demo_data(&mut store).unwrap();

        let demo = store.get_user(&UserId::from_raw(DEMO_USER_ID)).unwrap();
        // 10+2+5+3 from activities, 15+10+12+20 from transactions.
        assert_eq!(demo.total_points, 77);
        assert_eq!(store.activities_for(&demo.id).len(), 4);
        assert_eq!(store.transactions_for(&demo.id).len(), 4);
        assert_eq!(store.points_history(&demo.id).len(), 8);
    }

    #[test]
    fn leaderboard_order_after_seeding() {
        let mut store = Store::new();
        seed_demo_data(&mut store).unwrap();

        let board = store.rank();
        let totals: Vec<i64> = board.iter().map(|entry| entry.total_points).collect();
        assert_eq!(totals, vec![320, 250, 200, 180, 150, 77]);
        assert_eq!(board[0].username, "omar");
        assert_eq!(board[5].username, "demo");
    }

    #[test]
    fn ensure_demo_user_is_idempotent() {
        let mut store = Store::new();
        let first = ensure_demo_user(&mut store).unwrap();
        let second = ensure_demo_user(&mut store).unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(store.user_count(), 1);
    }
}
