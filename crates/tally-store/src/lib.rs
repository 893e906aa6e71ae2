//! # tally-store
//!
//! In-memory record store for the points dashboard, plus the ledger and
//! aggregation logic layered on top of it.
//!
//! The [`Store`] owns keyed collections for users, activity events, wallet
//! transactions, points-ledger entries, and chat messages.  It is a plain
//! value constructed by the caller and passed down explicitly, so tests can
//! run against isolated instances with no shared process state.  Nothing is
//! persisted: a restart loses all data.

pub mod activities;
pub mod chat;
pub mod leaderboard;
pub mod ledger;
pub mod points;
pub mod stats;
pub mod store;
pub mod transactions;
pub mod users;

mod error;

pub use error::{Result, StoreError};
pub use store::Store;
