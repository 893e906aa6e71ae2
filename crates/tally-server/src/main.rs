//! # tally-server
//!
//! HTTP API server for the points-and-activity dashboard.
//!
//! This binary provides:
//! - **REST API** (axum) for the current user, dashboard stats, social
//!   activities, wallet transactions, points history, and the leaderboard
//! - **Assistant chat** backed by an external completion provider, with the
//!   user's own stats embedded as context
//! - **In-memory record store** seeded with demo data; nothing survives a
//!   restart

mod api;
mod assistant;
mod config;
mod error;
mod identity;
mod seed;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tally_store::Store;

use crate::api::AppState;
use crate::assistant::{ChatService, HttpCompletionProvider};
use crate::config::ServerConfig;
use crate::identity::DemoIdentity;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tally_server=debug")),
        )
        .init();

    info!("Starting tally server v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(
        addr = %config.http_addr,
        model = %config.completion_model,
        seed_demo = config.seed_demo,
        "Loaded configuration"
    );
    if config.completion_api_key.is_none() {
        warn!("OPENAI_API_KEY not set; chat requests will fail until it is provided");
    }

    // -----------------------------------------------------------------------
    // 3. Build the store and seed it
    // -----------------------------------------------------------------------
    let mut store = Store::new();
    seed::ensure_demo_user(&mut store)?;
    if config.seed_demo {
        seed::seed_demo_data(&mut store)?;
    }
    let store = Arc::new(RwLock::new(store));

    // -----------------------------------------------------------------------
    // 4. Wire up services and application state
    // -----------------------------------------------------------------------
    let provider = Arc::new(HttpCompletionProvider::new(&config));
    let chat = ChatService::new(store.clone(), provider);

    let state = AppState {
        store,
        chat,
        identity: Arc::new(DemoIdentity),
    };

    // -----------------------------------------------------------------------
    // 5. Run the HTTP API server (blocks until shutdown)
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(state, config.http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
