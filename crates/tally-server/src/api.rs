use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::Method,
    routing::{get, patch, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use tally_shared::{
    ActivityEvent, ChatExchange, ChatRequest, DashboardStats, LeaderboardEntry, NewActivity,
    NewTransaction, PointsLedgerEntry, TransactionEvent, UpdateConnections, User,
};
use tally_store::Store;

use crate::assistant::ChatService;
use crate::error::ServerError;
use crate::identity::Identity;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub chat: ChatService,
    pub identity: Arc<dyn Identity>,
}

/// Json extractor that surfaces malformed or incomplete bodies as a
/// structured 400 instead of axum's default rejection.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/user", get(get_user))
        .route("/api/user/connections", patch(update_connections))
        .route("/api/stats", get(dashboard_stats))
        .route(
            "/api/twitter/activities",
            get(list_activities).post(create_activity),
        )
        .route(
            "/api/svm/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/api/points/history", get(points_history))
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/chat", post(chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn get_user(State(state): State<AppState>) -> Result<Json<User>, ServerError> {
    let user_id = state.identity.current_user();
    let store = state.store.read().await;
    let user = store
        .get_user(&user_id)
        .cloned()
        .ok_or(ServerError::UserNotFound(user_id))?;
    Ok(Json(user))
}

async fn update_connections(
    State(state): State<AppState>,
    ValidJson(connections): ValidJson<UpdateConnections>,
) -> Result<Json<User>, ServerError> {
    let user_id = state.identity.current_user();
    let mut store = state.store.write().await;
    let user = store.update_connections(&user_id, connections)?;

    info!(user = %user.id, "Updated account connections");
    Ok(Json(user))
}

async fn dashboard_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let user_id = state.identity.current_user();
    let store = state.store.read().await;
    Json(store.dashboard_stats(&user_id))
}

async fn list_activities(State(state): State<AppState>) -> Json<Vec<ActivityEvent>> {
    let user_id = state.identity.current_user();
    let store = state.store.read().await;
    Json(store.activities_for(&user_id))
}

async fn create_activity(
    State(state): State<AppState>,
    ValidJson(activity): ValidJson<NewActivity>,
) -> Result<Json<ActivityEvent>, ServerError> {
    let user_id = state.identity.current_user();
    let mut store = state.store.write().await;
    let event = store.record_activity(&user_id, activity)?;

    info!(user = %user_id, kind = %event.kind, points = event.points, "Activity recorded via API");
    Ok(Json(event))
}

async fn list_transactions(State(state): State<AppState>) -> Json<Vec<TransactionEvent>> {
    let user_id = state.identity.current_user();
    let store = state.store.read().await;
    Json(store.transactions_for(&user_id))
}

async fn create_transaction(
    State(state): State<AppState>,
    ValidJson(transaction): ValidJson<NewTransaction>,
) -> Result<Json<TransactionEvent>, ServerError> {
    let user_id = state.identity.current_user();
    let mut store = state.store.write().await;
    let event = store.record_transaction(&user_id, transaction)?;

    info!(user = %user_id, kind = %event.kind, points = event.points, "Transaction recorded via API");
    Ok(Json(event))
}

async fn points_history(State(state): State<AppState>) -> Json<Vec<PointsLedgerEntry>> {
    let user_id = state.identity.current_user();
    let store = state.store.read().await;
    Json(store.points_history(&user_id))
}

async fn leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    let store = state.store.read().await;
    Json(store.rank())
}

async fn chat(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ChatRequest>,
) -> Result<Json<ChatExchange>, ServerError> {
    if request.message.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "message must not be empty".to_string(),
        ));
    }

    let exchange = state.chat.exchange(&request.user_id, &request.message).await?;
    Ok(Json(exchange))
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
