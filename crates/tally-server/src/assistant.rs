//! Assistant bridge: turns a user question into a contextualized request to
//! an external completion provider and records both sides of the exchange.
//!
//! The provider is an injected capability so the exchange logic is testable
//! with no network.  The inbound message is persisted before the provider
//! call and survives a provider failure; the assistant reply is only
//! persisted on success.  No store lock is held across the network round
//! trip.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use tally_shared::{
    ActivityEvent, ChatExchange, ChatRole, DashboardStats, TransactionEvent, User, UserId,
};
use tally_store::Store;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// How many recent events of each kind go into the context document.
const CONTEXT_EVENT_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("No completion API key configured")]
    MissingCredentials,

    #[error("Completion request failed: {0}")]
    Transport(String),

    #[error("Completion provider returned status {0}")]
    Status(u16),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// External natural-language completion service, consumed as a black box.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce a reply to `message` given a plain-text context document.
    async fn complete(&self, context: &str, message: &str) -> Result<String, AssistantError>;
}

// ---------------------------------------------------------------------------
// HTTP provider (OpenAI-style chat completions)
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Talks to an OpenAI-compatible chat-completions endpoint over HTTPS.
pub struct HttpCompletionProvider {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpCompletionProvider {
    pub fn new(config: &ServerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.completion_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: config.completion_url.clone(),
            model: config.completion_model.clone(),
            api_key: config.completion_api_key.clone(),
        }
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, context: &str, message: &str) -> Result<String, AssistantError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AssistantError::MissingCredentials)?;

        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: context,
                },
                RequestMessage {
                    role: "user",
                    content: message,
                },
            ],
            temperature: 0.7,
            max_tokens: 500,
        };

        let mut attempt = 0;
        let response = loop {
            attempt += 1;
            match self
                .client
                .post(&self.url)
                .bearer_auth(api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => break response,
                // One retry on transient transport failure; anything else
                // (or a second failure) surfaces immediately.
                Err(err) if attempt == 1 && (err.is_timeout() || err.is_connect()) => {
                    warn!(error = %err, "Completion request failed, retrying once");
                }
                Err(err) => return Err(AssistantError::Transport(err.to_string())),
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status.as_u16()));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|err| AssistantError::MalformedResponse(err.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AssistantError::MalformedResponse("empty choices".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Context document
// ---------------------------------------------------------------------------

/// Build the plain-text context document handed to the provider as the
/// system message.
pub fn build_context(
    user: &User,
    stats: &DashboardStats,
    activities: &[ActivityEvent],
    transactions: &[TransactionEvent],
) -> String {
    let mut lines = vec![
        "You are the assistant for a points-and-activity tracking dashboard.".to_string(),
        "Answer questions about the current user's own stats, concisely and in a friendly tone."
            .to_string(),
        "Suggest ways to earn more points when asked.".to_string(),
        String::new(),
        "Current user:".to_string(),
        format!("- Name: {}", user.display_name),
        format!("- Total points: {}", stats.total_points),
        format!("- Leaderboard rank: {}", stats.current_rank),
        format!("- Social engagement total: {}", stats.social_engagement_total),
        format!("- Wallet transactions: {}", stats.transaction_count),
        format!("- Points today: {}", stats.points_today),
        format!("- Points this week: {}", stats.points_week),
        format!(
            "- Social account connected: {}",
            match &user.twitter_handle {
                Some(handle) => format!("yes (@{handle})"),
                None => "no".to_string(),
            }
        ),
        format!(
            "- Wallet connected: {}",
            if user.svm_wallet_address.is_some() { "yes" } else { "no" }
        ),
    ];

    if !activities.is_empty() {
        lines.push(String::new());
        lines.push("Recent social activity:".to_string());
        for event in activities.iter().take(CONTEXT_EVENT_LIMIT) {
            lines.push(format!(
                "- {} on {}: +{} points, engagement {}",
                event.kind,
                event.created_at.format("%Y-%m-%d"),
                event.points,
                event.engagement
            ));
        }
    }

    if !transactions.is_empty() {
        lines.push(String::new());
        lines.push("Recent wallet transactions:".to_string());
        for event in transactions.iter().take(CONTEXT_EVENT_LIMIT) {
            lines.push(format!(
                "- {} {} {} on {}: +{} points",
                event.kind,
                event.amount,
                event.token,
                event.created_at.format("%Y-%m-%d"),
                event.points
            ));
        }
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Chat service
// ---------------------------------------------------------------------------

/// Orchestrates one assistant exchange against the store and the provider.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<RwLock<Store>>,
    provider: Arc<dyn CompletionProvider>,
}

impl ChatService {
    pub fn new(store: Arc<RwLock<Store>>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { store, provider }
    }

    /// Run the full exchange: persist the user message, gather context,
    /// call the provider, persist the reply.
    ///
    /// On provider failure the user message stays persisted so conversation
    /// history is not lost, no assistant message is created, and the error
    /// maps to an opaque service failure at the API boundary.
    pub async fn exchange(
        &self,
        user_id: &UserId,
        message: &str,
    ) -> Result<ChatExchange, ServerError> {
        // Persist the inbound message and snapshot the context under one
        // write lock, released before any network I/O.
        let (user_message, context) = {
            let mut store = self.store.write().await;
            let user_message = store.create_chat_message(user_id, ChatRole::User, message)?;

            let user = store
                .get_user(user_id)
                .cloned()
                .ok_or_else(|| ServerError::UserNotFound(user_id.clone()))?;
            let stats = store.dashboard_stats(user_id);
            let activities = store.activities_for(user_id);
            let transactions = store.transactions_for(user_id);

            let context = build_context(&user, &stats, &activities, &transactions);
            (user_message, context)
        };

        let reply = self.provider.complete(&context, message).await?;
        debug!(user = %user_id, reply_len = reply.len(), "Assistant reply received");

        let assistant_message = {
            let mut store = self.store.write().await;
            store.create_chat_message(user_id, ChatRole::Assistant, reply)?
        };

        Ok(ChatExchange {
            user_message,
            assistant_message,
        })
    }
}
