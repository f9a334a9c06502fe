use crate::services::conversation::ConversationManager;
use crate::services::gateway::PoolStatus;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: DateTime<Utc>,
    version: String,
    api_keys: PoolStatus,
    active_sessions: usize,
}

pub async fn health_check(
    State(manager): State<Arc<ConversationManager>>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_keys: manager.pool_status(),
            active_sessions: manager.active_sessions(),
        }),
    )
}
