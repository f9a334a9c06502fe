use crate::models::chat::{MessageCountResponse, ResetResponse};
use crate::security::SessionContext;
use crate::services::conversation::ConversationManager;
use axum::{
    extract::{Extension, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn message_count_handler(
    State(manager): State<Arc<ConversationManager>>,
    Extension(session): Extension<SessionContext>,
) -> Json<MessageCountResponse> {
    let count = manager.message_count(&session.token).await;

    info!(
        "Message count request - session: {}, count: {}, limit: {}",
        session.token, count.count, count.limit
    );

    Json(MessageCountResponse {
        count: count.count,
        limit: count.limit,
        remaining: count.remaining(),
    })
}

pub async fn reset_messages_handler(
    State(manager): State<Arc<ConversationManager>>,
    Extension(session): Extension<SessionContext>,
) -> Json<ResetResponse> {
    // No record until the first /chat message, even when a cookie was issued
    if session.is_new || !manager.reset_count(&session.token).await {
        return Json(ResetResponse {
            success: false,
            message: "No user session".to_string(),
        });
    }

    info!("Message count reset for session {}", session.token);

    Json(ResetResponse {
        success: true,
        message: "Message count reset".to_string(),
    })
}
