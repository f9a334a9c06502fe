use crate::models::chat::{ChatRequest, ChatResponse};
use crate::security::SessionContext;
use crate::services::conversation::{ChatReply, ConversationManager};
use crate::utils::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn chat_handler(
    State(manager): State<Arc<ConversationManager>>,
    Extension(session): Extension<SessionContext>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ChatResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let reply = manager.handle_message(&session.token, &request.message).await;

    let response = match reply {
        ChatReply::Prompt(text) => (StatusCode::OK, Json(ChatResponse::text(text))),
        ChatReply::LimitReached(text) => {
            info!("Rejecting chat for session {}: limit reached", session.token);
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ChatResponse {
                    reply: text,
                    message_counted: None,
                    current_count: None,
                    limit_reached: Some(true),
                }),
            )
        }
        ChatReply::Answered {
            reply,
            counted,
            current_count,
        } => (
            StatusCode::OK,
            Json(ChatResponse {
                reply,
                message_counted: Some(counted),
                current_count: Some(current_count),
                limit_reached: None,
            }),
        ),
    };

    Ok(response)
}
