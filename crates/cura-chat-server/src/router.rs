use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info};

use crate::handlers;
use crate::security::{security_headers_middleware, session_middleware};
use crate::state::AppState;
use crate::utils::error::GENERIC_FAILURE_REPLY;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/chat", post(handlers::chat::chat_handler))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/message-count",
            get(handlers::messages::message_count_handler),
        )
        .route(
            "/reset-messages",
            get(handlers::messages::reset_messages_handler),
        );

    // Front-end assets
    if let Some(dir) = &state.settings.server.static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(middleware::from_fn_with_state(
            state.session_signer.clone(),
            session_middleware,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "InternalError",
            "message": "Request handler panicked",
            "reply": GENERIC_FAILURE_REPLY,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::security::SessionSigner;
    use crate::services::conversation::{ConversationManager, InMemorySessionStore, IntakePolicy};
    use crate::services::conversation::policy::{ASK_AGE_REPLY, EMPTY_MESSAGE_REPLY};
    use crate::services::gateway::{CredentialPool, MockModelProvider, ModelGateway};
    use crate::services::medicine::MedicineTable;
    use crate::services::prompt::PromptBuilder;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(message_limit: u32) -> Router {
        let mut provider = MockModelProvider::new();
        provider
            .expect_generate()
            .returning(|_, _| Ok("Rest and drink water.".to_string()));

        let mut settings = Settings::default();
        settings.session.message_limit = message_limit;

        let pool = CredentialPool::new(vec!["key-one".to_string(), "key-two".to_string()]).unwrap();
        let manager = ConversationManager::new(
            Arc::new(InMemorySessionStore::new()),
            IntakePolicy::with_keywords(message_limit),
            PromptBuilder::new(None, &MedicineTable::builtin(), true),
            ModelGateway::new(Arc::new(provider), Arc::new(pool)),
        );

        build_router(AppState {
            session_signer: Arc::new(SessionSigner::from_config(&settings.session)),
            settings: Arc::new(settings),
            conversation_manager: Arc::new(manager),
        })
    }

    fn chat(body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    /// `name=value` part of the Set-Cookie header
    fn session_cookie(response: &Response) -> String {
        let header = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie issued")
            .to_str()
            .unwrap();
        header.split(';').next().unwrap().to_string()
    }

    async fn json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_pool() {
        let response = app(7).oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");

        let json = json_body(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["api_keys"]["total_available"], 2);
        assert_eq!(json["api_keys"]["current_key_index"], 0);
        assert_eq!(json["api_keys"]["fallback_enabled"], true);
    }

    #[tokio::test]
    async fn test_first_request_issues_cookie() {
        let response = app(7)
            .oneshot(chat(r#"{"message":"   "}"#, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(session_cookie(&response).starts_with("cura_session="));

        let json = json_body(response).await;
        assert_eq!(json["reply"], EMPTY_MESSAGE_REPLY);
        assert!(json.get("message_counted").is_none());
    }

    #[tokio::test]
    async fn test_cookie_keeps_session_across_requests() {
        let app = app(7);

        let response = app
            .clone()
            .oneshot(chat(r#"{"message":"I have a headache"}"#, None))
            .await
            .unwrap();
        let cookie = session_cookie(&response);
        assert_eq!(json_body(response).await["reply"], ASK_AGE_REPLY);

        let response = app
            .clone()
            .oneshot(chat(r#"{"message":"30"}"#, Some(&cookie)))
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let response = app
            .oneshot(chat(r#"{"message":"female"}"#, Some(&cookie)))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["reply"], "Rest and drink water.");
        assert_eq!(json["message_counted"], true);
        assert_eq!(json["current_count"], 1);
    }

    #[tokio::test]
    async fn test_limit_returns_429() {
        let app = app(1);

        let response = app
            .clone()
            .oneshot(chat(r#"{"message":"25 female"}"#, None))
            .await
            .unwrap();
        let cookie = session_cookie(&response);
        assert_eq!(json_body(response).await["current_count"], 1);

        let response = app
            .clone()
            .oneshot(chat(r#"{"message":"one more"}"#, Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let json = json_body(response).await;
        assert_eq!(json["limit_reached"], true);
        assert!(json["reply"].as_str().unwrap().contains("only process 1"));

        let response = app
            .clone()
            .oneshot(get("/reset-messages", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["success"], true);

        let response = app
            .oneshot(get("/message-count", Some(&cookie)))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["count"], 0);
        assert_eq!(json["limit"], 1);
        assert_eq!(json["remaining"], 1);
    }

    #[tokio::test]
    async fn test_reset_without_session() {
        let response = app(7)
            .oneshot(get("/reset-messages", None))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "No user session");
    }

    #[tokio::test]
    async fn test_reset_before_first_chat() {
        let app = app(7);

        let response = app.clone().oneshot(get("/health", None)).await.unwrap();
        let cookie = session_cookie(&response);

        let response = app
            .oneshot(get("/reset-messages", Some(&cookie)))
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "No user session");
    }

    #[tokio::test]
    async fn test_invalid_json_is_rejected() {
        let response = app(7).oneshot(chat("not json", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["reply"], GENERIC_FAILURE_REPLY);
    }

    #[tokio::test]
    async fn test_forged_cookie_gets_fresh_session() {
        let response = app(7)
            .oneshot(get("/message-count", Some("cura_session=someone.deadbeef")))
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_some());
        assert_eq!(json_body(response).await["count"], 0);
    }
}
