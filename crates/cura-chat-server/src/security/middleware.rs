use crate::security::SessionSigner;
use crate::services::conversation::SessionToken;
use crate::utils::error::ApiError;
use axum::{
    extract::{Request, State},
    http::{
        header::{
            SET_COOKIE, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
            X_XSS_PROTECTION,
        },
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Session of the current request, inserted by `session_middleware`
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub token: SessionToken,
    /// No valid cookie came with the request
    pub is_new: bool,
}

/// Session middleware - resolve the signed cookie or issue a fresh one
pub async fn session_middleware(
    State(signer): State<Arc<SessionSigner>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = match signer.from_headers(request.headers()) {
        Some(token) => SessionContext {
            token,
            is_new: false,
        },
        None => {
            let token = SessionToken::generate();
            debug!("No valid session cookie, issuing {}", token);
            SessionContext {
                token,
                is_new: true,
            }
        }
    };

    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).await;

    if context.is_new {
        let cookie = signer.set_cookie(&context.token)?;
        response.headers_mut().append(SET_COOKIE, cookie);
    }

    Ok(response)
}

/// Hardening headers added to every response
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(
        STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    response
}
