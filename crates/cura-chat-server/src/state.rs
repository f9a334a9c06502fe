use axum::extract::FromRef;
use std::sync::Arc;

use crate::config::Settings;
use crate::security::SessionSigner;
use crate::services::conversation::ConversationManager;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub conversation_manager: Arc<ConversationManager>,
    pub session_signer: Arc<SessionSigner>,
}

impl FromRef<AppState> for Arc<ConversationManager> {
    fn from_ref(state: &AppState) -> Self {
        state.conversation_manager.clone()
    }
}

impl FromRef<AppState> for Arc<SessionSigner> {
    fn from_ref(state: &AppState) -> Self {
        state.session_signer.clone()
    }
}
