use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use cura_chat_server::config::Settings;
use cura_chat_server::logging::init_logger;
use cura_chat_server::router::build_router;
use cura_chat_server::security::SessionSigner;
use cura_chat_server::services::conversation::{InMemorySessionStore, IntakePolicy};
use cura_chat_server::services::{
    ConversationManager, CredentialPool, GeminiClient, MedicineTable, ModelGateway, PromptBuilder,
};
use cura_chat_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging
    init_logger(&settings.logging)?;
    info!("🚀 Starting CuraAI chat server v{}...", env!("CARGO_PKG_VERSION"));
    info!("✅ Configuration loaded");

    // Credentials
    let pool = Arc::new(CredentialPool::from_env()?);
    info!("✅ Loaded {} Gemini API key(s)", pool.len());

    // Initialize services
    let provider = Arc::new(GeminiClient::new(settings.gemini.clone()));
    let gateway = ModelGateway::new(provider, pool);

    let medicines = MedicineTable::builtin();
    info!(
        "✅ Medicine table loaded ({} categories)",
        medicines.categories().len()
    );
    let prompts = PromptBuilder::new(
        settings.prompts.persona.as_deref(),
        &medicines,
        settings.gemini.supports_system_instruction,
    );

    let conversation_manager = Arc::new(ConversationManager::new(
        Arc::new(InMemorySessionStore::new()),
        IntakePolicy::with_keywords(settings.session.message_limit),
        prompts,
        gateway,
    ));
    info!(
        "✅ Conversation manager ready (model: {}, limit: {} per session)",
        settings.gemini.model, settings.session.message_limit
    );

    let session_signer = Arc::new(SessionSigner::from_config(&settings.session));

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let state = AppState {
        settings: Arc::new(settings),
        conversation_manager,
        session_signer,
    };

    // Build router
    let app = build_router(state);

    info!("🎯 Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
