//! Conversation state and intake flow
//!
//! Provides per-session state management with:
//! - Thread-safe session store (DashMap + per-session lock)
//! - Intake policy (demographics, initial concern, quota)
//! - Turn orchestration against the model gateway

pub mod manager;
pub mod policy;
mod store;
pub mod types;

pub use manager::{ChatReply, ConversationManager, MessageCount};
pub use policy::{Consultation, IntakeDecision, IntakePolicy};
pub use store::{InMemorySessionStore, SessionHandle, SessionStore};
pub use types::{SessionRecord, SessionToken};
