pub mod chat;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, MessageCountResponse, ResetResponse, Role};
