//! Model gateway with linear fallback across a pool of API credentials.
//!
//! Every call snapshots the shared cursor and walks the pool from there,
//! one attempt per credential. The credential that finally answered (or the
//! last one tried) becomes the new cursor, committed by compare-and-swap so
//! that concurrent calls starting from the same position rotate only once.

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::models::chat::ChatMessage;
use crate::utils::error::ApiError;

/// Environment variable holding the first credential
pub const PRIMARY_KEY_VAR: &str = "GEMINI_API_KEY";

/// Shown to the user when every credential failed
pub const UNAVAILABLE_REPLY: &str = "⚠️ Sorry, I'm temporarily unavailable. Please try again later.";

/// What gets sent to the model for one turn
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    /// Persona sent as a system message, when the model accepts one
    pub system_instruction: Option<String>,
    /// Prior turns, oldest first
    pub history: Vec<ChatMessage>,
    pub prompt: String,
}

impl GatewayRequest {
    /// Flattened message list in chat-completions order
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        if let Some(system) = &self.system_instruction {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.extend(self.history.iter().cloned());
        messages.push(ChatMessage::user(self.prompt.clone()));
        messages
    }
}

/// An API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn masked(&self) -> String {
        if self.0.chars().count() > 12 {
            let head: String = self.0.chars().take(8).collect();
            let tail: String = self.0.chars().skip(self.0.chars().count() - 4).collect();
            format!("{}...{}", head, tail)
        } else {
            "***".to_string()
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.masked())
    }
}

/// One call to the external model with one credential
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn generate(
        &self,
        credential: &Credential,
        request: &GatewayRequest,
    ) -> Result<String, ApiError>;
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PoolStatus {
    pub total_available: usize,
    pub current_key_index: usize,
    pub fallback_enabled: bool,
}

/// Ordered, interchangeable credentials plus the shared "current" cursor
#[derive(Debug)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
    cursor: AtomicUsize,
}

impl CredentialPool {
    pub fn new(keys: Vec<String>) -> Result<Self> {
        if keys.is_empty() {
            bail!(
                "No Gemini API keys found in environment variables (set {} or {}_1)",
                PRIMARY_KEY_VAR,
                PRIMARY_KEY_VAR
            );
        }

        Ok(Self {
            credentials: keys.into_iter().map(Credential::new).collect(),
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads `GEMINI_API_KEY_1`, `GEMINI_API_KEY_2`, ... until the first gap.
    /// `GEMINI_API_KEY` stands in for slot 1 when `_1` is absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut keys = Vec::new();
        for slot in 1.. {
            let key = present(&format!("{}_{}", PRIMARY_KEY_VAR, slot))
                .or_else(|| if slot == 1 { present(PRIMARY_KEY_VAR) } else { None });

            match key {
                Some(key) => keys.push(key),
                None => break,
            }
        }

        let pool = Self::new(keys)?;
        for (idx, credential) in pool.credentials.iter().enumerate() {
            debug!("API key {}: {}", idx + 1, credential.masked());
        }
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    pub fn get(&self, index: usize) -> &Credential {
        &self.credentials[index % self.credentials.len()]
    }

    /// Move the cursor from `expected` to `next`. A no-op when another call
    /// already moved it away from `expected`.
    pub fn commit_rotation(&self, expected: usize, next: usize) -> bool {
        if expected == next {
            return false;
        }
        self.cursor
            .compare_exchange(expected, next, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            total_available: self.len(),
            current_key_index: self.current_index(),
            fallback_enabled: self.len() > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayReply {
    Generated(String),
    /// Every credential failed
    Unavailable,
}

impl GatewayReply {
    pub fn text(&self) -> &str {
        match self {
            GatewayReply::Generated(text) => text,
            GatewayReply::Unavailable => UNAVAILABLE_REPLY,
        }
    }
}

/// Result of one gateway call, including the rotation it caused
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayOutcome {
    pub reply: GatewayReply,
    /// Cursor position the call started from
    pub started_at: usize,
    /// Credential that answered, or the last one tried
    pub settled_at: usize,
    pub attempts: usize,
}

impl GatewayOutcome {
    pub fn rotated(&self) -> bool {
        self.started_at != self.settled_at
    }
}

#[derive(Clone)]
pub struct ModelGateway {
    provider: Arc<dyn ModelProvider>,
    pool: Arc<CredentialPool>,
}

impl ModelGateway {
    pub fn new(provider: Arc<dyn ModelProvider>, pool: Arc<CredentialPool>) -> Self {
        info!(
            "Model gateway ready. Total keys available: {}",
            pool.len()
        );
        Self { provider, pool }
    }

    pub fn pool(&self) -> &CredentialPool {
        &self.pool
    }

    pub async fn generate(&self, request: &GatewayRequest) -> GatewayOutcome {
        let total = self.pool.len();
        let started_at = self.pool.current_index();
        let mut settled_at = started_at;
        let mut attempts = 0;
        let mut reply = GatewayReply::Unavailable;

        for offset in 0..total {
            let index = (started_at + offset) % total;
            settled_at = index;
            attempts += 1;

            match self.provider.generate(self.pool.get(index), request).await {
                Ok(text) => {
                    reply = GatewayReply::Generated(text.trim().to_string());
                    break;
                }
                Err(e) => {
                    error!("Gemini API error with key {}: {}", index + 1, e);
                    if offset + 1 < total {
                        info!(
                            "Retrying with API key {} of {} ({}/{})",
                            (index + 1) % total + 1,
                            total,
                            attempts,
                            total
                        );
                    }
                }
            }
        }

        if reply == GatewayReply::Unavailable {
            error!("All API keys have failed");
        }

        if self.pool.commit_rotation(started_at, settled_at) {
            info!("Switched to API key {} of {}", settled_at + 1, total);
        } else if settled_at != started_at {
            warn!("Credential cursor moved by a concurrent call; keeping its choice");
        }

        GatewayOutcome {
            reply,
            started_at,
            settled_at,
            attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn request(prompt: &str) -> GatewayRequest {
        GatewayRequest {
            system_instruction: Some("persona".to_string()),
            history: vec![],
            prompt: prompt.to_string(),
        }
    }

    fn pool(keys: &[&str]) -> Arc<CredentialPool> {
        Arc::new(CredentialPool::new(keys.iter().map(|k| k.to_string()).collect()).unwrap())
    }

    /// Provider that fails for the listed keys and records every key it saw
    fn scripted(failing: &'static [&'static str], seen: Arc<Mutex<Vec<String>>>) -> MockModelProvider {
        let mut provider = MockModelProvider::new();
        provider.expect_generate().returning(move |credential, request| {
            seen.lock().unwrap().push(credential.expose().to_string());
            if failing.contains(&credential.expose()) {
                Err(ApiError::LlmError("quota exceeded".to_string()))
            } else {
                Ok(format!("  reply to {}  ", request.prompt))
            }
        });
        provider
    }

    #[test]
    fn test_pool_reads_numbered_keys_until_gap() {
        let env: HashMap<&str, &str> = [
            ("GEMINI_API_KEY_1", "one"),
            ("GEMINI_API_KEY_2", "two"),
            ("GEMINI_API_KEY_4", "four"),
        ]
        .into_iter()
        .collect();

        let pool = CredentialPool::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(1).expose(), "two");
    }

    #[test]
    fn test_pool_bare_key_fills_first_slot() {
        let env: HashMap<&str, &str> = [
            ("GEMINI_API_KEY", "bare"),
            ("GEMINI_API_KEY_2", "second"),
        ]
        .into_iter()
        .collect();

        let pool = CredentialPool::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).expose(), "bare");
        assert!(pool.status().fallback_enabled);
    }

    #[test]
    fn test_pool_numbered_key_wins_over_bare() {
        let env: HashMap<&str, &str> = [("GEMINI_API_KEY", "bare"), ("GEMINI_API_KEY_1", "numbered")]
            .into_iter()
            .collect();

        let pool = CredentialPool::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0).expose(), "numbered");
    }

    #[test]
    fn test_pool_requires_a_key() {
        assert!(CredentialPool::from_lookup(|_| None).is_err());
        assert!(CredentialPool::from_lookup(|_| Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_credential_masking() {
        assert_eq!(Credential::new("AIzaSyABCDEFGHIJ1234").masked(), "AIzaSyAB...1234");
        assert_eq!(Credential::new("short").masked(), "***");
        assert!(!format!("{:?}", Credential::new("AIzaSyABCDEFGHIJ1234")).contains("CDEFGHIJ"));
    }

    #[test]
    fn test_commit_rotation_is_compare_and_swap() {
        let pool = pool(&["a", "b", "c"]);
        assert!(pool.commit_rotation(0, 2));
        assert_eq!(pool.current_index(), 2);
        // A second caller that also started at 0 must not move it again
        assert!(!pool.commit_rotation(0, 1));
        assert_eq!(pool.current_index(), 2);
    }

    #[tokio::test]
    async fn test_success_on_first_key_keeps_cursor() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let gateway = ModelGateway::new(Arc::new(scripted(&[], seen.clone())), pool(&["a", "b"]));

        let outcome = gateway.generate(&request("thanks")).await;
        assert_eq!(outcome.reply, GatewayReply::Generated("reply to thanks".to_string()));
        assert_eq!(outcome.attempts, 1);
        assert!(!outcome.rotated());
        assert_eq!(gateway.pool().current_index(), 0);
        assert_eq!(*seen.lock().unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_failure_rotates_and_sticks() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let gateway = ModelGateway::new(Arc::new(scripted(&["a"], seen.clone())), pool(&["a", "b", "c"]));

        let outcome = gateway.generate(&request("hi")).await;
        assert_eq!(outcome.reply.text(), "reply to hi");
        assert_eq!(outcome.settled_at, 1);
        assert_eq!(gateway.pool().current_index(), 1);

        // Next call starts from the rotated key
        gateway.generate(&request("again")).await;
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "b"]);
    }

    #[tokio::test]
    async fn test_all_keys_failing_tries_each_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let keys = pool(&["a", "b", "c"]);
        assert!(keys.commit_rotation(0, 1));
        let gateway = ModelGateway::new(Arc::new(scripted(&["a", "b", "c"], seen.clone())), keys);

        let outcome = gateway.generate(&request("hello")).await;
        assert_eq!(outcome.reply, GatewayReply::Unavailable);
        assert_eq!(outcome.reply.text(), UNAVAILABLE_REPLY);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(*seen.lock().unwrap(), vec!["b", "c", "a"]);
        // Cursor rests on the last credential tried
        assert_eq!(outcome.settled_at, 0);
        assert_eq!(gateway.pool().current_index(), 0);
    }

    #[test]
    fn test_request_message_order() {
        let request = GatewayRequest {
            system_instruction: Some("persona".to_string()),
            history: vec![ChatMessage::user("before"), ChatMessage::assistant("answer")],
            prompt: "now".to_string(),
        };
        let messages = request.to_messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], ChatMessage::system("persona"));
        assert_eq!(messages[3], ChatMessage::user("now"));
    }
}
