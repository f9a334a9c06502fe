use std::sync::Arc;
use tracing::{debug, info};

use super::policy::{IntakeDecision, IntakePolicy, EMPTY_MESSAGE_REPLY};
use super::store::SessionStore;
use super::types::SessionToken;
use crate::services::gateway::{ModelGateway, PoolStatus};
use crate::services::prompt::PromptBuilder;

/// Outcome of one chat turn, before it is mapped onto HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// Canned text; the model was not called
    Prompt(String),
    /// Quota exhausted for this session
    LimitReached(String),
    Answered {
        reply: String,
        counted: bool,
        current_count: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCount {
    pub count: u32,
    pub limit: u32,
}

impl MessageCount {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count)
    }
}

/// Runs one chat turn end to end: session lock, intake policy, prompt,
/// gateway call and bookkeeping.
pub struct ConversationManager {
    store: Arc<dyn SessionStore>,
    policy: IntakePolicy,
    prompts: PromptBuilder,
    gateway: ModelGateway,
}

impl ConversationManager {
    pub fn new(
        store: Arc<dyn SessionStore>,
        policy: IntakePolicy,
        prompts: PromptBuilder,
        gateway: ModelGateway,
    ) -> Self {
        Self {
            store,
            policy,
            prompts,
            gateway,
        }
    }

    pub async fn handle_message(&self, token: &SessionToken, message: &str) -> ChatReply {
        let message = message.trim();
        if message.is_empty() {
            return ChatReply::Prompt(EMPTY_MESSAGE_REPLY.to_string());
        }

        info!("Chat request received - session: {}, message_len: {}", token, message.len());

        let handle = self.store.handle(token);
        let mut record = handle.lock().await;

        let decision = self.policy.evaluate(message, &mut record);
        let consultation = match decision {
            IntakeDecision::Consult(consultation) => consultation,
            IntakeDecision::LimitReached { limit } => {
                return ChatReply::LimitReached(IntakePolicy::limit_reply(limit));
            }
            other => {
                debug!("Demographic question for session {}: {:?}", token, other);
                return ChatReply::Prompt(other.canned_reply().unwrap_or_default());
            }
        };

        let request = self.prompts.build(&record, &consultation.text);
        let outcome = self.gateway.generate(&request).await;
        if outcome.rotated() {
            debug!(
                "Session {} rotated credentials {} -> {} after {} attempt(s)",
                token, outcome.started_at, outcome.settled_at, outcome.attempts
            );
        }

        self.policy
            .record_exchange(&mut record, &consultation, &outcome.reply);

        ChatReply::Answered {
            reply: outcome.reply.text().to_string(),
            counted: consultation.counted,
            current_count: record.message_count,
        }
    }

    pub async fn message_count(&self, token: &SessionToken) -> MessageCount {
        let count = self
            .store
            .snapshot(token)
            .await
            .map(|record| record.message_count)
            .unwrap_or(0);

        MessageCount {
            count,
            limit: self.policy.message_limit(),
        }
    }

    pub async fn reset_count(&self, token: &SessionToken) -> bool {
        self.store.reset_count(token).await
    }

    pub fn pool_status(&self) -> PoolStatus {
        self.gateway.pool().status()
    }

    pub fn active_sessions(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::conversation::policy::{ASK_AGE_REPLY, ASK_GENDER_REPLY};
    use crate::services::conversation::InMemorySessionStore;
    use crate::services::gateway::{CredentialPool, MockModelProvider, UNAVAILABLE_REPLY};
    use crate::services::medicine::MedicineTable;
    use crate::utils::error::ApiError;
    use std::sync::Mutex;

    struct Harness {
        manager: ConversationManager,
        store: Arc<InMemorySessionStore>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    fn harness(keys: &[&str], failing: bool, limit: u32) -> Harness {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let seen = prompts.clone();

        let mut provider = MockModelProvider::new();
        provider.expect_generate().returning(move |_, request| {
            seen.lock().unwrap().push(request.prompt.clone());
            if failing {
                Err(ApiError::LlmError("down".to_string()))
            } else {
                Ok("model reply".to_string())
            }
        });

        let pool = CredentialPool::new(keys.iter().map(|k| k.to_string()).collect()).unwrap();
        let store = Arc::new(InMemorySessionStore::new());
        let manager = ConversationManager::new(
            store.clone(),
            IntakePolicy::with_keywords(limit),
            PromptBuilder::new(Some("persona"), &MedicineTable::builtin(), true),
            ModelGateway::new(Arc::new(provider), Arc::new(pool)),
        );

        Harness { manager, store, prompts }
    }

    #[tokio::test]
    async fn test_empty_message_touches_nothing() {
        let h = harness(&["k"], false, 7);
        let token = SessionToken::new("s");

        let reply = h.manager.handle_message(&token, "   ").await;
        assert_eq!(reply, ChatReply::Prompt(EMPTY_MESSAGE_REPLY.to_string()));
        assert!(h.store.is_empty());
        assert!(h.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_headache_scenario_replays_concern() {
        let h = harness(&["k"], false, 7);
        let token = SessionToken::new("s");

        assert_eq!(
            h.manager.handle_message(&token, "I have a headache").await,
            ChatReply::Prompt(ASK_AGE_REPLY.to_string())
        );
        assert_eq!(
            h.manager.handle_message(&token, "24").await,
            ChatReply::Prompt(ASK_GENDER_REPLY.to_string())
        );
        assert!(h.prompts.lock().unwrap().is_empty());

        let reply = h.manager.handle_message(&token, "male").await;
        assert_eq!(
            reply,
            ChatReply::Answered {
                reply: "model reply".to_string(),
                counted: true,
                current_count: 1,
            }
        );

        let prompts = h.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("The user is a 24 year old male."));
        assert!(prompts[0].ends_with("User: I have a headache"));

        let record = h.store.snapshot(&token).await.unwrap();
        assert!(record.initial_concern.is_none());
        assert!(record.concern_addressed);
    }

    #[tokio::test]
    async fn test_thanks_goes_directly_to_model() {
        let h = harness(&["k"], false, 7);
        let token = SessionToken::new("s");

        let reply = h.manager.handle_message(&token, "thanks").await;
        assert!(matches!(reply, ChatReply::Answered { counted: false, .. }));
        assert_eq!(*h.prompts.lock().unwrap(), vec!["User: thanks".to_string()]);
    }

    #[tokio::test]
    async fn test_gateway_down_degrades_to_apology() {
        let h = harness(&["a", "b", "c"], true, 7);
        let token = SessionToken::new("s");

        let reply = h.manager.handle_message(&token, "hello there").await;
        assert_eq!(
            reply,
            ChatReply::Answered {
                reply: UNAVAILABLE_REPLY.to_string(),
                counted: false,
                current_count: 0,
            }
        );
        assert_eq!(h.prompts.lock().unwrap().len(), 3);
        assert_eq!(h.manager.pool_status().current_key_index, 2);
        assert!(h.store.snapshot(&token).await.unwrap().history.is_empty());
    }

    #[tokio::test]
    async fn test_limit_and_reset() {
        let h = harness(&["k"], false, 2);
        let token = SessionToken::new("s");

        h.manager.handle_message(&token, "25 female").await;
        h.manager.handle_message(&token, "thanks").await;
        assert_eq!(h.manager.message_count(&token).await.count, 2);

        let reply = h.manager.handle_message(&token, "one more").await;
        assert!(matches!(reply, ChatReply::LimitReached(text) if text.contains("only process 2")));

        assert!(h.manager.reset_count(&token).await);
        let count = h.manager.message_count(&token).await;
        assert_eq!(count.count, 0);
        assert_eq!(count.remaining(), 2);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let h = harness(&["k"], false, 7);
        let first = SessionToken::new("first");
        let second = SessionToken::new("second");

        h.manager.handle_message(&first, "I have a cough").await;
        h.manager.handle_message(&first, "31").await;

        assert_eq!(
            h.manager.handle_message(&second, "I have a cough").await,
            ChatReply::Prompt(ASK_AGE_REPLY.to_string())
        );
        assert_eq!(h.manager.active_sessions(), 2);
        assert_eq!(h.manager.message_count(&SessionToken::new("nobody")).await.count, 0);
    }
}
