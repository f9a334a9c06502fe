use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::types::{SessionRecord, SessionToken};

/// Exclusive access to one session's record. Holding the lock serializes
/// turns of that session; other sessions are unaffected.
pub type SessionHandle = Arc<Mutex<SessionRecord>>;

/// Session-scoped memory, injected wherever the intake flow needs it
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Handle for `token`, creating a blank record on first use
    fn handle(&self, token: &SessionToken) -> SessionHandle;

    /// Copy of the current record, if the session exists
    async fn snapshot(&self, token: &SessionToken) -> Option<SessionRecord>;

    /// Zero the quota counter. Returns false for unknown sessions.
    async fn reset_count(&self, token: &SessionToken) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe in-memory session store.
/// Records live for the process lifetime: no eviction, no persistence.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    storage: Arc<DashMap<SessionToken, SessionHandle>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        info!("Initializing in-memory session store with DashMap");
        Self {
            storage: Arc::new(DashMap::new()),
        }
    }

    fn existing(&self, token: &SessionToken) -> Option<SessionHandle> {
        // Clone the Arc out so the shard guard is dropped before any await
        self.storage.get(token).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    fn handle(&self, token: &SessionToken) -> SessionHandle {
        self.storage
            .entry(token.clone())
            .or_insert_with(|| {
                debug!("Creating session record for {}", token);
                Arc::new(Mutex::new(SessionRecord::new()))
            })
            .value()
            .clone()
    }

    async fn snapshot(&self, token: &SessionToken) -> Option<SessionRecord> {
        let handle = self.existing(token)?;
        let record = handle.lock().await;
        Some(record.clone())
    }

    async fn reset_count(&self, token: &SessionToken) -> bool {
        let Some(handle) = self.existing(token) else {
            return false;
        };
        handle.lock().await.message_count = 0;
        debug!("Reset message count for session {}", token);
        true
    }

    fn len(&self) -> usize {
        self.storage.len()
    }
}
