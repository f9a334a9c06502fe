use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::models::chat::ChatMessage;
use crate::services::intent::Gender;

/// Opaque identifier issued once per browser session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything remembered about one session
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Set once, never overwritten
    pub age: Option<u8>,

    /// Set once, never overwritten
    pub gender: Option<Gender>,

    /// Turns already exchanged with the model, oldest first
    pub history: Vec<ChatMessage>,

    /// First health message received before demographics were known
    pub initial_concern: Option<String>,

    pub concern_addressed: bool,

    /// Turns counted against the per-session quota
    pub message_count: u32,

    pub created_at: Instant,
}

impl SessionRecord {
    pub fn new() -> Self {
        Self {
            age: None,
            gender: None,
            history: Vec::new(),
            initial_concern: None,
            concern_addressed: false,
            message_count: 0,
            created_at: Instant::now(),
        }
    }

    pub fn demographics_complete(&self) -> bool {
        self.age.is_some() && self.gender.is_some()
    }

    /// Concern waiting to be replayed to the model
    pub fn pending_concern(&self) -> Option<&str> {
        if self.concern_addressed {
            return None;
        }
        self.initial_concern.as_deref()
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_blank() {
        let record = SessionRecord::new();
        assert!(!record.demographics_complete());
        assert!(record.history.is_empty());
        assert_eq!(record.message_count, 0);
        assert!(record.pending_concern().is_none());
    }

    #[test]
    fn test_pending_concern_hidden_once_addressed() {
        let mut record = SessionRecord::new();
        record.initial_concern = Some("I have a headache".to_string());
        assert_eq!(record.pending_concern(), Some("I have a headache"));

        record.concern_addressed = true;
        assert!(record.pending_concern().is_none());
    }

    #[test]
    fn test_generated_tokens_are_unique() {
        assert_ne!(SessionToken::generate(), SessionToken::generate());
    }
}
