//! Intake policy: decides, for one incoming message, whether to ask for
//! missing demographics, refuse on quota, or consult the model (and with
//! which text). All session mutation happens here.

use std::sync::Arc;
use tracing::{debug, info};

use super::types::SessionRecord;
use crate::models::chat::ChatMessage;
use crate::services::gateway::GatewayReply;
use crate::services::intent::{extract_age, extract_gender, IntentClassifier, KeywordClassifier};

pub const ASK_AGE_REPLY: &str = "To assist you better, may I know your age?";
pub const ASK_GENDER_REPLY: &str =
    "Thank you. Could you also let me know your gender (male or female)?";
pub const EMPTY_MESSAGE_REPLY: &str =
    "Please describe your symptoms or ask a health-related question.";

/// Messages quoting our own questions are demographic turns too
const DEMOGRAPHIC_QUESTION_MARKERS: &[&str] = &["may i know your age", "let me know your gender"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeDecision {
    AskAge,
    AskGender,
    LimitReached { limit: u32 },
    Consult(Consultation),
}

/// Directive to call the model with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub text: String,
    /// `text` is the stored initial concern rather than the current message
    pub replays_concern: bool,
    /// The turn was charged against the quota
    pub counted: bool,
}

#[derive(Clone)]
pub struct IntakePolicy {
    classifier: Arc<dyn IntentClassifier>,
    message_limit: u32,
}

impl IntakePolicy {
    pub fn new(classifier: Arc<dyn IntentClassifier>, message_limit: u32) -> Self {
        Self {
            classifier,
            message_limit,
        }
    }

    pub fn with_keywords(message_limit: u32) -> Self {
        Self::new(Arc::new(KeywordClassifier), message_limit)
    }

    pub fn message_limit(&self) -> u32 {
        self.message_limit
    }

    pub fn limit_reply(limit: u32) -> String {
        format!(
            "⚠️ I've reached my API limit for this session. I can only process {} consultations per session to manage costs. Please refresh the page to start a new session or try again later. Thank you for understanding!",
            limit
        )
    }

    pub fn evaluate(&self, message: &str, record: &mut SessionRecord) -> IntakeDecision {
        let health_related = self.classifier.is_health_related(message);

        if health_related && !record.demographics_complete() {
            if record.initial_concern.is_none() || record.concern_addressed {
                debug!("Capturing initial concern before demographics are known");
                record.initial_concern = Some(message.to_string());
                record.concern_addressed = false;
            }
            return Self::ask_missing(record);
        }

        if record.age.is_none() {
            record.age = extract_age(message);
        }
        if record.gender.is_none() {
            record.gender = extract_gender(message);
        }

        if health_related && !record.demographics_complete() {
            return Self::ask_missing(record);
        }

        // A fresh health message after the last concern was answered starts a new topic
        if health_related && record.concern_addressed {
            record.initial_concern = Some(message.to_string());
            record.concern_addressed = false;
        }

        let counted = if Self::is_demographic_turn(message, record) {
            debug!("Not incrementing message count for demographic turn");
            false
        } else {
            if record.message_count >= self.message_limit {
                info!(
                    "Message limit reached ({}/{})",
                    record.message_count, self.message_limit
                );
                return IntakeDecision::LimitReached {
                    limit: self.message_limit,
                };
            }
            record.message_count += 1;
            debug!("Message count incremented to {}", record.message_count);
            true
        };

        if let Some(concern) = record.pending_concern() {
            if !record.demographics_complete() {
                return Self::ask_missing(record);
            }
            return IntakeDecision::Consult(Consultation {
                text: concern.to_string(),
                replays_concern: true,
                counted,
            });
        }

        IntakeDecision::Consult(Consultation {
            text: message.to_string(),
            replays_concern: false,
            counted,
        })
    }

    /// Bookkeeping once the model has been called for `consultation`
    pub fn record_exchange(
        &self,
        record: &mut SessionRecord,
        consultation: &Consultation,
        reply: &GatewayReply,
    ) {
        let GatewayReply::Generated(text) = reply else {
            return;
        };

        if consultation.replays_concern {
            record.concern_addressed = true;
            record.initial_concern = None;
        }
        record.history.push(ChatMessage::user(consultation.text.clone()));
        record.history.push(ChatMessage::assistant(text.clone()));
    }

    fn ask_missing(record: &SessionRecord) -> IntakeDecision {
        if record.age.is_none() {
            IntakeDecision::AskAge
        } else {
            IntakeDecision::AskGender
        }
    }

    fn is_demographic_turn(message: &str, record: &SessionRecord) -> bool {
        if !record.demographics_complete() {
            return true;
        }
        let lower = message.to_lowercase();
        DEMOGRAPHIC_QUESTION_MARKERS
            .iter()
            .any(|marker| lower.contains(marker))
    }
}

impl IntakeDecision {
    pub fn canned_reply(&self) -> Option<String> {
        match self {
            IntakeDecision::AskAge => Some(ASK_AGE_REPLY.to_string()),
            IntakeDecision::AskGender => Some(ASK_GENDER_REPLY.to_string()),
            IntakeDecision::LimitReached { limit } => Some(IntakePolicy::limit_reply(*limit)),
            IntakeDecision::Consult(_) => None,
        }
    }
}
