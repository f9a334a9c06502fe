//! Message classification and demographic extraction.

use serde::{Deserialize, Serialize};

/// Vocabulary that marks a message as health-related (substring match)
pub const HEALTH_KEYWORDS: &[&str] = &[
    "headache", "pain", "fever", "sick", "ill", "symptom", "problem", "hurt", "ache", "nausea",
    "dizzy", "cough", "cold", "flu", "stomach", "chest", "back", "joint", "muscle", "throat",
    "ear", "eye", "nose", "skin", "rash", "allergy", "medicine", "medication", "pill", "tablet",
    "dose", "dosage", "vomit", "diarrhea", "constipation", "bloating", "gas", "heartburn",
    "acid", "indigestion", "swelling", "inflammation", "infection", "bacterial", "viral",
    "fungal", "itchy", "burning", "tingling", "numbness", "weakness", "fatigue", "tired",
    "exhausted", "insomnia", "sleep", "appetite", "hungry", "thirsty", "dehydrated", "bleeding",
    "bruise", "cut", "wound", "burn", "sprain", "strain", "fracture", "broken", "dislocation",
    "arthritis", "diabetes", "hypertension", "asthma", "allergic", "reaction", "anaphylaxis",
    "seizure", "convulsion", "migraine", "cluster", "tension", "sinus", "bronchitis",
    "pneumonia", "tonsillitis", "laryngitis", "pharyngitis", "gastritis", "ulcer", "colitis",
    "hepatitis", "kidney", "bladder", "urinary", "uti", "yeast", "candida", "herpes", "warts",
    "mole", "cyst", "tumor", "cancer", "benign", "malignant", "metastasis", "remission",
    "relapse", "chronic", "acute", "subacute", "first aid kit", "tummy", "belly", "abdomen",
    "gut", "digestive", "upset", "unwell", "feeling bad", "not feeling well",
];

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 119;

/// Decides whether a message is about a health concern
pub trait IntentClassifier: Send + Sync {
    fn is_health_related(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl IntentClassifier for KeywordClassifier {
    fn is_health_related(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        HEALTH_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First whitespace-delimited all-digit token whose value is a plausible age.
/// Later tokens are never considered once an earlier one qualifies.
pub fn extract_age(message: &str) -> Option<u8> {
    message
        .split_whitespace()
        .filter(|word| word.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|word| word.parse::<u32>().ok())
        .find(|value| (MIN_AGE as u32..=MAX_AGE as u32).contains(value))
        .map(|value| value as u8)
}

/// Substring match, "male" checked first. Since "female" contains "male",
/// any message mentioning either word yields `Male`.
pub fn extract_gender(message: &str) -> Option<Gender> {
    let lower = message.to_lowercase();

    if lower.contains("male") {
        Some(Gender::Male)
    } else if lower.contains("female") {
        Some(Gender::Female)
    } else {
        None
    }
}
