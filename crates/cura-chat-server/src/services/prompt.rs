use crate::services::conversation::SessionRecord;
use crate::services::gateway::GatewayRequest;
use crate::services::medicine::MedicineTable;

const DEFAULT_PERSONA: &str = include_str!("../../prompts/persona.txt");
const TABLE_PLACEHOLDER: &str = "{{MEDICINE_TABLE}}";

/// Turns a session record and the text to send into a gateway request
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_instruction: String,
    supports_system_instruction: bool,
}

impl PromptBuilder {
    pub fn new(
        persona: Option<&str>,
        table: &MedicineTable,
        supports_system_instruction: bool,
    ) -> Self {
        let persona = persona.unwrap_or(DEFAULT_PERSONA);
        Self {
            system_instruction: persona.replace(TABLE_PLACEHOLDER, &table.render()),
            supports_system_instruction,
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// One line telling the model what is already known about the user
    pub fn context_note(record: &SessionRecord) -> Option<String> {
        let (age, gender) = (record.age?, record.gender?);
        Some(format!(
            "The user is a {} year old {}. DO NOT ask for age or gender again as this information has already been provided.",
            age, gender
        ))
    }

    pub fn build(&self, record: &SessionRecord, text: &str) -> GatewayRequest {
        let mut prompt = String::new();

        if !self.supports_system_instruction {
            prompt.push_str(&self.system_instruction);
            prompt.push_str("\n\n");
        }
        if let Some(note) = Self::context_note(record) {
            prompt.push_str(&note);
            prompt.push('\n');
        }
        prompt.push_str("User: ");
        prompt.push_str(text);

        GatewayRequest {
            system_instruction: self
                .supports_system_instruction
                .then(|| self.system_instruction.clone()),
            history: record.history.clone(),
            prompt,
        }
    }
}
