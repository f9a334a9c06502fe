pub mod conversation;
pub mod gateway;
pub mod gemini;
pub mod intent;
pub mod medicine;
pub mod prompt;

pub use conversation::ConversationManager;
pub use gateway::{CredentialPool, ModelGateway};
pub use gemini::GeminiClient;
pub use medicine::MedicineTable;
pub use prompt::PromptBuilder;
