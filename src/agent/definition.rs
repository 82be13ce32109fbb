use crate::{Result, config::ModelBinding, llm::{LlmClient, OpenAiClient}};
use std::sync::Arc;
use tracing::info;

pub const TRANSLATOR_NAME: &str = "Translator Agent";

/// The whole translation policy lives in this prompt; the model is trusted to
/// follow it and nothing checks the output afterwards.
pub const TRANSLATOR_INSTRUCTIONS: &str = "\
You are a smart and accurate language translator.
- Detect if the input is in English or Roman Urdu (Urdu written in Latin script).
- If the input is in English, translate it into Roman Urdu.
- If the input is in Roman Urdu, translate it into proper English.
- You are only limited to translate between English and Roman Urdu — no other languages.
- If the user inputs any language other than English or Roman Urdu, show an error message.
- Only return the translation — no explanation.
";

/// Name and instructions of an agent. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    pub name: String,
    pub instructions: String,
}

impl AgentDefinition {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
        }
    }

    pub fn translator() -> Self {
        Self::new(TRANSLATOR_NAME, TRANSLATOR_INSTRUCTIONS)
    }
}

/// An agent definition bound to the model that answers for it.
pub struct Agent {
    definition: AgentDefinition,
    llm_client: Arc<dyn LlmClient>,
}

impl Agent {
    pub fn new(definition: AgentDefinition, llm_client: Arc<dyn LlmClient>) -> Self {
        Self {
            definition,
            llm_client,
        }
    }

    /// The translator agent talking to the model described by `binding`.
    pub fn translator(binding: &ModelBinding) -> Result<Self> {
        let client = OpenAiClient::new(binding)?;
        info!(
            "Initialized {} with model {}",
            TRANSLATOR_NAME,
            client.model()
        );
        Ok(Self::new(AgentDefinition::translator(), Arc::new(client)))
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &AgentDefinition {
        &self.definition
    }

    pub(crate) async fn respond(&self, input: &str) -> Result<String> {
        self.llm_client
            .generate(&self.definition.instructions, input)
            .await
    }
}
