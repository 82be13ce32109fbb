use super::types::*;
use crate::{Result, config::ModelBinding};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;

    /// One instruction+input exchange: `instructions` goes in as the system
    /// message, `input` as the user message.
    async fn generate(&self, instructions: &str, input: &str) -> Result<String> {
        let request = ChatCompletionRequest::new(vec![
            ChatMessage::system(instructions),
            ChatMessage::user(input),
        ]);
        self.create_chat_completion(request)
            .await?
            .into_completion_text()
    }
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiClient {
    pub fn new(binding: &ModelBinding) -> Result<Self> {
        let openai_config = OpenAIConfig::new()
            .with_api_key(binding.api_key.expose())
            .with_api_base(&binding.base_url);

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("tranzify/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Zero elapsed-time budget: async-openai gives up after the first attempt.
        let no_retry = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry);

        Ok(Self {
            client,
            model: binding.model.clone(),
            temperature: binding.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(temperature) = request.temperature.or(self.temperature) {
            request_builder.temperature(temperature);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices: Vec<Choice> = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChatMessage::assistant(choice.message.content.unwrap_or_default()),
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}
