use serde_json::{Value, json};
use std::sync::Arc;
use tranzify::{
    agent::{Agent, AgentDefinition},
    config::{ApiKey, ModelBinding},
};

use super::mocks::MockLlmClient;

/// Translator agent answering through `mock`.
pub fn create_mock_agent(mock: &MockLlmClient) -> Agent {
    Agent::new(AgentDefinition::translator(), Arc::new(mock.clone()))
}

/// Binding pointing at a local stub server.
pub fn create_test_binding(base_url: &str) -> ModelBinding {
    ModelBinding::new(ApiKey::new("test-api-key"), base_url, "gemini-2.0-flash")
}

/// A chat-completions response body in the OpenAI wire format.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gemini-2.0-flash",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 42, "completion_tokens": 5, "total_tokens": 47 }
    })
}

/// Text between `<span id="{id}">` and the next `</span>`, if present.
pub fn extract_span(body: &str, id: &str) -> Option<String> {
    let open = format!(r#"<span id="{}">"#, id);
    let start = body.find(&open)? + open.len();
    let end = body[start..].find("</span>")? + start;
    Some(body[start..end].to_string())
}
