use pretty_assertions::assert_eq;
use tranzify::agent::{Runner, TRANSLATOR_INSTRUCTIONS};

mod common;
use common::{MockLlmClient, create_mock_agent, create_mock_chat_response};

/// One submission makes exactly one model call with the fixed prompt.
#[tokio::test]
async fn test_run_issues_single_call_with_fixed_instructions() {
    let mock = MockLlmClient::new().with_responses(vec![create_mock_chat_response("kya haal hai?")]);
    let agent = create_mock_agent(&mock);

    let output = Runner::run(&agent, "how are you?").await.unwrap();

    assert_eq!(output, "kya haal hai?");

    let requests = mock.get_requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[0].content, TRANSLATOR_INSTRUCTIONS);
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[1].content, "how are you?");
}

#[tokio::test]
async fn test_run_returns_completion_verbatim() {
    let mock = MockLlmClient::new()
        .with_responses(vec![create_mock_chat_response("  Main theek hoon.\n")]);
    let agent = create_mock_agent(&mock);

    let output = Runner::run(&agent, "I am fine.").await.unwrap();

    assert_eq!(output, "  Main theek hoon.\n");
}

#[tokio::test]
async fn test_run_propagates_model_failure() {
    let mock = MockLlmClient::new().with_error("connection reset by peer");
    let agent = create_mock_agent(&mock);

    let err = Runner::run(&agent, "hello").await.unwrap_err();

    assert!(err.is_model_failure());
    assert!(err.to_string().contains("connection reset by peer"));
    assert_eq!(mock.call_count(), 1);
}

/// Unsupported languages are the model's call; whatever it says is passed through.
#[tokio::test]
async fn test_run_passes_model_refusal_through() {
    let mock = MockLlmClient::new().with_responses(vec![create_mock_chat_response(
        "Error: only English and Roman Urdu are supported.",
    )]);
    let agent = create_mock_agent(&mock);

    let output = Runner::run(&agent, "Bonjour tout le monde").await.unwrap();

    assert_eq!(output, "Error: only English and Roman Urdu are supported.");
}

#[tokio::test]
async fn test_round_trip_feeds_previous_output_back() {
    let mock = MockLlmClient::new().with_responses(vec![
        create_mock_chat_response("kya haal hai?"),
        create_mock_chat_response("how are you?"),
    ]);
    let agent = create_mock_agent(&mock);

    let urdu = Runner::run(&agent, "how are you?").await.unwrap();
    let english = Runner::run(&agent, &urdu).await.unwrap();

    assert_eq!(english, "how are you?");

    let requests = mock.get_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].messages[1].content, "kya haal hai?");
}

#[tokio::test]
async fn test_runs_are_independent_after_failure() {
    let mock = MockLlmClient::new().with_error("timeout");
    let agent = create_mock_agent(&mock);

    assert!(Runner::run(&agent, "first").await.is_err());

    mock.set_error(None);
    mock.add_response(create_mock_chat_response("doosra"));

    assert_eq!(Runner::run(&agent, "second").await.unwrap(), "doosra");
    assert_eq!(mock.call_count(), 2);
}
