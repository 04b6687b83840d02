// Pipeline against a mock generative service
//
// Exercises the real Claude provider over HTTP so status and body
// failures are checked end to end.

use heartline::config::{ClaudeSettings, Config};
use heartline::emotion::EmotionLabel;
use heartline::pipeline::ResolutionPipeline;
use heartline::responder::{templates_for, ResponseSource};

fn config_for(server_url: &str) -> Config {
    Config {
        claude: ClaudeSettings {
            api_key: Some("sk-test".to_string()),
            base_url: format!("{}/v1/messages", server_url),
            ..Default::default()
        },
        template_seed: Some(3),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_service_reply_is_used() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "sk-test")
        .match_header("anthropic-version", "2023-06-01")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "claude-3-haiku-20240307",
            "max_tokens": 200,
            "messages": [{"role": "user", "content": "I'm so excited about my promotion at work!"}]
        })))
        .with_status(200)
        .with_body(r#"{"id":"msg_1","model":"claude-3-haiku-20240307","content":[{"type":"text","text":"Congratulations! 🎉 You earned it."}]}"#)
        .create_async()
        .await;

    let pipeline = ResolutionPipeline::from_config(&config_for(&server.url())).unwrap();
    let outcome = pipeline
        .resolve("I'm so excited about my promotion at work!")
        .await;

    mock.assert_async().await;
    assert_eq!(outcome.source, ResponseSource::ExternalService);
    assert_eq!(outcome.response, "Congratulations! 🎉 You earned it.");
}

#[tokio::test]
async fn test_service_error_status_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(529)
        .with_body(r#"{"type":"error","error":{"type":"overloaded_error"}}"#)
        .expect(1)
        .create_async()
        .await;

    let pipeline = ResolutionPipeline::from_config(&config_for(&server.url())).unwrap();
    let outcome = pipeline.resolve("I'm so excited about my promotion at work!").await;

    // Single attempt, no retries
    mock.assert_async().await;
    assert_eq!(outcome.source, ResponseSource::TemplateFallback);
    assert!(templates_for(EmotionLabel::Joy).contains(&outcome.response.as_str()));
}

#[tokio::test]
async fn test_service_malformed_body_falls_back() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_body(r#"{"content": "not a list"}"#)
        .create_async()
        .await;

    let pipeline = ResolutionPipeline::from_config(&config_for(&server.url())).unwrap();
    let outcome = pipeline.resolve("so angry right now").await;

    assert_eq!(outcome.source, ResponseSource::TemplateFallback);
    assert!(templates_for(EmotionLabel::Anger).contains(&outcome.response.as_str()));
}

#[tokio::test]
async fn test_crisis_never_reaches_service() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .expect(0)
        .create_async()
        .await;

    let pipeline = ResolutionPipeline::from_config(&config_for(&server.url())).unwrap();
    let outcome = pipeline.resolve("I want to end my life").await;

    mock.assert_async().await;
    assert!(outcome.crisis);
}
