// End-to-end tests for the resolution pipeline
//
// Collaborators are swapped for counting mocks so the tests can check
// which stages ran.

use async_trait::async_trait;
use heartline::crisis::{CrisisDetector, CRISIS_RESPONSE};
use heartline::emotion::{
    DetectionMethod, EmotionClassifier, EmotionLabel, EmotionModel, LabelScore,
};
use heartline::errors::ServiceError;
use heartline::pipeline::{ResolutionPipeline, GREETING};
use heartline::providers::{ContentBlock, LlmProvider, ProviderRequest, ProviderResponse};
use heartline::responder::{templates_for, ResponseGenerator, ResponseSource, TemplatePicker};
use heartline::config::ClaudeSettings;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Emotion model returning fixed scores and counting calls
struct CountingModel {
    scores: Vec<(&'static str, f64)>,
    calls: AtomicUsize,
}

impl CountingModel {
    fn new(scores: Vec<(&'static str, f64)>) -> Self {
        Self {
            scores,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EmotionModel for CountingModel {
    async fn scores(&self, _text: &str) -> Result<Vec<LabelScore>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .scores
            .iter()
            .map(|(label, score)| LabelScore {
                label: label.to_string(),
                score: *score,
            })
            .collect())
    }

    fn model_id(&self) -> &str {
        "test/emotion-model"
    }
}

/// Provider that either replies or fails, counting calls
struct CountingProvider {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl CountingProvider {
    fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmProvider for CountingProvider {
    async fn send_message(
        &self,
        _request: &ProviderRequest,
    ) -> Result<ProviderResponse, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(text) => Ok(ProviderResponse {
                id: "msg_test".to_string(),
                model: "test".to_string(),
                content: vec![ContentBlock::Text { text: text.clone() }],
                stop_reason: Some("end_turn".to_string()),
            }),
            None => Err(ServiceError::Timeout),
        }
    }

    fn name(&self) -> &str {
        "counting"
    }

    fn default_model(&self) -> &str {
        "test"
    }
}

fn offline_pipeline() -> ResolutionPipeline {
    ResolutionPipeline::new(
        CrisisDetector::default(),
        EmotionClassifier::keyword_only(),
        ResponseGenerator::templates_only(TemplatePicker::seeded(11)),
    )
}

fn instrumented_pipeline(
    model: Arc<CountingModel>,
    provider: Arc<CountingProvider>,
) -> ResolutionPipeline {
    ResolutionPipeline::new(
        CrisisDetector::default(),
        EmotionClassifier::with_model(model),
        ResponseGenerator::new(
            Some(provider as Arc<dyn LlmProvider>),
            &ClaudeSettings::default(),
            TemplatePicker::seeded(11),
        ),
    )
}

#[tokio::test]
async fn test_promotion_message_without_credential() {
    let pipeline = offline_pipeline();
    let outcome = pipeline
        .resolve("I'm so excited about my promotion at work!")
        .await;

    let detection = outcome.detection.expect("non-empty input is classified");
    assert_eq!(detection.label, EmotionLabel::Joy);
    assert_eq!(detection.method, DetectionMethod::KeywordFallback);
    assert_eq!(outcome.source, ResponseSource::TemplateFallback);
    assert!(templates_for(EmotionLabel::Joy).contains(&outcome.response.as_str()));
    assert!(!outcome.crisis);
}

#[tokio::test]
async fn test_kill_myself_is_crisis_regardless_of_classifier() {
    let model = Arc::new(CountingModel::new(vec![("joy", 0.99)]));
    let provider = Arc::new(CountingProvider::replying("should never be used"));
    let pipeline = instrumented_pipeline(model.clone(), provider.clone());

    let outcome = pipeline.resolve("I want to kill myself").await;

    assert!(outcome.crisis);
    assert_eq!(outcome.response, CRISIS_RESPONSE);
    assert_eq!(outcome.source, ResponseSource::CrisisOverride);
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_crisis_phrases_case_insensitive_anywhere() {
    let pipeline = offline_pipeline();
    for text in [
        "SUICIDE",
        "honestly I'd be Better Off Dead",
        "I keep thinking I should End It All, but I'm happy otherwise",
        "self harm",
    ] {
        let outcome = pipeline.resolve(text).await;
        assert!(outcome.crisis, "expected crisis for {:?}", text);
        assert_eq!(outcome.response, CRISIS_RESPONSE);
    }
}

#[tokio::test]
async fn test_empty_input_skips_classification_and_generation() {
    let model = Arc::new(CountingModel::new(vec![("joy", 0.9)]));
    let provider = Arc::new(CountingProvider::replying("hi"));
    let pipeline = instrumented_pipeline(model.clone(), provider.clone());

    for raw in ["", "   ", "\n\t"] {
        let outcome = pipeline.resolve(raw).await;
        assert_eq!(outcome.response, GREETING);
        assert_eq!(outcome.source, ResponseSource::Greeting);
        assert!(outcome.detection.is_none());
        assert!(!outcome.crisis);
    }

    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_model_and_service_path() {
    let model = Arc::new(CountingModel::new(vec![
        ("sadness", 0.88),
        ("neutral", 0.07),
        ("fear", 0.05),
    ]));
    let provider = Arc::new(CountingProvider::replying(
        "I'm so sorry you're carrying this. 💙",
    ));
    let pipeline = instrumented_pipeline(model.clone(), provider.clone());

    let outcome = pipeline.resolve("Feeling really down after the breakup").await;

    let detection = outcome.detection.unwrap();
    assert_eq!(detection.label, EmotionLabel::Sadness);
    assert_eq!(detection.method, DetectionMethod::Model);
    assert_eq!(outcome.source, ResponseSource::ExternalService);
    assert_eq!(outcome.response, "I'm so sorry you're carrying this. 💙");
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_service_failure_falls_back_to_template() {
    let model = Arc::new(CountingModel::new(vec![("anger", 0.7), ("neutral", 0.3)]));
    let provider = Arc::new(CountingProvider::unreachable());
    let pipeline = instrumented_pipeline(model, provider.clone());

    let outcome = pipeline
        .resolve("This traffic is making me so frustrated")
        .await;

    assert_eq!(outcome.source, ResponseSource::TemplateFallback);
    assert!(templates_for(EmotionLabel::Anger).contains(&outcome.response.as_str()));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_offline_reply_always_from_label_templates() {
    let pipeline = offline_pipeline();
    let messages = [
        "I'm nervous about my presentation tomorrow",
        "I love spending quality time with my family",
        "wow, I did not see that coming",
        "that was gross",
        "the bus was on time",
    ];
    for text in messages {
        let outcome = pipeline.resolve(text).await;
        let label = outcome.detection.as_ref().unwrap().label;
        assert_eq!(outcome.source, ResponseSource::TemplateFallback);
        assert!(
            templates_for(label).contains(&outcome.response.as_str()),
            "reply for {:?} not in {} templates",
            text,
            label
        );
    }
}

#[tokio::test]
async fn test_respond_analysis_text() {
    let pipeline = offline_pipeline();
    let (_, analysis) = pipeline
        .respond("I'm so excited about my promotion at work!")
        .await;

    assert!(analysis.starts_with("**Detected Emotion:** Joy (17% confidence)\n"));
    assert!(analysis.contains("**Detection Method:** Keyword Fallback\n"));
    assert!(analysis.contains("**Response Source:** Template Fallback\n"));
    assert!(analysis.contains("• Joy: ██░░░░░░░░░░░░░ 16.7%"));
}

#[tokio::test]
async fn test_respond_json_empty_input() {
    let pipeline = offline_pipeline();
    assert_eq!(
        pipeline.respond_json("  ").await,
        json!({"error": "No message provided"})
    );
}

#[tokio::test]
async fn test_respond_json_crisis() {
    let pipeline = offline_pipeline();
    let value = pipeline.respond_json("  I want to kill myself ").await;

    assert_eq!(value["input"], "I want to kill myself");
    assert_eq!(value["crisis_detected"], true);
    assert_eq!(value["safety_warning"], true);
    assert_eq!(value["response"], CRISIS_RESPONSE);
    assert_eq!(value["emotion_analysis"]["primary_emotion"], "crisis");
    assert_eq!(value["emotion_analysis"]["confidence"], 1.0);
}

#[tokio::test]
async fn test_respond_json_offline() {
    let pipeline = offline_pipeline();
    let value = pipeline.respond_json("the bus was on time").await;

    assert_eq!(value["crisis_detected"], false);
    assert_eq!(value["safety_warning"], false);
    assert_eq!(value["response_source"], "template_fallback");
    assert_eq!(value["emotion_analysis"]["primary_emotion"], "neutral");
    assert_eq!(value["emotion_analysis"]["confidence"], 0.5);
    assert_eq!(value["emotion_analysis"]["detection_method"], "keyword_fallback");
    assert_eq!(value["emotion_analysis"]["all_emotions"], json!({"neutral": 0.5}));
    assert!(value["emotion_analysis"].get("model").is_none());
}

#[tokio::test]
async fn test_respond_json_reports_model() {
    let model = Arc::new(CountingModel::new(vec![("joy", 0.6), ("surprise", 0.4)]));
    let provider = Arc::new(CountingProvider::replying("Amazing! 🎉"));
    let pipeline = instrumented_pipeline(model, provider);

    let value = pipeline.respond_json("I got the job").await;
    assert_eq!(value["emotion_analysis"]["detection_method"], "distilroberta_transformer");
    assert_eq!(value["emotion_analysis"]["model"], "test/emotion-model");
    assert_eq!(value["response_source"], "external_service");
    assert_eq!(value["response"], "Amazing! 🎉");
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let pipeline = Arc::new(offline_pipeline());

    let handles: Vec<_> = ["I'm scared", "I'm so happy", "want to die", ""]
        .into_iter()
        .map(|text| {
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move { (text, pipeline.resolve(text).await) })
        })
        .collect();

    for handle in handles {
        let (text, outcome) = handle.await.unwrap();
        match text {
            "I'm scared" => assert_eq!(outcome.detection.unwrap().label, EmotionLabel::Fear),
            "I'm so happy" => assert_eq!(outcome.detection.unwrap().label, EmotionLabel::Joy),
            "want to die" => assert!(outcome.crisis),
            _ => assert!(outcome.is_greeting()),
        }
    }
}
