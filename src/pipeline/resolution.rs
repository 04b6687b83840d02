// Resolution pipeline
//
// Strict order, no backtracking:
//   1. empty input  -> greeting
//   2. crisis check -> crisis message (overrides everything below)
//   3. classification (never fails)
//   4. response generation (never fails)
//   5. assembly, with an optional meditation suggestion
//
// Stateless: the only shared data are read-only collaborator handles.

use anyhow::Result;
use std::sync::Arc;

use super::analysis::analysis_for;
use super::json::{detection_json, no_message_error, outcome_json};
use super::message::UserMessage;
use super::outcome::ResolutionOutcome;
use crate::config::Config;
use crate::crisis::{CrisisDetector, CRISIS_RESPONSE};
use crate::emotion::{DetectionResult, EmotionClassifier, EmotionModel, HuggingFaceModel};
use crate::responder::{MeditationAdvisor, ResponseGenerator, ResponseSource, TemplatePicker};

/// Reply for empty input
pub const GREETING: &str = "Hello! I'm your emotional support companion. 🌟\n\n\
I use emotion detection for empathetic responses. \
Share what's on your mind!";

pub struct ResolutionPipeline {
    crisis: CrisisDetector,
    classifier: EmotionClassifier,
    responder: ResponseGenerator,
    meditation: Option<MeditationAdvisor>,
}

impl ResolutionPipeline {
    pub fn new(
        crisis: CrisisDetector,
        classifier: EmotionClassifier,
        responder: ResponseGenerator,
    ) -> Self {
        Self {
            crisis,
            classifier,
            responder,
            meditation: None,
        }
    }

    /// Attach meditation suggestions to classified replies
    pub fn with_meditation(mut self, advisor: MeditationAdvisor) -> Self {
        self.meditation = Some(advisor);
        self
    }

    /// Build every collaborator once from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let crisis = match &config.crisis_keywords_path {
            Some(path) => CrisisDetector::load_from_file(path)?,
            None => CrisisDetector::default(),
        };

        let classifier = match HuggingFaceModel::from_settings(&config.emotion_model) {
            Some(model) => {
                tracing::info!(model = model.model_id(), "Emotion model configured");
                EmotionClassifier::with_model(Arc::new(model))
            }
            None => EmotionClassifier::keyword_only(),
        };

        let responder = ResponseGenerator::from_settings(&config.claude, config.template_seed);
        if responder.has_provider() {
            tracing::info!(model = %config.claude.model, "Generative service configured");
        }

        let pipeline = Self::new(crisis, classifier, responder);
        if config.meditation.enabled {
            let picker = TemplatePicker::from_seed(config.template_seed);
            return Ok(pipeline.with_meditation(MeditationAdvisor::new(picker)));
        }
        Ok(pipeline)
    }

    /// Resolve one raw message into exactly one outcome
    pub async fn resolve(&self, raw: &str) -> ResolutionOutcome {
        let Some(message) = UserMessage::parse(raw) else {
            tracing::debug!("Empty input, returning greeting");
            return greeting_outcome();
        };

        if self.crisis.detect_crisis(message.as_str()) {
            return crisis_outcome(message);
        }

        let detection = self.classifier.classify(message.as_str()).await;

        let (response, source) = self
            .responder
            .generate(message.as_str(), detection.label, detection.confidence)
            .await;

        tracing::info!(
            label = %detection.label,
            method = detection.method.as_str(),
            source = source.as_str(),
            "Resolved message"
        );

        let meditation = self
            .meditation
            .as_ref()
            .and_then(|advisor| advisor.suggest(detection.label));

        ResolutionOutcome {
            input: message.as_str().to_string(),
            response,
            source,
            detection: Some(detection),
            crisis: false,
            meditation,
        }
    }

    /// Classification only; crisis phrases still take precedence.
    /// `None` for empty input.
    pub async fn detect(&self, raw: &str) -> Option<DetectionResult> {
        let message = UserMessage::parse(raw)?;
        Some(self.detect_message(&message).await)
    }

    async fn detect_message(&self, message: &UserMessage) -> DetectionResult {
        if self.crisis.detect_crisis(message.as_str()) {
            return DetectionResult::crisis();
        }
        self.classifier.classify(message.as_str()).await
    }

    /// Plain entry point: (response text, analysis text)
    pub async fn respond(&self, raw: &str) -> (String, String) {
        let outcome = self.resolve(raw).await;
        let analysis = analysis_for(&outcome);
        (outcome.response, analysis)
    }

    /// JSON entry point
    pub async fn respond_json(&self, raw: &str) -> serde_json::Value {
        let outcome = self.resolve(raw).await;
        outcome_json(&outcome)
    }

    /// JSON for classification only
    pub async fn detect_json(&self, raw: &str) -> serde_json::Value {
        let Some(message) = UserMessage::parse(raw) else {
            return no_message_error();
        };
        let detection = self.detect_message(&message).await;
        detection_json(message.as_str(), &detection)
    }
}

fn greeting_outcome() -> ResolutionOutcome {
    ResolutionOutcome {
        input: String::new(),
        response: GREETING.to_string(),
        source: ResponseSource::Greeting,
        detection: None,
        crisis: false,
        meditation: None,
    }
}

fn crisis_outcome(message: UserMessage) -> ResolutionOutcome {
    ResolutionOutcome {
        input: message.as_str().to_string(),
        response: CRISIS_RESPONSE.to_string(),
        source: ResponseSource::CrisisOverride,
        detection: Some(DetectionResult::crisis()),
        crisis: true,
        meditation: None,
    }
}
