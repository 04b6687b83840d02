// Emotion classifier: model-backed path with keyword fallback

use std::sync::Arc;

use super::keywords::classify_by_keywords;
use super::label::{DetectionMethod, DetectionResult, EmotionLabel, EmotionScores};
use super::model::{EmotionModel, LabelScore};
use crate::errors::ServiceError;

/// Classifies messages; never fails
///
/// Holds an optional read-only model handle. Without one, or whenever the
/// model errors, the keyword table decides.
#[derive(Clone, Default)]
pub struct EmotionClassifier {
    model: Option<Arc<dyn EmotionModel>>,
}

impl EmotionClassifier {
    /// Keyword-only classifier
    pub fn keyword_only() -> Self {
        Self { model: None }
    }

    pub fn with_model(model: Arc<dyn EmotionModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Classify a message
    pub async fn classify(&self, text: &str) -> DetectionResult {
        match self.classify_with_model(text).await {
            Ok(result) => {
                tracing::info!(
                    label = %result.label,
                    confidence = result.confidence,
                    "Model classification"
                );
                result
            }
            Err(e) => {
                if e.is_not_configured() {
                    tracing::debug!("Using keyword fallback: {}", e);
                } else {
                    tracing::warn!("Emotion model failed, using keyword fallback: {}", e);
                }
                let result = classify_by_keywords(text);
                tracing::info!(
                    label = %result.label,
                    confidence = result.confidence,
                    "Keyword classification"
                );
                result
            }
        }
    }

    async fn classify_with_model(&self, text: &str) -> Result<DetectionResult, ServiceError> {
        let model = self
            .model
            .as_ref()
            .ok_or(ServiceError::NotConfigured("emotion model"))?;

        let raw = model.scores(text).await?;
        let scores = to_emotion_scores(&raw);

        let (label, confidence) = scores.top().ok_or_else(|| {
            ServiceError::Malformed("model returned no recognized emotion labels".to_string())
        })?;

        Ok(DetectionResult {
            label,
            confidence,
            scores,
            method: DetectionMethod::Model,
            model: Some(model.model_id().to_string()),
        })
    }
}

/// Map raw model output onto known labels in canonical order
fn to_emotion_scores(raw: &[LabelScore]) -> EmotionScores {
    let mut scores = EmotionScores::new();
    for entry in raw {
        match entry.label.parse::<EmotionLabel>() {
            Ok(EmotionLabel::Crisis) | Err(_) => {
                tracing::warn!("Ignoring unrecognized model label '{}'", entry.label);
            }
            Ok(label) if entry.score.is_finite() => scores.insert(label, entry.score),
            Ok(label) => {
                tracing::warn!("Ignoring non-finite score for '{}'", label);
            }
        }
    }
    scores.canonicalize();
    scores
}
