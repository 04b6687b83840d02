// Model-backed emotion classification
//
// The model itself is a black box behind `EmotionModel`. The shipped
// implementation calls a hosted text-classification endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::EmotionModelSettings;
use crate::errors::ServiceError;

/// One (label, score) pair as reported by a model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Trait for model-backed emotion classifiers
#[async_trait]
pub trait EmotionModel: Send + Sync {
    /// Score the text against every label the model knows
    async fn scores(&self, text: &str) -> Result<Vec<LabelScore>, ServiceError>;

    /// Model identifier reported in output
    fn model_id(&self) -> &str;
}

/// Hosted inference endpoint for a text-classification model
#[derive(Clone)]
pub struct HuggingFaceModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl HuggingFaceModel {
    pub fn new(api_key: String, settings: &EmotionModelSettings) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    /// Build from settings, or `None` when no credential is configured
    pub fn from_settings(settings: &EmotionModelSettings) -> Option<Self> {
        let api_key = settings.api_key.clone()?;
        match Self::new(api_key, settings) {
            Ok(model) => Some(model),
            Err(e) => {
                tracing::warn!("Emotion model unavailable: {}", e);
                None
            }
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

/// The endpoint answers either `[[...]]` (one list per input) or `[...]`
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

#[async_trait]
impl EmotionModel for HuggingFaceModel {
    async fn scores(&self, text: &str) -> Result<Vec<LabelScore>, ServiceError> {
        tracing::debug!("Requesting emotion scores from {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| ServiceError::Malformed(format!("emotion scores: {}", e)))?;

        let scores = match parsed {
            InferenceResponse::Batched(mut batches) => {
                if batches.is_empty() {
                    Vec::new()
                } else {
                    batches.swap_remove(0)
                }
            }
            InferenceResponse::Flat(scores) => scores,
        };

        if scores.is_empty() {
            return Err(ServiceError::Malformed("no emotion scores returned".to_string()));
        }

        Ok(scores)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
