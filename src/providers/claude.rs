// Claude API provider implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::types::{ProviderRequest, ProviderResponse};
use super::LlmProvider;
use crate::config::ClaudeSettings;
use crate::errors::ServiceError;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API provider
///
/// One attempt per request, bounded by the client timeout. No retries.
#[derive(Clone)]
pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    api_url: String,
    default_model: String,
}

impl ClaudeProvider {
    /// Create a new Claude provider
    pub fn new(api_key: String, settings: &ClaudeSettings) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            api_url: settings.base_url.clone(),
            default_model: settings.model.clone(),
        })
    }

    /// Build from settings, or `None` when no credential is configured
    pub fn from_settings(settings: &ClaudeSettings) -> Option<Self> {
        let api_key = settings.api_key.clone()?;
        match Self::new(api_key, settings) {
            Ok(provider) => Some(provider),
            Err(e) => {
                tracing::warn!("Claude provider unavailable: {}", e);
                None
            }
        }
    }

    /// Create with custom default model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    fn resolve_model(&self, request: &ProviderRequest) -> ProviderRequest {
        let mut request = request.clone();
        if request.model.is_empty() {
            request.model = self.default_model.clone();
        }
        request
    }
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    async fn send_message(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ServiceError> {
        let request = self.resolve_model(request);

        tracing::debug!("Sending request to Claude API: {:?}", request);

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        // Only 200 carries a message body
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let message_response: ProviderResponse = serde_json::from_str(&body)
            .map_err(|e| ServiceError::Malformed(format!("Claude API response: {}", e)))?;

        tracing::debug!("Received response: {:?}", message_response);

        Ok(message_response)
    }

    fn name(&self) -> &str {
        "claude"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}
