// Response generator: generative service with template fallback

use serde::Serialize;
use std::sync::Arc;

use super::prompt::system_prompt;
use super::templates::TemplatePicker;
use crate::config::ClaudeSettings;
use crate::emotion::EmotionLabel;
use crate::errors::ServiceError;
use crate::providers::{ClaudeProvider, LlmProvider, ProviderRequest};

/// Where the final response text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    ExternalService,
    TemplateFallback,
    /// Fixed safety message for crisis input
    CrisisOverride,
    /// Fixed greeting for empty input
    Greeting,
}

impl ResponseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSource::ExternalService => "external_service",
            ResponseSource::TemplateFallback => "template_fallback",
            ResponseSource::CrisisOverride => "crisis_override",
            ResponseSource::Greeting => "greeting",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ResponseSource::ExternalService => "Claude API",
            ResponseSource::TemplateFallback => "Template Fallback",
            ResponseSource::CrisisOverride => "Crisis Protocol",
            ResponseSource::Greeting => "Greeting",
        }
    }
}

/// Produces reply text; never fails
pub struct ResponseGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
    max_tokens: u32,
    temperature: f32,
    picker: TemplatePicker,
}

impl ResponseGenerator {
    pub fn new(
        provider: Option<Arc<dyn LlmProvider>>,
        settings: &ClaudeSettings,
        picker: TemplatePicker,
    ) -> Self {
        Self {
            provider,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            picker,
        }
    }

    /// Build from settings; the Claude provider exists only when a key is set
    pub fn from_settings(settings: &ClaudeSettings, template_seed: Option<u64>) -> Self {
        let provider = ClaudeProvider::from_settings(settings)
            .map(|p| Arc::new(p) as Arc<dyn LlmProvider>);
        Self::new(provider, settings, TemplatePicker::from_seed(template_seed))
    }

    /// Template-only generator
    pub fn templates_only(picker: TemplatePicker) -> Self {
        Self::new(None, &ClaudeSettings::default(), picker)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate a reply for the message given its detected emotion
    pub async fn generate(
        &self,
        text: &str,
        label: EmotionLabel,
        confidence: f64,
    ) -> (String, ResponseSource) {
        match self.generate_external(text, label, confidence).await {
            Ok(reply) => (reply, ResponseSource::ExternalService),
            Err(e) => {
                if e.is_not_configured() {
                    tracing::debug!("Using template reply: {}", e);
                } else {
                    tracing::warn!("Generative service failed, using template reply: {}", e);
                }
                (
                    self.picker.pick(label).to_string(),
                    ResponseSource::TemplateFallback,
                )
            }
        }
    }

    async fn generate_external(
        &self,
        text: &str,
        label: EmotionLabel,
        confidence: f64,
    ) -> Result<String, ServiceError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(ServiceError::NotConfigured("generative service"))?;

        let request = ProviderRequest::new(text)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_system(system_prompt(label, confidence));

        let response = provider.send_message(&request).await?;

        let reply = response
            .first_text()
            .ok_or_else(|| ServiceError::Malformed("response has no text content".to_string()))?;

        tracing::info!(provider = provider.name(), "Generated reply");
        Ok(reply.to_string())
    }
}
