// Request/response types for the generative service

use serde::{Deserialize, Serialize};

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body sent to the provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRequest {
    /// Model name (empty means the provider default)
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 to 1.0, optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// System instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    pub messages: Vec<ChatMessage>,
}

impl ProviderRequest {
    /// Single-turn request carrying one user message
    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            model: String::new(),
            max_tokens: 200,
            temperature: None,
            system: None,
            messages: vec![ChatMessage::user(user_text)],
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Content block in a provider response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        }
    }
}

/// Response body returned by the provider
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub model: String,

    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl ProviderResponse {
    /// Trimmed text of the first content block, if it is non-empty text
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .first()
            .and_then(ContentBlock::as_text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
