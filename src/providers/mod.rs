// Generative text providers
//
// Abstraction over the external text-generation service used to write
// supportive replies. Callers treat every error as "unavailable".

use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod claude;
pub mod types;

pub use claude::ClaudeProvider;
pub use types::{ChatMessage, ContentBlock, ProviderRequest, ProviderResponse};

/// Trait for LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request and wait for the complete response (single attempt)
    async fn send_message(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, ServiceError>;

    /// Get the provider name (e.g., "claude")
    fn name(&self) -> &str;

    /// Get the default model for this provider
    fn default_model(&self) -> &str;
}
