// Configuration structs

use serde::Deserialize;
use std::path::PathBuf;

pub const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const HUGGINGFACE_API_URL: &str = "https://api-inference.huggingface.co";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative-service settings
    pub claude: ClaudeSettings,

    /// Model-backed emotion classifier settings
    pub emotion_model: EmotionModelSettings,

    /// Optional JSON file replacing the built-in crisis phrases
    pub crisis_keywords_path: Option<PathBuf>,

    /// Seed for template selection; unseeded picks use the thread RNG
    pub template_seed: Option<u64>,

    /// Meditation suggestions on replies
    pub meditation: MeditationSettings,

    /// HTTP adapter settings
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClaudeSettings {
    /// Credential; only ever set from the environment
    #[serde(skip)]
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClaudeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "claude-3-haiku-20240307".to_string(),
            max_tokens: 200,
            temperature: 0.8,
            base_url: CLAUDE_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmotionModelSettings {
    /// Credential; only ever set from the environment
    #[serde(skip)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for EmotionModelSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "j-hartmann/emotion-english-distilroberta-base".to_string(),
            base_url: HUGGINGFACE_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MeditationSettings {
    pub enabled: bool,
}

impl Default for MeditationSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}
