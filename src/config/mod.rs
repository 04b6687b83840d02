// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{
    apply_env, default_config_path, load_config, load_from_path, CLAUDE_KEY_VARS,
    HUGGINGFACE_KEY_VAR,
};
pub use settings::{
    ClaudeSettings, Config, EmotionModelSettings, MeditationSettings, ServerConfig,
};
