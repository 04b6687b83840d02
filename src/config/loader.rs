// Configuration loader
// Reads ~/.heartline/config.toml when present, credentials from the environment

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::config_parse_error;

/// Environment variables checked, in order, for the generative-service key
pub const CLAUDE_KEY_VARS: [&str; 2] = ["CLAUDE_API_KEY", "ANTHROPIC_API_KEY"];

/// Environment variable holding the emotion model key
pub const HUGGINGFACE_KEY_VAR: &str = "HUGGINGFACE_API_KEY";

/// Default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".heartline").join("config.toml"))
}

/// Load configuration from the default file (if any) and the environment
///
/// A missing file is not an error; neither are missing credentials.
pub fn load_config() -> Result<Config> {
    let mut config = match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path)?,
        _ => Config::default(),
    };
    apply_env(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// Parse a TOML config file
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!(config_parse_error(&path.display().to_string(), &e.to_string())))
}

/// Fill credentials from an environment lookup; blank values count as absent
pub fn apply_env<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    config.claude.api_key = CLAUDE_KEY_VARS.iter().find_map(|name| non_empty(name));
    config.emotion_model.api_key = non_empty(HUGGINGFACE_KEY_VAR);

    if config.claude.api_key.is_none() {
        tracing::info!("No generative-service key set; replies will come from templates");
    }
    if config.emotion_model.api_key.is_none() {
        tracing::info!("No emotion model key set; using keyword detection");
    }
}
