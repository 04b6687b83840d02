// Crisis phrase detector
//
// Literal, case-insensitive substring matching. No tokenization, stemming,
// or negation handling: "I don't want to die" still matches.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::crisis_keywords_error;

/// Built-in crisis indicator phrases (lower-case)
pub const DEFAULT_CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "better off dead",
    "self harm",
    "hurt myself",
    "cut myself",
    "end it all",
    "no point living",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisKeywords {
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CrisisDetector {
    /// Stored lower-cased so matching only lowers the input
    phrases: Vec<String>,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::from_phrases(DEFAULT_CRISIS_PHRASES.iter().copied())
    }
}

impl CrisisDetector {
    /// Build a detector from an explicit phrase list
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    /// Load crisis phrases from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| crisis_keywords_error(&path.display().to_string()))?;

        let keywords: CrisisKeywords = serde_json::from_str(&contents)
            .with_context(|| crisis_keywords_error(&path.display().to_string()))?;

        // Blank entries are dropped, so check after normalizing
        let detector = Self::from_phrases(keywords.phrases);
        if detector.phrases().is_empty() {
            anyhow::bail!(
                "{}\n\nThe phrase list is empty",
                crisis_keywords_error(&path.display().to_string())
            );
        }

        Ok(detector)
    }

    /// Detect if text contains a crisis phrase
    pub fn detect_crisis(&self, text: &str) -> bool {
        match self.matched_phrase(text) {
            Some(phrase) => {
                tracing::warn!("Crisis detected: phrase '{}'", phrase);
                true
            }
            None => false,
        }
    }

    /// First configured phrase found in the text, if any
    pub fn matched_phrase(&self, text: &str) -> Option<&str> {
        let text_lower = text.to_lowercase();
        self.phrases
            .iter()
            .find(|phrase| text_lower.contains(phrase.as_str()))
            .map(String::as_str)
    }

    /// Get all phrases (for display purposes)
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}
