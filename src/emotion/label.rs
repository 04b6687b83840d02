// Emotion labels, score distributions, and detection results

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of emotion labels plus the crisis sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Neutral,
    Love,
    /// Sentinel for the crisis override, never produced by a classifier
    Crisis,
}

impl EmotionLabel {
    /// Canonical order; ties between equal scores go to the earlier label
    pub const ALL: [EmotionLabel; 8] = [
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
        EmotionLabel::Anger,
        EmotionLabel::Fear,
        EmotionLabel::Surprise,
        EmotionLabel::Disgust,
        EmotionLabel::Neutral,
        EmotionLabel::Love,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Joy => "joy",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Anger => "anger",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Love => "love",
            EmotionLabel::Crisis => "crisis",
        }
    }

    /// Capitalized name for human-readable output
    pub fn title(&self) -> &'static str {
        match self {
            EmotionLabel::Joy => "Joy",
            EmotionLabel::Sadness => "Sadness",
            EmotionLabel::Anger => "Anger",
            EmotionLabel::Fear => "Fear",
            EmotionLabel::Surprise => "Surprise",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Neutral => "Neutral",
            EmotionLabel::Love => "Love",
            EmotionLabel::Crisis => "Crisis",
        }
    }

    /// Position in the canonical order (crisis sorts last)
    fn rank(&self) -> usize {
        Self::ALL
            .iter()
            .position(|label| label == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emotion label '{0}'")]
pub struct UnknownLabel(pub String);

impl FromStr for EmotionLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .chain(std::iter::once(&EmotionLabel::Crisis))
            .find(|label| label.as_str() == lower)
            .copied()
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl Serialize for EmotionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Label → score mapping, kept in insertion order
///
/// Scores are in [0, 1] and need not sum to 1. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionScores {
    entries: Vec<(EmotionLabel, f64)>,
}

impl EmotionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distribution holding a single entry
    pub fn single(label: EmotionLabel, score: f64) -> Self {
        let mut scores = Self::new();
        scores.insert(label, score);
        scores
    }

    /// Set a label's score, replacing any earlier value in place
    pub fn insert(&mut self, label: EmotionLabel, score: f64) {
        let score = score.clamp(0.0, 1.0);
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((label, score)),
        }
    }

    pub fn get(&self, label: EmotionLabel) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, score)| *score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Re-order entries into canonical label order
    pub fn canonicalize(&mut self) {
        self.entries.sort_by_key(|(label, _)| label.rank());
    }

    /// Highest-scoring entry; on ties the earliest entry wins
    pub fn top(&self) -> Option<(EmotionLabel, f64)> {
        let mut best: Option<(EmotionLabel, f64)> = None;
        for (label, score) in self.iter() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((label, score)),
            }
        }
        best
    }

    /// Entries sorted by descending score (stable for ties)
    pub fn ranked(&self) -> Vec<(EmotionLabel, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl Serialize for EmotionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, score) in &self.entries {
            map.serialize_entry(label.as_str(), score)?;
        }
        map.end()
    }
}

/// Which path produced a detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// Model-backed classifier
    Model,
    /// Keyword-frequency fallback
    KeywordFallback,
    /// Crisis phrase override
    CrisisKeywords,
}

impl DetectionMethod {
    /// Identifier used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Model => "distilroberta_transformer",
            DetectionMethod::KeywordFallback => "keyword_fallback",
            DetectionMethod::CrisisKeywords => "keyword_matching",
        }
    }

    /// Human-readable description used in analysis text
    pub fn describe(&self) -> &'static str {
        match self {
            DetectionMethod::Model => "Transformer Model (DistilRoBERTa)",
            DetectionMethod::KeywordFallback => "Keyword Fallback",
            DetectionMethod::CrisisKeywords => "Crisis Keyword Matching",
        }
    }
}

/// Outcome of classifying one message; never mutated after construction
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub label: EmotionLabel,
    pub confidence: f64,
    pub scores: EmotionScores,
    pub method: DetectionMethod,
    /// Model identifier when `method` is `Model`
    pub model: Option<String>,
}

impl DetectionResult {
    /// The fixed result for crisis input
    pub fn crisis() -> Self {
        Self {
            label: EmotionLabel::Crisis,
            confidence: 1.0,
            scores: EmotionScores::single(EmotionLabel::Crisis, 1.0),
            method: DetectionMethod::CrisisKeywords,
            model: None,
        }
    }
}
