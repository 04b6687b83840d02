// Emotion detection
//
// A model-backed classifier when one is configured, otherwise (or on any
// model failure) a keyword-frequency fallback.

mod classifier;
mod keywords;
mod label;
mod model;

pub use classifier::EmotionClassifier;
pub use keywords::{classify_by_keywords, keyword_scores, KEYWORD_TABLE, NEUTRAL_CONFIDENCE};
pub use label::{DetectionMethod, DetectionResult, EmotionLabel, EmotionScores, UnknownLabel};
pub use model::{EmotionModel, HuggingFaceModel, LabelScore};
