// Resolution outcome: the single result of one pipeline run

use crate::emotion::DetectionResult;
use crate::responder::{MeditationVideo, ResponseSource};

/// Immutable result of resolving one message
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionOutcome {
    /// Trimmed input ("" for the greeting outcome)
    pub input: String,
    pub response: String,
    pub source: ResponseSource,
    /// `None` only for the greeting outcome, where nothing was classified
    pub detection: Option<DetectionResult>,
    pub crisis: bool,
    /// Optional guided meditation; never set for crisis or greeting outcomes
    pub meditation: Option<MeditationVideo>,
}

impl ResolutionOutcome {
    pub fn is_greeting(&self) -> bool {
        self.source == ResponseSource::Greeting
    }
}
