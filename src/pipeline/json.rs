// JSON rendering for the JSON entry point

use serde::Serialize;
use serde_json::{json, Value};

use super::outcome::ResolutionOutcome;
use crate::emotion::{DetectionResult, EmotionLabel, EmotionScores};
use crate::responder::{MeditationVideo, ResponseSource};

/// Error message returned for empty input
pub const NO_MESSAGE_ERROR: &str = "No message provided";

#[derive(Debug, Serialize)]
struct EmotionAnalysis<'a> {
    primary_emotion: &'a str,
    confidence: f64,
    detection_method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    all_emotions: &'a EmotionScores,
}

#[derive(Debug, Serialize)]
struct JsonResponse<'a> {
    input: &'a str,
    crisis_detected: bool,
    emotion_analysis: EmotionAnalysis<'a>,
    response: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_source: Option<ResponseSource>,
    safety_warning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    meditation_suggestion: Option<&'a MeditationVideo>,
}

#[derive(Debug, Serialize)]
struct DetectionResponse<'a> {
    message: &'a str,
    crisis_detected: bool,
    emotion_analysis: EmotionAnalysis<'a>,
}

impl<'a> EmotionAnalysis<'a> {
    fn from_detection(detection: &'a DetectionResult) -> Self {
        Self {
            primary_emotion: detection.label.as_str(),
            confidence: detection.confidence,
            detection_method: detection.method.as_str(),
            model: detection.model.as_deref(),
            all_emotions: &detection.scores,
        }
    }
}

/// The `{"error": ...}` object for empty input
pub fn no_message_error() -> Value {
    json!({ "error": NO_MESSAGE_ERROR })
}

/// Render an outcome; the greeting outcome renders as the empty-input error
pub fn outcome_json(outcome: &ResolutionOutcome) -> Value {
    let Some(detection) = &outcome.detection else {
        return no_message_error();
    };

    let response_source = match outcome.source {
        ResponseSource::ExternalService | ResponseSource::TemplateFallback => Some(outcome.source),
        ResponseSource::CrisisOverride | ResponseSource::Greeting => None,
    };

    let body = JsonResponse {
        input: &outcome.input,
        crisis_detected: outcome.crisis,
        emotion_analysis: EmotionAnalysis::from_detection(detection),
        response: &outcome.response,
        response_source,
        safety_warning: outcome.crisis,
        meditation_suggestion: outcome.meditation.as_ref(),
    };

    to_json(&body)
}

/// Render a classification-only result
pub fn detection_json(input: &str, detection: &DetectionResult) -> Value {
    let body = DetectionResponse {
        message: input,
        crisis_detected: detection.label == EmotionLabel::Crisis,
        emotion_analysis: EmotionAnalysis::from_detection(detection),
    };

    to_json(&body)
}

fn to_json<T: Serialize>(body: &T) -> Value {
    match serde_json::to_value(body) {
        Ok(value) => value,
        Err(e) => {
            // Only reachable with non-finite floats, which scores never hold
            tracing::error!("Failed to serialize outcome: {}", e);
            json!({ "error": "Failed to serialize response" })
        }
    }
}
