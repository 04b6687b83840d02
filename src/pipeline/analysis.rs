// Human-readable analysis text for the plain entry point

use std::fmt::Write;

use super::outcome::ResolutionOutcome;
use crate::crisis::CRISIS_ANALYSIS;
use crate::emotion::{DetectionResult, EmotionScores};
use crate::responder::{percent, ResponseSource};

/// Analysis shown while no message has been sent
pub const GREETING_ANALYSIS: &str = "Waiting for your message...";

const BAR_WIDTH: usize = 15;
const MIN_SHOWN_SCORE: f64 = 0.05;
const MAX_SHOWN_EMOTIONS: usize = 6;

/// Analysis text for any outcome
pub fn analysis_for(outcome: &ResolutionOutcome) -> String {
    if outcome.crisis {
        return CRISIS_ANALYSIS.to_string();
    }
    let Some(detection) = &outcome.detection else {
        return GREETING_ANALYSIS.to_string();
    };

    let mut analysis = format_analysis(detection, outcome.source);
    if let Some(video) = &outcome.meditation {
        let _ = write!(
            analysis,
            "\n**Suggested Meditation:** {} ({})\n{}\n",
            video.title, video.duration, video.url
        );
    }
    analysis
}

/// Label, confidence, method, source, then a bar per notable score
pub fn format_analysis(detection: &DetectionResult, source: ResponseSource) -> String {
    let mut analysis = String::new();
    let _ = writeln!(
        analysis,
        "**Detected Emotion:** {} ({} confidence)",
        detection.label.title(),
        percent(detection.confidence)
    );
    let _ = writeln!(analysis, "**Detection Method:** {}", detection.method.describe());
    let _ = writeln!(analysis, "**Response Source:** {}", source.describe());
    analysis.push('\n');
    analysis.push_str("**Emotion Breakdown:**\n");
    analysis.push_str(&emotion_breakdown(&detection.scores));
    analysis
}

/// One line per score above 5%, highest first, at most six
pub fn emotion_breakdown(scores: &EmotionScores) -> String {
    let mut lines = String::new();
    for (label, score) in scores.ranked().into_iter().take(MAX_SHOWN_EMOTIONS) {
        if score > MIN_SHOWN_SCORE {
            let _ = writeln!(
                lines,
                "• {}: {} {:.1}%",
                label.title(),
                score_bar(score),
                score * 100.0
            );
        }
    }
    lines
}

/// Fixed-width bar: filled blocks proportional to the score
pub fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
