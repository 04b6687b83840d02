// System instruction for the generative service

use crate::emotion::EmotionLabel;

/// Whole-number percentage, e.g. 0.734 -> "73%"
pub fn percent(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

/// Tone guidance for the detected emotion
fn emotion_context(label: EmotionLabel, confidence: f64) -> String {
    let pct = percent(confidence);
    match label {
        EmotionLabel::Joy => format!(
            "The user is experiencing joy (confidence: {}). Match their energy with enthusiasm.",
            pct
        ),
        EmotionLabel::Sadness => format!(
            "The user is feeling sad (confidence: {}). Respond with deep empathy and compassion.",
            pct
        ),
        EmotionLabel::Anger => format!(
            "The user is angry (confidence: {}). Stay calm and acknowledge their frustration.",
            pct
        ),
        EmotionLabel::Fear => format!(
            "The user is experiencing fear/anxiety (confidence: {}). Provide reassurance.",
            pct
        ),
        EmotionLabel::Love => format!(
            "The user is expressing love (confidence: {}). Respond warmly and celebrate their feelings.",
            pct
        ),
        EmotionLabel::Surprise => format!(
            "The user is surprised (confidence: {}). Show genuine curiosity and interest.",
            pct
        ),
        EmotionLabel::Disgust => format!(
            "The user is feeling disgusted (confidence: {}). Acknowledge their strong reaction.",
            pct
        ),
        EmotionLabel::Neutral | EmotionLabel::Crisis => format!(
            "The user's emotional state is unclear (confidence: {}). Be warm and supportive.",
            pct
        ),
    }
}

/// Build the system instruction naming the label and confidence
pub fn system_prompt(label: EmotionLabel, confidence: f64) -> String {
    format!(
        "You are an empathetic AI assistant. {}\n\n\
        Respond in 2-4 sentences with genuine warmth. Include one relevant emoji. \
        Focus on understanding and connection.",
        emotion_context(label, confidence)
    )
}
