// Template bank: canned supportive replies keyed by emotion
//
// Used whenever the generative service is unavailable. Selection is random
// but can be seeded so tests and replays are deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::emotion::EmotionLabel;

const JOY_TEMPLATES: &[&str] = &[
    "That's absolutely wonderful!  Your happiness is truly contagious! I can feel the positive energy radiating from your words.",
    "I'm beaming with joy reading this!  It's so beautiful to see someone experiencing such happiness.",
    "This is fantastic news!  I love hearing when people are thriving and feeling great!",
];

const SADNESS_TEMPLATES: &[&str] = &[
    "I can hear the pain in your words, and I want you to know that I'm here with you.  What you're feeling is completely valid.",
    "My heart goes out to you during this difficult time.  You don't have to carry this burden alone.",
    "I'm so sorry you're going through this.  Your feelings matter, and it's brave of you to reach out.",
];

const ANGER_TEMPLATES: &[&str] = &[
    "I can feel the intensity of your anger, and I want you to know that your feelings are valid.  Let's work through this together.",
    "Your frustration is coming through loud and clear.  Anger often signals something important has been threatened.",
    "I hear you, and I understand why you're feeling this way.  Let's channel this constructively.",
];

const FEAR_TEMPLATES: &[&str] = &[
    "I can sense your fear, and I want you to know that you're brave for sharing this.  You're not alone.",
    "What you're feeling sounds really scary.  Fear is natural, but courage is moving forward despite it.",
    "I hear the worry in your voice.  Let's break this down into manageable pieces together.",
];

const SURPRISE_TEMPLATES: &[&str] = &[
    "Wow!  I can practically feel your surprise! Life has a way of throwing curveballs when we least expect them.",
    "That sounds absolutely incredible!  I love how life can surprise us in unexpected ways.",
    "What an absolutely stunning surprise!  Life really knows how to keep us on our toes!",
];

const DISGUST_TEMPLATES: &[&str] = &[
    "I can sense your strong reaction to this.  Sometimes we encounter things that really don't sit well with us.",
    "Your response is completely understandable.  When something goes against our values, it creates these intense feelings.",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "I'm here and ready to listen.  What's on your mind today?",
    "Thank you for sharing with me. I appreciate you taking the time to connect.",
    "I'm glad you're here.  How has your day been treating you?",
];

const LOVE_TEMPLATES: &[&str] = &[
    "The warmth and love in your message is beautiful!  Love is one of the most powerful forces.",
    "I can feel the deep affection in your words.  Love makes life so much richer and meaningful.",
];

/// Canned replies for a label; labels without entries use the neutral list
pub fn templates_for(label: EmotionLabel) -> &'static [&'static str] {
    let templates = match label {
        EmotionLabel::Joy => JOY_TEMPLATES,
        EmotionLabel::Sadness => SADNESS_TEMPLATES,
        EmotionLabel::Anger => ANGER_TEMPLATES,
        EmotionLabel::Fear => FEAR_TEMPLATES,
        EmotionLabel::Surprise => SURPRISE_TEMPLATES,
        EmotionLabel::Disgust => DISGUST_TEMPLATES,
        EmotionLabel::Love => LOVE_TEMPLATES,
        EmotionLabel::Neutral | EmotionLabel::Crisis => NEUTRAL_TEMPLATES,
    };
    if templates.is_empty() {
        NEUTRAL_TEMPLATES
    } else {
        templates
    }
}

/// Source of randomness for template selection
#[derive(Default)]
pub enum TemplatePicker {
    /// Per-thread RNG, nothing shared between callers
    #[default]
    Thread,
    /// Seeded RNG shared behind a lock
    Seeded(Mutex<StdRng>),
}

impl TemplatePicker {
    pub fn seeded(seed: u64) -> Self {
        TemplatePicker::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Seeded picker when a seed is given, thread RNG otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    pub(crate) fn index(&self, len: usize) -> usize {
        match self {
            TemplatePicker::Thread => rand::thread_rng().gen_range(0..len),
            TemplatePicker::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_range(0..len)
            }
        }
    }

    /// True with probability `p`, clamped to [0, 1]
    pub(crate) fn chance(&self, p: f64) -> bool {
        let p = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            TemplatePicker::Thread => rand::thread_rng().gen_bool(p),
            TemplatePicker::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_bool(p)
            }
        }
    }

    /// Pick one canned reply for the label
    pub fn pick(&self, label: EmotionLabel) -> &'static str {
        let templates = templates_for(label);
        templates[self.index(templates.len())]
    }
}
