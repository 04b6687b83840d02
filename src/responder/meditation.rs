// Guided meditation suggestions
//
// Attached to some non-crisis replies, more often for fear and sadness.

use serde::Serialize;

use super::templates::TemplatePicker;
use crate::emotion::EmotionLabel;

/// A curated guided meditation video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeditationVideo {
    pub title: &'static str,
    pub url: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const MEDITATION_VIDEOS: &[MeditationVideo] = &[
    MeditationVideo {
        title: "10-Minute Guided Meditation for Anxiety",
        url: "https://www.youtube.com/watch?v=4pLUleLdwY4",
        duration: "10 min",
        description: "A calming meditation to help reduce anxiety and stress",
    },
    MeditationVideo {
        title: "Sleep Meditation: Guided Sleep Story",
        url: "https://www.youtube.com/watch?v=8fxC2qPjHkU",
        duration: "30 min",
        description: "Relaxing guided meditation to help you fall asleep peacefully",
    },
    MeditationVideo {
        title: "Morning Meditation for Positive Energy",
        url: "https://www.youtube.com/watch?v=2OGYf8H6M6g",
        duration: "15 min",
        description: "Start your day with positive energy and mindfulness",
    },
    MeditationVideo {
        title: "Breathing Exercises for Stress Relief",
        url: "https://www.youtube.com/watch?v=4Lb5L-VEm34",
        duration: "5 min",
        description: "Simple breathing techniques to calm your mind",
    },
    MeditationVideo {
        title: "Body Scan Meditation for Relaxation",
        url: "https://www.youtube.com/watch?v=Hz_KNs0q3wE",
        duration: "20 min",
        description: "Progressive relaxation through body awareness",
    },
];

const HEIGHTENED_CHANCE: f64 = 0.4;
const BASE_CHANCE: f64 = 0.2;

/// Probability of attaching a suggestion for a detected label
pub fn suggestion_chance(label: EmotionLabel) -> f64 {
    match label {
        EmotionLabel::Fear | EmotionLabel::Sadness => HEIGHTENED_CHANCE,
        EmotionLabel::Crisis => 0.0,
        _ => BASE_CHANCE,
    }
}

/// Decides whether a reply carries a meditation suggestion, and which one
#[derive(Default)]
pub struct MeditationAdvisor {
    picker: TemplatePicker,
}

impl MeditationAdvisor {
    pub fn new(picker: TemplatePicker) -> Self {
        Self { picker }
    }

    pub fn suggest(&self, label: EmotionLabel) -> Option<MeditationVideo> {
        if !self.picker.chance(suggestion_chance(label)) {
            return None;
        }
        let video = MEDITATION_VIDEOS[self.picker.index(MEDITATION_VIDEOS.len())];
        tracing::debug!(title = video.title, "Suggesting meditation");
        Some(video)
    }
}
