// Response generation
//
// External generative service first, canned templates whenever that path
// is unavailable.

mod generator;
mod meditation;
mod prompt;
mod templates;

pub use generator::{ResponseGenerator, ResponseSource};
pub use meditation::{suggestion_chance, MeditationAdvisor, MeditationVideo, MEDITATION_VIDEOS};
pub use prompt::{percent, system_prompt};
pub use templates::{templates_for, TemplatePicker};
