// Resolution pipeline and its presentation adapters

mod analysis;
mod json;
mod message;
mod outcome;
mod resolution;

pub use analysis::{analysis_for, emotion_breakdown, format_analysis, score_bar, GREETING_ANALYSIS};
pub use json::{detection_json, no_message_error, outcome_json, NO_MESSAGE_ERROR};
pub use message::UserMessage;
pub use outcome::ResolutionOutcome;
pub use resolution::{ResolutionPipeline, GREETING};
