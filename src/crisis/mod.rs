// Crisis module
// Safety override: phrase detection and the fixed help message

mod detector;

pub use detector::{CrisisDetector, CrisisKeywords, DEFAULT_CRISIS_PHRASES};

/// Safety message returned verbatim whenever a crisis phrase is detected
pub const CRISIS_RESPONSE: &str = r#"I'm deeply concerned about what you're sharing with me.  Your life has value, and you matter.

 **Immediate Help Available:**
• **Call 9152987821** - Suicide & Crisis Lifeline (India)
• **Text "HELLO" to 741741** - Crisis Text Line
• **Call 112** - Emergency services

**International:**
• **UK**: 116 123 (Samaritans)
• **Canada**: 1-833-456-4566
• **Australia**: 13 11 14 (Lifeline)

Please reach out - professional counselors are available 24/7."#;

/// Analysis line shown alongside the crisis message
pub const CRISIS_ANALYSIS: &str = "**CRISIS DETECTED** - Immediate help recommended";
