// Error taxonomy for external collaborators and user-friendly messages
//
// Collaborators (the emotion model and the generative service) report
// failures as `ServiceError`. Callers never surface these to users; they
// pick the fallback path and log the reason.

use thiserror::Error;

/// Why a collaborator could not produce a result
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No credential or handle configured for this collaborator
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Connection, DNS, or TLS failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The request exceeded the client timeout
    #[error("request timed out")]
    Timeout,

    /// Non-success HTTP status
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else if err.is_decode() {
            ServiceError::Malformed(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

impl ServiceError {
    /// True when the collaborator was simply never set up
    pub fn is_not_configured(&self) -> bool {
        matches!(self, ServiceError::NotConfigured(_))
    }
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(path: &str, error: &str) -> String {
    format!(
        "Failed to parse config file {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat {}\x1b[0m\n\n\
        2. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Unclosed section headers []\n\
           • Numbers given as strings (max_tokens = \"200\")",
        path, error, path
    )
}

/// Format a crisis phrase file error with helpful suggestions
pub fn crisis_keywords_error(path: &str) -> String {
    format!(
        "Could not load crisis phrases from {}\n\n\
        \x1b[1;33mExpected format:\x1b[0m\n\
           {{ \"phrases\": [\"suicide\", \"want to die\"] }}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Remove crisis_keywords_path from the config to use the built-in list\n\
        2. Validate the file:\n\
           \x1b[36mpython3 -m json.tool {}\x1b[0m",
        path, path
    )
}
