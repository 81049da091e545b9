use thiserror::Error;

/// Why a rate lookup failed.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Network failure, non-2xx status, or unreadable body.
    #[error("rate provider request failed: {0}")]
    Transport(String),

    /// Body does not match the expected rate schema.
    #[error("unexpected rate provider response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Parse(e.to_string())
    }
}
