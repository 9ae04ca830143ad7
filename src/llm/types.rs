//! Model client error taxonomy and the fallback text shown in its place.
//!
//! Errors never leave the client: `fallback_text` turns any of them into
//! the string the result view renders.

use thiserror::Error;

pub const FALLBACK_PREFIX: &str = "Oops, I went blank.";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response is not JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("response has no candidates[0].content.parts[0].text")]
    MissingText,
}

/// Text rendered as the model output when the call fails.
pub fn fallback_text(error: &ModelError) -> String {
    format!("{}\n\n{}", FALLBACK_PREFIX, error)
}
