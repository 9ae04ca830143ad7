//! LLM domain — the model client used by the operation pipeline.
//!
//! Public API for the model side of gloss-panel.
//! External code should only use the items exported here.
//!
//! Providers:
//!   - Google Gemini (gemini.rs)
//!
//! Shared:
//!   - types.rs — error taxonomy + fallback text

pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{fallback_text, ModelError, FALLBACK_PREFIX};

use std::future::Future;

/// One prompt in, one text out.
///
/// Implementations never fail: transport and parse errors resolve to the
/// fallback text so the pipeline renders them like any other answer.
pub trait ModelClient {
    fn generate(&self, prompt: &str) -> impl Future<Output = String>;
}
