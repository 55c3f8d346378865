//! External collaborators: the hosted response generator, the retry
//! policy that wraps it, and the static fallback response table.
//!
//! The core never sees a wire format; everything behind
//! [`ResponseGenerator`] is opaque.

pub mod fallback;
pub mod openai_generator;
pub mod retry;

pub use openai_generator::OpenAiGenerator;
pub use retry::{Backoff, RetryPolicy};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a response generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The remote service answered with an error or the request failed in
    /// transit. `is_retryable` distinguishes transient conditions
    /// (timeouts, rate limits, 5xx) from permanent ones.
    #[error("Generator request failed: {message}")]
    Process {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
    },

    /// The call completed but produced no usable output.
    #[error("Generator execution failed: {0}")]
    ExecutionFailed(String),

    /// The generator is not usable at all (missing credential etc.).
    #[error("Generator misconfigured: {0}")]
    Configuration(String),
}

impl GeneratorError {
    /// Whether retrying this call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Process {
                is_retryable: true,
                ..
            }
        )
    }
}

/// An opaque "generate response" capability.
///
/// Implementations take the specialist's instruction text, the assembled
/// conversation text, and a session handle, and return plain text. The
/// orchestrator treats any failure as transient and falls back to the
/// static response table after retries are exhausted.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Short human-readable description for logs.
    fn describe(&self) -> &str;

    /// Generates a response for the given conversation.
    async fn generate(
        &self,
        instructions: &str,
        conversation: &str,
        session_id: &str,
    ) -> Result<String, GeneratorError>;
}
